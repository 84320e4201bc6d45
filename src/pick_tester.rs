//! Measures how often each activity is actually picked against its computed weight
use crate::picker::Picker;
use log::debug;
use rand::Rng;

pub const DEFAULT_PASSES: usize = 10000;

#[derive(Debug, Clone, PartialEq)]
pub struct Frequency {
    pub name: String,
    pub expected: f64,
    pub observed: f64,
}

impl Frequency {
    pub fn deviation(&self) -> f64 {
        (self.expected - self.observed).abs()
    }
}

///
/// Picks `passes` times and counts how often each activity came up.
///
/// Results are in the picker's activity order.
pub fn sample_frequencies<R: Rng + ?Sized>(
    picker: &Picker,
    passes: usize,
    rng: &mut R,
) -> Vec<Frequency> {
    let weights = picker.weights_by_name();
    let mut counts = vec![0usize; weights.len()];
    for _ in 0..passes {
        let name = picker.pick_with(rng);
        if let Some(i) = weights.iter().position(|(n, _)| *n == name) {
            counts[i] += 1;
        }
    }
    let frequencies: Vec<Frequency> = weights
        .iter()
        .zip(counts)
        .map(|((name, expected), count)| Frequency {
            name: name.to_string(),
            expected: *expected,
            observed: if passes == 0 {
                0.0
            } else {
                count as f64 / passes as f64
            },
        })
        .collect();
    debug!(
        "{} passes, max deviation {:.4}",
        passes,
        max_deviation(&frequencies)
    );
    frequencies
}

pub fn max_deviation(frequencies: &[Frequency]) -> f64 {
    frequencies
        .iter()
        .map(|f| f.deviation())
        .fold(0.0, f64::max)
}
