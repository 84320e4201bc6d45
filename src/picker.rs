//! Weighted random selection over a configuration's activities
pub mod weighted_random;

use crate::config::{total_weight_ratio, Activity, Configuration, Weight};
use linked_hash_set::LinkedHashSet;
use log::{debug, trace};
use rand::Rng;
use weighted_random::weighted_random;

const TOTAL_WEIGHT: f64 = 1.0;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PickerError {
    #[error("no activities to pick from")]
    NoActivities,

    #[error("at least one whitelisted activity should not have a weight_ratio")]
    AllWeightRatio,
}

///
/// Picks activities at random.
///
/// Activities with a weight_ratio are picked with exactly that probability. Whatever
/// is left is shared between the weight_mult activities in proportion to their multiplier.
#[derive(Debug, Clone)]
pub struct Picker {
    activities: Vec<Activity>,
    /// Probability left over once the weight_ratio activities are taken out
    remaining_weight: f64,
    /// Largest weight_mult. Multipliers are divided by it before summing so the sum stays finite.
    max_weight_mult: f64,
    /// Sum of the multipliers after dividing by `max_weight_mult`
    total_scaled_mult: f64,
    /// Index of the last weight_mult activity, picked if rounding leaves nothing else
    fallback: usize,
}

impl Picker {
    pub fn new(config: &Configuration) -> Result<Picker, PickerError> {
        Picker::with_blacklist(config, std::iter::empty::<&str>())
    }

    pub fn with_blacklist<I, S>(config: &Configuration, blacklist: I) -> Result<Picker, PickerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let blacklist: LinkedHashSet<String> = blacklist
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();
        for name in blacklist.iter() {
            if !config.activities().iter().any(|a| a.name() == name) {
                debug!("Blacklisted activity {} is not in the config", name);
            }
        }

        let activities: Vec<Activity> = config
            .activities()
            .iter()
            .filter(|activity| !blacklist.contains(activity.name()))
            .cloned()
            .collect();
        if activities.is_empty() {
            return Err(PickerError::NoActivities);
        }
        let fallback = match activities.iter().rposition(|a| a.weight_mult().is_some()) {
            Some(i) => i,
            None => return Err(PickerError::AllWeightRatio),
        };

        let total_weight_ratio = total_weight_ratio(&activities);
        let max_weight_mult = activities
            .iter()
            .filter_map(|a| a.weight_mult())
            .fold(0.0, f64::max);
        let total_scaled_mult: f64 = activities
            .iter()
            .filter_map(|a| a.weight_mult())
            .map(|mult| mult / max_weight_mult)
            .sum();
        let picker = Picker {
            activities,
            remaining_weight: TOTAL_WEIGHT - total_weight_ratio,
            max_weight_mult,
            total_scaled_mult,
            fallback,
        };
        debug!(
            "Picker over {} activities ({} blacklisted): weight_ratio {}, max weight_mult {}, base {}",
            picker.activities.len(),
            blacklist.len(),
            total_weight_ratio,
            max_weight_mult,
            picker.weight_mult_base()
        );

        Ok(picker)
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    ///
    /// Probability contributed by a weight_mult of 1.
    ///
    /// Can be 0 or infinite for extreme multipliers; the weights themselves never are.
    pub fn weight_mult_base(&self) -> f64 {
        self.remaining_weight / self.max_weight_mult / self.total_scaled_mult
    }

    fn mult_weight(&self, mult: f64) -> f64 {
        self.remaining_weight * (mult / self.max_weight_mult / self.total_scaled_mult)
    }

    fn weight(&self, activity: &Activity) -> f64 {
        match activity.weight() {
            Weight::Ratio(ratio) => TOTAL_WEIGHT * ratio,
            Weight::Multiplier(mult) => self.mult_weight(mult),
            Weight::DefaultMultiplier => self.mult_weight(1.0),
        }
    }

    /// Probability of each activity being picked, in config order. Sums to 1.
    pub fn weights(&self) -> Vec<f64> {
        self.activities.iter().map(|a| self.weight(a)).collect()
    }

    pub fn weights_by_name(&self) -> Vec<(&str, f64)> {
        self.activities
            .iter()
            .map(|a| (a.name(), self.weight(a)))
            .collect()
    }

    pub fn pick(&self) -> &str {
        self.pick_with(&mut rand::thread_rng())
    }

    pub fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let items = self
            .activities
            .iter()
            .map(|a| (a, self.weight(a)))
            .collect();
        let activity = weighted_random(items, rng).unwrap_or(&self.activities[self.fallback]);
        trace!("Picked {}", activity.name());
        activity.name()
    }
}
