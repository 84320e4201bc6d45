use rand::Rng;

///
/// Picks an item with probability proportional to its weight.
///
/// Weights don't need to sum to 1. Returns None if there's nothing with a positive weight.
pub fn weighted_random<T, R: Rng + ?Sized>(items: Vec<(T, f64)>, rng: &mut R) -> Option<T> {
    let total_weight: f64 = items.iter().map(|(_, weight)| weight).sum();
    if !(total_weight > 0.0 && total_weight.is_finite()) {
        return None;
    }
    let random = rng.gen_range(0.0..total_weight);
    let mut current_weight = 0.0;
    let mut last = None;
    for (item, weight) in items {
        if weight <= 0.0 {
            continue;
        }
        current_weight += weight;
        if current_weight > random {
            return Some(item);
        }
        last = Some(item);
    }
    // Rounding can leave the running sum just short of the draw
    last
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_single_item() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(weighted_random(vec![("a", 0.3)], &mut rng), Some("a"));
        }
    }

    #[test]
    fn test_zero_weight_never_picked() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..1000 {
            let item = weighted_random(vec![("a", 0.0), ("b", 1.0), ("c", 0.0)], &mut rng);
            assert_eq!(item, Some("b"));
        }
    }

    #[test]
    fn test_no_weight() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(weighted_random::<&str, _>(vec![], &mut rng), None);
        assert_eq!(weighted_random(vec![("a", 0.0)], &mut rng), None);
    }

    #[test]
    fn test_proportions() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut counts = [0usize; 2];
        for _ in 0..10000 {
            let i = weighted_random(vec![(0, 3.0), (1, 1.0)], &mut rng).unwrap();
            counts[i] += 1;
        }
        let ratio = counts[0] as f64 / 10000.0;
        assert!((ratio - 0.75).abs() < 0.02, "ratio was {}", ratio);
    }
}
