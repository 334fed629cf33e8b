//! Weighted single choice and uniform subset sampling.
//!
//! All randomness in condition generation flows through these two functions
//! and the caller-supplied RNG.

use std::collections::BTreeMap;

use rand::seq::{index, SliceRandom};
use rand::Rng;

use crate::error::{ConditionError, Result};

/// Pick one option, weighted by `weights` when given.
///
/// Missing entries weigh 1.0. Zero-weight options are never picked.
/// Negative or non-finite weights fail with `InvalidWeight`; an all-zero
/// table fails with `ZeroTotalWeight` and a total too large to represent
/// with `NonFiniteTotalWeight`.
pub fn weighted_choice<'a, S: AsRef<str>>(
    options: &'a [S],
    weights: Option<&BTreeMap<String, f64>>,
    rng: &mut impl Rng,
) -> Result<&'a str> {
    let weights = match weights {
        Some(w) if !w.is_empty() => w,
        _ => {
            return options
                .choose(rng)
                .map(|option| option.as_ref())
                .ok_or(ConditionError::EmptyOptions)
        }
    };
    if options.is_empty() {
        return Err(ConditionError::EmptyOptions);
    }

    let mut resolved = Vec::with_capacity(options.len());
    for option in options {
        let option = option.as_ref();
        let weight = weights.get(option).copied().unwrap_or(1.0);
        if !weight.is_finite() || weight < 0.0 {
            return Err(ConditionError::InvalidWeight {
                axis: String::new(),
                value: option.to_string(),
                weight,
            });
        }
        resolved.push(weight);
    }

    let total: f64 = resolved.iter().sum();
    if !total.is_finite() {
        return Err(ConditionError::NonFiniteTotalWeight(String::new()));
    }
    if total <= 0.0 {
        return Err(ConditionError::ZeroTotalWeight(String::new()));
    }

    let roll = rng.gen::<f64>() * total;
    let mut cumulative = 0.0;
    let mut last_reachable = 0;
    for (i, weight) in resolved.iter().enumerate() {
        if *weight <= 0.0 {
            continue;
        }
        cumulative += weight;
        last_reachable = i;
        if roll < cumulative {
            return Ok(options[i].as_ref());
        }
    }

    // Float rounding can leave roll == total
    Ok(options[last_reachable].as_ref())
}

/// Draw `k` distinct items uniformly, returned in draw order.
///
/// `k` larger than the pool is clamped to the pool size.
pub fn sample_distinct<'a, T>(pool: &'a [T], k: usize, rng: &mut impl Rng) -> Vec<&'a T> {
    let k = k.min(pool.len());
    index::sample(rng, pool.len(), k)
        .into_iter()
        .map(|i| &pool[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::{HashMap, HashSet};

    fn weights(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_weight_skew() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let w = weights(&[("rare", 0.01), ("common", 100.0)]);
        let common = (0..1000)
            .filter(|_| {
                weighted_choice(&["rare", "common"], Some(&w), &mut rng).unwrap() == "common"
            })
            .count();
        assert!(common > 900, "common picked only {} times", common);
    }

    #[test]
    fn test_uniform_fallback() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let options = ["a", "b", "c"];
        let mut counts = HashMap::new();
        for _ in 0..3000 {
            *counts
                .entry(weighted_choice(&options, None, &mut rng).unwrap())
                .or_insert(0) += 1;
        }
        for option in options {
            let n = counts.get(option).copied().unwrap_or(0);
            assert!((800..=1200).contains(&n), "{} drawn {} times", option, n);
        }
    }

    #[test]
    fn test_empty_weight_map_is_uniform() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let empty = BTreeMap::new();
        let seen: HashSet<_> = (0..200)
            .map(|_| weighted_choice(&["x", "y"], Some(&empty), &mut rng).unwrap())
            .collect();
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_zero_weight_never_chosen() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let w = weights(&[("never", 0.0)]);
        for _ in 0..500 {
            let picked = weighted_choice(&["never", "always"], Some(&w), &mut rng).unwrap();
            assert_ne!(picked, "never");
        }
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let w = weights(&[("a", -1.0), ("b", 1.0)]);
        let result = weighted_choice(&["a", "b"], Some(&w), &mut rng);
        assert!(matches!(result, Err(ConditionError::InvalidWeight { value, .. }) if value == "a"));
    }

    #[test]
    fn test_all_zero_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let w = weights(&[("a", 0.0), ("b", 0.0)]);
        let result = weighted_choice(&["a", "b"], Some(&w), &mut rng);
        assert!(matches!(result, Err(ConditionError::ZeroTotalWeight(_))));
    }

    #[test]
    fn test_overflowing_total_rejected() {
        // Each weight is finite, their sum is not
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let w = weights(&[("a", f64::MAX), ("b", f64::MAX)]);
        let result = weighted_choice(&["a", "b"], Some(&w), &mut rng);
        assert!(matches!(result, Err(ConditionError::NonFiniteTotalWeight(_))));
    }

    #[test]
    fn test_empty_options_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let options: [&str; 0] = [];
        assert!(matches!(
            weighted_choice(&options, None, &mut rng),
            Err(ConditionError::EmptyOptions)
        ));
        let w = weights(&[("a", 1.0)]);
        assert!(matches!(
            weighted_choice(&options, Some(&w), &mut rng),
            Err(ConditionError::EmptyOptions)
        ));
    }

    #[test]
    fn test_same_seed_same_choice() {
        let w = weights(&[("a", 2.0), ("b", 1.0), ("c", 0.5)]);
        let draw = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..20)
                .map(|_| weighted_choice(&["a", "b", "c"], Some(&w), &mut rng).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(99), draw(99));
    }

    #[test]
    fn test_sample_distinct() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let pool = ["health", "demeanor", "age"];
        for k in 0..=4 {
            let picked = sample_distinct(&pool, k, &mut rng);
            assert_eq!(picked.len(), k.min(pool.len()));
            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), picked.len());
        }
    }

    #[test]
    fn test_sample_distinct_covers_every_subset() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let pool = ["a", "b", "c"];
        let mut subsets = HashSet::new();
        for _ in 0..300 {
            let mut picked: Vec<&str> = sample_distinct(&pool, 2, &mut rng)
                .into_iter()
                .copied()
                .collect();
            picked.sort();
            subsets.insert(picked);
        }
        assert_eq!(subsets.len(), 3);
    }

    #[test]
    fn test_sample_distinct_returns_draw_order() {
        // Over many draws every item leads at least once
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let pool = ["a", "b", "c"];
        let firsts: HashSet<&str> = (0..200)
            .map(|_| *sample_distinct(&pool, 3, &mut rng)[0])
            .collect();
        assert_eq!(firsts.len(), 3);
    }
}
