//! Condition generation: policy → weighted picks → optional subset → exclusions.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use super::condition::Condition;
use super::sampling::{sample_distinct, weighted_choice};
use super::system::AxisSystem;
use crate::error::Result;

/// Generates conditions from an [`AxisSystem`].
pub struct ConditionGenerator;

impl ConditionGenerator {
    /// Generate one condition, drawing every random number from `rng`.
    ///
    /// Mandatory axes are filled in policy order, then 0..=max_optional
    /// optional axes are drawn without replacement and filled in draw order.
    /// Exclusion rules then run once each, in declaration order, against the
    /// condition as it stands at that point. A rule whose trigger is removed
    /// by a later rule is not undone.
    pub fn generate(system: &AxisSystem, rng: &mut impl Rng) -> Result<Condition> {
        let policy = system.policy();
        let mut chosen = Condition::new();

        for axis in &policy.mandatory {
            if let Some(value) = Self::pick(system, axis, rng)? {
                debug!("Mandatory axis selected: {} = {}", axis, value);
                chosen.insert(axis.as_str(), value);
            } else {
                warn!("Mandatory axis '{}' not defined in {} axes", axis, system.name());
            }
        }

        let num_optional = rng.gen_range(0..=policy.effective_max_optional());
        let optional_axes = sample_distinct(&policy.optional, num_optional, rng);
        debug!("Selected {} optional axes: {:?}", num_optional, optional_axes);

        for axis in optional_axes {
            if let Some(value) = Self::pick(system, axis, rng)? {
                debug!("Optional axis selected: {} = {}", axis, value);
                chosen.insert(axis.as_str(), value);
            } else {
                warn!("Optional axis '{}' not defined in {} axes", axis, system.name());
            }
        }

        let removed: usize = system
            .exclusions()
            .iter()
            .map(|rule| rule.apply(&mut chosen))
            .sum();
        if removed > 0 {
            info!("Applied {} exclusion rule(s)", removed);
        }

        Ok(chosen)
    }

    /// Weighted draw for one axis, `None` if the axis is not in the registry.
    fn pick<'s>(system: &'s AxisSystem, axis: &str, rng: &mut impl Rng) -> Result<Option<&'s str>> {
        let Some(defined) = system.registry().get(axis) else {
            return Ok(None);
        };
        weighted_choice(&defined.values, system.axis_weights(axis), rng)
            .map(Some)
            .map_err(|e| e.with_axis(axis))
    }
}

/// Generate a condition with its own RNG.
///
/// With a seed the RNG is `ChaCha8Rng::seed_from_u64(seed)`, so equal seeds
/// give equal conditions. Without one it is seeded from entropy. No state is
/// shared between calls.
pub fn generate_condition(system: &AxisSystem, seed: Option<u64>) -> Result<Condition> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    ConditionGenerator::generate(system, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::{AxisPolicy, AxisRegistry, ExclusionRule, WeightTable};
    use crate::families::{ConditionData, Family};
    use std::collections::HashSet;

    fn system(
        axes: &[(&str, &[&str])],
        policy: AxisPolicy,
        weights: WeightTable,
        exclusions: Vec<ExclusionRule>,
    ) -> AxisSystem {
        let registry = AxisRegistry::from_static(axes).unwrap();
        AxisSystem::new("test", registry, policy, weights, exclusions).unwrap()
    }

    #[test]
    fn test_seeded_reproducibility_for_every_family() {
        let data = ConditionData::defaults().unwrap();
        for family in Family::all() {
            let a = generate_condition(data.family(*family), Some(12345)).unwrap();
            let b = generate_condition(data.family(*family), Some(12345)).unwrap();
            assert_eq!(a, b, "{:?} not reproducible", family);
        }
    }

    #[test]
    fn test_mandatory_coverage_without_exclusions() {
        let data = ConditionData::defaults().unwrap();
        let character = data.family(Family::Character);
        let isolated = AxisSystem::new(
            "character",
            character.registry().clone(),
            character.policy().clone(),
            character.weights().clone(),
            vec![],
        )
        .unwrap();

        for seed in 0..200 {
            let condition = generate_condition(&isolated, Some(seed)).unwrap();
            for axis in &isolated.policy().mandatory {
                assert!(condition.contains_axis(axis), "seed {} missing {}", seed, axis);
            }
        }
    }

    #[test]
    fn test_optional_bound_and_subset() {
        let data = ConditionData::defaults().unwrap();
        for family in Family::all() {
            let system = data.family(*family);
            let policy = system.policy();
            for seed in 0..200 {
                let condition = generate_condition(system, Some(seed)).unwrap();
                let optional: Vec<&str> = condition
                    .axes()
                    .filter(|a| !policy.is_mandatory(a))
                    .collect();
                assert!(optional.len() <= policy.max_optional);
                assert!(optional.iter().all(|a| policy.is_optional(a)));
            }
        }
    }

    #[test]
    fn test_optional_count_covers_full_range() {
        let sys = system(
            &[("m", &["v"]), ("o1", &["v"]), ("o2", &["v"]), ("o3", &["v"])],
            AxisPolicy::new(&["m"], &["o1", "o2", "o3"], 2),
            WeightTable::new(),
            vec![],
        );
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let counts: HashSet<usize> = (0..300)
            .map(|_| ConditionGenerator::generate(&sys, &mut rng).unwrap().len() - 1)
            .collect();
        assert_eq!(counts, HashSet::from([0, 1, 2]));
    }

    #[test]
    fn test_exclusion_removes_forced_conflict() {
        // A is forced to "x" and B to "y"; the rule must drop B
        let sys = system(
            &[("A", &["x", "w"]), ("B", &["y", "z"])],
            AxisPolicy::new(&["A", "B"], &[], 0),
            WeightTable::from_static(&[
                ("A", &[("x", 1.0), ("w", 0.0)]),
                ("B", &[("y", 1.0), ("z", 0.0)]),
            ]),
            vec![ExclusionRule::new("A", "x", &[("B", &["y"])])],
        );
        for seed in 0..20 {
            let condition = generate_condition(&sys, Some(seed)).unwrap();
            assert_eq!(condition.get("A"), Some("x"));
            assert!(!condition.contains_axis("B"));
        }
    }

    #[test]
    fn test_exclusions_are_single_pass_in_declaration_order() {
        let axes: &[(&str, &[&str])] = &[("A", &["x"]), ("B", &["y"]), ("C", &["z"])];
        let policy = AxisPolicy::new(&["A", "B", "C"], &[], 0);
        let b_blocks_c = ExclusionRule::new("B", "y", &[("C", &["z"])]);
        let a_blocks_b = ExclusionRule::new("A", "x", &[("B", &["y"])]);

        // B's rule fires before B itself is removed; C stays removed
        let first = system(
            axes,
            policy.clone(),
            WeightTable::new(),
            vec![b_blocks_c.clone(), a_blocks_b.clone()],
        );
        let condition = generate_condition(&first, Some(0)).unwrap();
        assert_eq!(condition.axes().collect::<Vec<_>>(), vec!["A"]);

        // Reversed: B is gone before its rule is checked, so C survives
        let second = system(
            axes,
            policy,
            WeightTable::new(),
            vec![a_blocks_b, b_blocks_c],
        );
        let condition = generate_condition(&second, Some(0)).unwrap();
        assert_eq!(condition.axes().collect::<Vec<_>>(), vec!["A", "C"]);
    }

    #[test]
    fn test_mandatory_axis_can_be_excluded() {
        let sys = system(
            &[("A", &["x"]), ("B", &["y"])],
            AxisPolicy::new(&["A", "B"], &[], 0),
            WeightTable::new(),
            vec![ExclusionRule::new("B", "y", &[("A", &["x"])])],
        );
        let condition = generate_condition(&sys, Some(3)).unwrap();
        assert_eq!(condition.axes().collect::<Vec<_>>(), vec!["B"]);
    }

    #[test]
    fn test_missing_mandatory_axis_is_skipped() {
        let sys = system(
            &[("A", &["x"])],
            AxisPolicy::new(&["ghost", "A"], &["phantom"], 1),
            WeightTable::new(),
            vec![],
        );
        for seed in 0..20 {
            let condition = generate_condition(&sys, Some(seed)).unwrap();
            assert_eq!(condition.axes().collect::<Vec<_>>(), vec!["A"]);
        }
    }

    #[test]
    fn test_unseeded_generation_varies() {
        let data = ConditionData::defaults().unwrap();
        let character = data.family(Family::Character);
        let results: HashSet<String> = (0..20)
            .map(|_| generate_condition(character, None).unwrap().to_string())
            .collect();
        assert!(results.len() > 1, "all unseeded conditions were identical");
    }
}
