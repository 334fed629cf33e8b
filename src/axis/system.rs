//! A complete, validated family configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::policy::{AxisPolicy, ExclusionRule, WeightTable};
use super::registry::{Axis, AxisRegistry};
use crate::error::{ConditionError, Result};

/// Registry, policy, weights and exclusions for one generator family.
///
/// Immutable once built. Construction fails on configuration that would
/// make generation ill-defined; policy entries naming unknown axes are
/// allowed and skipped with a warning when generating.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSystem {
    name: String,
    registry: AxisRegistry,
    policy: AxisPolicy,
    weights: WeightTable,
    exclusions: Vec<ExclusionRule>,
}

/// On-disk shape of a family, as read from `<family>.json`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FamilyFile {
    pub axes: Vec<Axis>,
    pub policy: AxisPolicy,
    #[serde(default)]
    pub weights: WeightTable,
    #[serde(default)]
    pub exclusions: Vec<ExclusionRule>,
}

impl AxisSystem {
    pub fn new(
        name: impl Into<String>,
        registry: AxisRegistry,
        policy: AxisPolicy,
        weights: WeightTable,
        exclusions: Vec<ExclusionRule>,
    ) -> Result<Self> {
        if let Some(axis) = policy.overlap() {
            return Err(ConditionError::OverlappingPolicy(axis.to_string()));
        }

        for (axis, values) in weights.iter() {
            for (value, &weight) in values {
                if !weight.is_finite() || weight < 0.0 {
                    return Err(ConditionError::InvalidWeight {
                        axis: axis.to_string(),
                        value: value.clone(),
                        weight,
                    });
                }
            }
            if let Some(defined) = registry.get(axis) {
                let total: f64 = defined
                    .values
                    .iter()
                    .map(|v| weights.weight_for(axis, v))
                    .sum();
                if !total.is_finite() {
                    return Err(ConditionError::NonFiniteTotalWeight(axis.to_string()));
                }
                if total <= 0.0 {
                    return Err(ConditionError::ZeroTotalWeight(axis.to_string()));
                }
            }
        }

        Ok(Self {
            name: name.into(),
            registry,
            policy,
            weights,
            exclusions,
        })
    }

    pub fn from_file(name: impl Into<String>, file: FamilyFile) -> Result<Self> {
        Self::new(
            name,
            AxisRegistry::new(file.axes)?,
            file.policy,
            file.weights,
            file.exclusions,
        )
    }

    pub fn to_file(&self) -> FamilyFile {
        FamilyFile {
            axes: self.registry.iter().cloned().collect(),
            policy: self.policy.clone(),
            weights: self.weights.clone(),
            exclusions: self.exclusions.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn axis_names(&self) -> Vec<&str> {
        self.registry.axis_names()
    }

    pub fn axis_values(&self, axis: &str) -> Result<&[String]> {
        self.registry.axis_values(axis)
    }

    pub fn weight_for(&self, axis: &str, value: &str) -> f64 {
        self.weights.weight_for(axis, value)
    }

    /// Per-value weights for `axis`, `None` when it samples uniformly.
    pub fn axis_weights(&self, axis: &str) -> Option<&BTreeMap<String, f64>> {
        self.weights.axis_weights(axis)
    }

    pub fn policy(&self) -> &AxisPolicy {
        &self.policy
    }

    pub fn exclusions(&self) -> &[ExclusionRule] {
        &self.exclusions
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    pub fn registry(&self) -> &AxisRegistry {
        &self.registry
    }
}
