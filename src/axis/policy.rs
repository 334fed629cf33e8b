//! Axis policies, weight tables, and exclusion rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::condition::Condition;

/// Which axes a family always fills and which it may add.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisPolicy {
    /// Always drawn, in this order.
    pub mandatory: Vec<String>,
    /// Candidates for the 0..=max_optional extra axes.
    #[serde(default)]
    pub optional: Vec<String>,
    /// Cap on optional axes per condition (default: 2).
    #[serde(default = "default_max_optional")]
    pub max_optional: usize,
}

fn default_max_optional() -> usize {
    2
}

impl AxisPolicy {
    pub fn new(mandatory: &[&str], optional: &[&str], max_optional: usize) -> Self {
        Self {
            mandatory: mandatory.iter().map(|s| s.to_string()).collect(),
            optional: optional.iter().map(|s| s.to_string()).collect(),
            max_optional,
        }
    }

    /// Upper bound actually used for the optional-count draw.
    pub fn effective_max_optional(&self) -> usize {
        self.max_optional.min(self.optional.len())
    }

    pub fn is_mandatory(&self, axis: &str) -> bool {
        self.mandatory.iter().any(|a| a == axis)
    }

    pub fn is_optional(&self, axis: &str) -> bool {
        self.optional.iter().any(|a| a == axis)
    }

    /// First axis that appears in both lists, if any.
    pub fn overlap(&self) -> Option<&str> {
        self.mandatory
            .iter()
            .find(|a| self.is_optional(a))
            .map(|a| a.as_str())
    }
}

/// Relative likelihoods per axis and value.
///
/// Axes absent from the table sample uniformly; values absent from an
/// axis's map weigh 1.0. Iteration is sorted by axis, then value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightTable {
    axes: BTreeMap<String, BTreeMap<String, f64>>,
}

impl WeightTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from compiled-in `(axis, [(value, weight)])` tables.
    pub fn from_static(table: &[(&str, &[(&str, f64)])]) -> Self {
        let axes = table
            .iter()
            .map(|(axis, values)| {
                let map = values.iter().map(|(v, w)| (v.to_string(), *w)).collect();
                (axis.to_string(), map)
            })
            .collect();
        Self { axes }
    }

    pub fn set(&mut self, axis: &str, value: &str, weight: f64) {
        self.axes
            .entry(axis.to_string())
            .or_default()
            .insert(value.to_string(), weight);
    }

    /// Weight of `value` on `axis`, 1.0 when there is no entry.
    pub fn weight_for(&self, axis: &str, value: &str) -> f64 {
        self.axes
            .get(axis)
            .and_then(|m| m.get(value))
            .copied()
            .unwrap_or(1.0)
    }

    /// The per-value map for `axis`, if the axis is weighted at all.
    pub fn axis_weights(&self, axis: &str) -> Option<&BTreeMap<String, f64>> {
        self.axes.get(axis)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, f64>)> {
        self.axes.iter().map(|(a, m)| (a.as_str(), m))
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }
}

/// When `trigger_axis == trigger_value`, drop any blocked axis holding a
/// blocked value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionRule {
    pub trigger_axis: String,
    pub trigger_value: String,
    pub blocked: BTreeMap<String, Vec<String>>,
}

impl ExclusionRule {
    pub fn new(trigger_axis: &str, trigger_value: &str, blocked: &[(&str, &[&str])]) -> Self {
        Self {
            trigger_axis: trigger_axis.to_string(),
            trigger_value: trigger_value.to_string(),
            blocked: blocked
                .iter()
                .map(|(axis, values)| {
                    (axis.to_string(), values.iter().map(|v| v.to_string()).collect())
                })
                .collect(),
        }
    }

    pub fn is_triggered(&self, condition: &Condition) -> bool {
        condition.get(&self.trigger_axis) == Some(self.trigger_value.as_str())
    }

    /// Apply against the current state of `condition`. Returns the number of
    /// axes removed.
    pub fn apply(&self, condition: &mut Condition) -> usize {
        if !self.is_triggered(condition) {
            return 0;
        }
        debug!("Exclusion rule triggered: {}={}", self.trigger_axis, self.trigger_value);

        let mut removed = 0;
        for (blocked_axis, blocked_values) in &self.blocked {
            let hit = condition
                .get(blocked_axis)
                .is_some_and(|v| blocked_values.iter().any(|b| b == v));
            if hit {
                if let Some(value) = condition.remove(blocked_axis) {
                    debug!(
                        "  Removed {}={} (conflicts with {}={})",
                        blocked_axis, value, self.trigger_axis, self.trigger_value
                    );
                    removed += 1;
                }
            }
        }
        removed
    }
}
