//! Named axes and their ordered value lists.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ConditionError, Result};

/// One dimension of character or world state (e.g. "physique", "wealth").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    pub name: String,
    /// Allowed values in definition order. Order is stable for weight lookups.
    pub values: Vec<String>,
}

impl Axis {
    pub fn new(
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered set of axes for one family.
///
/// Iteration order is the definition order and never changes after
/// construction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Axis>", into = "Vec<Axis>")]
pub struct AxisRegistry {
    axes: Vec<Axis>,
}

impl AxisRegistry {
    /// Build a registry, rejecting duplicate axes, duplicate values and empty axes.
    pub fn new(axes: Vec<Axis>) -> Result<Self> {
        let mut names = HashSet::new();
        for axis in &axes {
            if !names.insert(axis.name.as_str()) {
                return Err(ConditionError::DuplicateAxis(axis.name.clone()));
            }
            if axis.values.is_empty() {
                return Err(ConditionError::EmptyAxis(axis.name.clone()));
            }
            let mut seen = HashSet::new();
            for value in &axis.values {
                if !seen.insert(value.as_str()) {
                    return Err(ConditionError::DuplicateValue {
                        axis: axis.name.clone(),
                        value: value.clone(),
                    });
                }
            }
        }
        Ok(Self { axes })
    }

    /// Build from compiled-in `(name, values)` tables.
    pub fn from_static(table: &[(&str, &[&str])]) -> Result<Self> {
        Self::new(
            table
                .iter()
                .map(|(name, values)| Axis::new(*name, values.iter().copied()))
                .collect(),
        )
    }

    /// Axis names in registry order.
    pub fn axis_names(&self) -> Vec<&str> {
        self.axes.iter().map(|a| a.name.as_str()).collect()
    }

    /// All values for `name`, or `UnknownAxisKind`.
    pub fn axis_values(&self, name: &str) -> Result<&[String]> {
        self.get(name)
            .map(|a| a.values.as_slice())
            .ok_or_else(|| ConditionError::UnknownAxisKind(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&Axis> {
        self.axes.iter().find(|a| a.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Axis> {
        self.axes.iter()
    }

    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }
}

impl TryFrom<Vec<Axis>> for AxisRegistry {
    type Error = ConditionError;

    fn try_from(axes: Vec<Axis>) -> Result<Self> {
        Self::new(axes)
    }
}

impl From<AxisRegistry> for Vec<Axis> {
    fn from(registry: AxisRegistry) -> Self {
        registry.axes
    }
}
