//! Built-in condition families and the data registry that holds them.
//!
//! The three families are compiled-in constant tables. An optional data
//! directory can replace any of them with a `<family>.json` file of the same
//! shape as [`FamilyFile`].

pub mod character;
pub mod facial;
pub mod occupation;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::axis::{AxisPolicy, AxisRegistry, AxisSystem, ExclusionRule, FamilyFile, WeightTable};
use crate::error::{ConditionError, Result};

pub use character::CHARACTER;
pub use facial::FACIAL;
pub use occupation::OCCUPATION;

/// `(axis, value)` that fires an exclusion rule.
pub type Trigger = (&'static str, &'static str);
/// Axis and the values blocked on it.
pub type BlockedValues = (&'static str, &'static [&'static str]);

/// Compiled-in family tables.
pub struct StaticFamily {
    pub name: &'static str,
    pub axes: &'static [(&'static str, &'static [&'static str])],
    pub mandatory: &'static [&'static str],
    pub optional: &'static [&'static str],
    pub max_optional: usize,
    pub weights: &'static [(&'static str, &'static [(&'static str, f64)])],
    pub exclusions: &'static [(Trigger, &'static [BlockedValues])],
}

impl StaticFamily {
    pub fn build(&self) -> Result<AxisSystem> {
        AxisSystem::new(
            self.name,
            AxisRegistry::from_static(self.axes)?,
            AxisPolicy::new(self.mandatory, self.optional, self.max_optional),
            WeightTable::from_static(self.weights),
            self.exclusions
                .iter()
                .map(|((axis, value), blocked)| ExclusionRule::new(axis, value, blocked))
                .collect(),
        )
    }
}

/// The generator families, in combination order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Character,
    Facial,
    Occupation,
}

impl Family {
    pub fn all() -> &'static [Family] {
        &[Family::Character, Family::Facial, Family::Occupation]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Family::Character => "character",
            Family::Facial => "facial",
            Family::Occupation => "occupation",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Family> {
        Self::all()
            .iter()
            .copied()
            .find(|f| f.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Override file name inside a data directory.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.name())
    }

    /// Compiled-in tables for this family.
    pub fn tables(&self) -> &'static StaticFamily {
        match self {
            Family::Character => &CHARACTER,
            Family::Facial => &FACIAL,
            Family::Occupation => &OCCUPATION,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One validated [`AxisSystem`] per family, loaded once at startup.
#[derive(Clone, Debug)]
pub struct ConditionData {
    character: AxisSystem,
    facial: AxisSystem,
    occupation: AxisSystem,
}

impl ConditionData {
    /// Build from the compiled-in tables.
    pub fn defaults() -> Result<Self> {
        Ok(Self {
            character: Family::Character.tables().build()?,
            facial: Family::Facial.tables().build()?,
            occupation: Family::Occupation.tables().build()?,
        })
    }

    /// Load from a directory, replacing built-in families with any
    /// `<family>.json` found there.
    ///
    /// Missing files keep the built-in family. A file that cannot be read,
    /// parsed, or validated is an error.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let mut data = Self::defaults()?;

        for family in Family::all() {
            let path = dir.join(family.file_name());
            if !path.exists() {
                debug!("No override for {} at {}", family, path.display());
                continue;
            }

            let contents = std::fs::read_to_string(&path).map_err(|source| ConditionError::Io {
                path: path.clone(),
                source,
            })?;
            let file: FamilyFile =
                serde_json::from_str(&contents).map_err(|source| ConditionError::Parse {
                    path: path.clone(),
                    source,
                })?;
            *data.family_mut(*family) = AxisSystem::from_file(family.name(), file)?;
            info!("Loaded {} family from {}", family, path.display());
        }

        Ok(data)
    }

    pub fn family(&self, family: Family) -> &AxisSystem {
        match family {
            Family::Character => &self.character,
            Family::Facial => &self.facial,
            Family::Occupation => &self.occupation,
        }
    }

    fn family_mut(&mut self, family: Family) -> &mut AxisSystem {
        match family {
            Family::Character => &mut self.character,
            Family::Facial => &mut self.facial,
            Family::Occupation => &mut self.occupation,
        }
    }
}
