//! Seed derivation for multi-family generation
//!
//! A single request seed drives every family in a combination. Each family
//! gets its own seed, offset by its position in the combination, so the
//! families draw independent but reproducible values.

use std::fmt;

use crate::families::Family;

/// Seeds for each family in one combined generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FamilySeeds {
    /// Request seed (None = non-reproducible)
    pub master: Option<u64>,
    entries: Vec<(Family, Option<u64>)>,
}

impl FamilySeeds {
    /// The i-th family gets `master + i`; all get `None` when there is no master.
    pub fn derive(master: Option<u64>, families: &[Family]) -> Self {
        let entries = families
            .iter()
            .enumerate()
            .map(|(i, family)| (*family, master.map(|m| derive_seed(m, i))))
            .collect();
        Self { master, entries }
    }

    /// Seed for `family`, `None` if unseeded or not part of this combination.
    pub fn seed_for(&self, family: Family) -> Option<u64> {
        self.entries
            .iter()
            .find(|(f, _)| *f == family)
            .and_then(|(_, seed)| *seed)
    }

    /// Families and their seeds, in combination order.
    pub fn iter(&self) -> impl Iterator<Item = (Family, Option<u64>)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Offset a request seed by a family's position. Wraps at u64::MAX.
fn derive_seed(master: u64, offset: usize) -> u64 {
    master.wrapping_add(offset as u64)
}

impl fmt::Display for FamilySeeds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.master {
            Some(m) => write!(f, "FamilySeeds {{ master: {}", m)?,
            None => write!(f, "FamilySeeds {{ master: random")?,
        }
        for (family, seed) in &self.entries {
            match seed {
                Some(s) => write!(f, ", {}: {}", family, s)?,
                None => write!(f, ", {}: random", family)?,
            }
        }
        write!(f, " }}")
    }
}
