//! Condition-type dispatch and multi-family combination.
//!
//! The UI hands over a condition-type label ("None", "Character", "Facial",
//! "Occupation", "Both", "All") and an optional seed. Each family in the
//! combination is generated with its own offset seed (see [`FamilySeeds`])
//! and the rendered fragments are joined in family order.
//!
//! Unknown labels produce an empty string rather than an error, so a stale
//! or mistyped selection never breaks prompt building.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, warn};

use crate::axis::{condition_to_prompt, join_fragments, Condition, ConditionGenerator};
use crate::error::Result;
use crate::families::{ConditionData, Family};
use crate::seeds::FamilySeeds;

/// A selectable condition type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConditionType {
    None,
    Character,
    Facial,
    Occupation,
    Both,
    All,
}

impl ConditionType {
    pub fn all() -> &'static [ConditionType] {
        &[
            ConditionType::None,
            ConditionType::Character,
            ConditionType::Facial,
            ConditionType::Occupation,
            ConditionType::Both,
            ConditionType::All,
        ]
    }

    /// Exact, case-sensitive match on the UI label.
    pub fn from_label(label: &str) -> Option<ConditionType> {
        Self::all().iter().copied().find(|t| t.label() == label)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConditionType::None => "None",
            ConditionType::Character => "Character",
            ConditionType::Facial => "Facial",
            ConditionType::Occupation => "Occupation",
            ConditionType::Both => "Both",
            ConditionType::All => "All",
        }
    }

    /// Families generated for this type, in join order.
    pub fn families(&self) -> &'static [Family] {
        match self {
            ConditionType::None => &[],
            ConditionType::Character => &[Family::Character],
            ConditionType::Facial => &[Family::Facial],
            ConditionType::Occupation => &[Family::Occupation],
            ConditionType::Both => &[Family::Character, Family::Facial],
            ConditionType::All => &[Family::Character, Family::Facial, Family::Occupation],
        }
    }
}

/// Family data plus the RNG used for unseeded requests.
///
/// Seeded requests never touch the ambient RNG: each gets a fresh
/// `ChaCha8Rng` from its seed, so concurrent or interleaved callers cannot
/// disturb one another's results.
pub struct ConditionEngine {
    data: ConditionData,
    ambient: ChaCha8Rng,
}

impl ConditionEngine {
    pub fn new(data: ConditionData) -> Self {
        Self {
            data,
            ambient: ChaCha8Rng::seed_from_u64(rand::random()),
        }
    }

    /// Engine over the built-in families.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(ConditionData::defaults()?))
    }

    pub fn data(&self) -> &ConditionData {
        &self.data
    }

    /// Generate one family's condition.
    pub fn generate(&mut self, family: Family, seed: Option<u64>) -> Result<Condition> {
        let system = self.data.family(family);
        match seed {
            Some(seed) => {
                ConditionGenerator::generate(system, &mut ChaCha8Rng::seed_from_u64(seed))
            }
            None => ConditionGenerator::generate(system, &mut self.ambient),
        }
    }

    /// Generate every family in `kind`, each with its offset seed.
    pub fn generate_conditions(
        &mut self,
        kind: ConditionType,
        seed: Option<u64>,
    ) -> Result<Vec<(Family, Condition)>> {
        let seeds = FamilySeeds::derive(seed, kind.families());
        debug!("Generating {} with {}", kind.label(), seeds);
        seeds
            .iter()
            .map(|(family, family_seed)| Ok((family, self.generate(family, family_seed)?)))
            .collect()
    }

    /// Generate and render `kind` as one comma-joined fragment.
    pub fn generate_by_type(&mut self, kind: ConditionType, seed: Option<u64>) -> Result<String> {
        let conditions = self.generate_conditions(kind, seed)?;
        Ok(join_fragments(conditions.iter().map(|(_, c)| condition_to_prompt(c))))
    }

    /// Like [`Self::generate_by_type`], but from a UI label. Unknown labels
    /// yield "".
    pub fn generate_by_label(&mut self, label: &str, seed: Option<u64>) -> Result<String> {
        match ConditionType::from_label(label) {
            Some(kind) => self.generate_by_type(kind, seed),
            None => {
                warn!("Unknown condition type: {}", label);
                Ok(String::new())
            }
        }
    }
}

/// Per-family conditions from one combined generation.
///
/// Serializes as `{"<family>": {"<axis>": "<value>", ...}, ...}` with both
/// levels in generation order.
pub struct FamilyConditions<'a>(pub &'a [(Family, Condition)]);

impl Serialize for FamilyConditions<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (family, condition) in self.0 {
            map.serialize_entry(family.name(), condition)?;
        }
        map.end()
    }
}

/// Generate condition text for a UI label with the built-in families.
pub fn generate_condition_by_type(condition_type: &str, seed: Option<u64>) -> Result<String> {
    ConditionEngine::with_defaults()?.generate_by_label(condition_type, seed)
}
