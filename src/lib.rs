//! Condition generation library
//!
//! Weighted, rule-constrained random conditions (character, facial,
//! occupation) rendered as prompt fragments, plus the aspect-ratio presets
//! the prompt tooling validates image sizes against.

pub mod aspect_ratios;
pub mod axis;
pub mod dispatch;
pub mod error;
pub mod families;
pub mod seeds;

pub use axis::{condition_to_prompt, generate_condition, AxisSystem, Condition};
pub use dispatch::{generate_condition_by_type, ConditionEngine, ConditionType, FamilyConditions};
pub use error::{ConditionError, Result};
pub use families::{ConditionData, Family};
