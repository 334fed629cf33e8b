//! Generic condition-axis system.
//!
//! A family is an [`AxisSystem`]: named axes with ordered values, a policy of
//! mandatory and optional axes, optional per-value weights, and exclusion
//! rules that drop semantically conflicting picks. [`ConditionGenerator`]
//! turns a system plus an RNG into a [`Condition`], and
//! [`condition_to_prompt`] flattens that into prompt text.
//!
//! ```ignore
//! use condition_axis::axis::{generate_condition, condition_to_prompt};
//! use condition_axis::families::{ConditionData, Family};
//!
//! let data = ConditionData::defaults()?;
//! let condition = generate_condition(data.family(Family::Character), Some(42))?;
//! println!("{}", condition_to_prompt(&condition)); // e.g. "wiry, poor, weary"
//! ```

pub mod condition;
pub mod generator;
pub mod policy;
pub mod registry;
pub mod render;
pub mod sampling;
pub mod system;

pub use condition::Condition;
pub use generator::{generate_condition, ConditionGenerator};
pub use policy::{AxisPolicy, ExclusionRule, WeightTable};
pub use registry::{Axis, AxisRegistry};
pub use render::{condition_to_prompt, join_fragments};
pub use sampling::{sample_distinct, weighted_choice};
pub use system::{AxisSystem, FamilyFile};
