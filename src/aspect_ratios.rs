//! Aspect ratio presets and dimension validation for image generation.
//!
//! Diffusion backends accept 64..=2048 pixels per side, in multiples of 64.
//! The preset list covers the sizes offered in the UI; "Custom" defers to
//! configured default dimensions.

use serde::{Deserialize, Serialize};

pub const MIN_DIMENSION: u32 = 64;
pub const MAX_DIMENSION: u32 = 2048;
pub const DIMENSION_STEP: u32 = 64;

/// Preset grouping used for filtering in the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetCategory {
    Standard,
    SocialMedia,
    Photography,
    Print,
    Custom,
}

/// A named output size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AspectRatioPreset {
    pub name: &'static str,
    /// None for the custom preset
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub ratio: &'static str,
    pub category: PresetCategory,
    pub description: &'static str,
}

impl AspectRatioPreset {
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        Some((self.width?, self.height?))
    }

    pub fn is_custom(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }

    pub fn is_landscape(&self) -> bool {
        self.dimensions().is_some_and(|(w, h)| w > h)
    }

    pub fn is_portrait(&self) -> bool {
        self.dimensions().is_some_and(|(w, h)| h > w)
    }

    pub fn is_square(&self) -> bool {
        self.dimensions().is_some_and(|(w, h)| w == h)
    }
}

const fn preset(
    name: &'static str,
    width: u32,
    height: u32,
    ratio: &'static str,
    category: PresetCategory,
    description: &'static str,
) -> AspectRatioPreset {
    AspectRatioPreset {
        name,
        width: Some(width),
        height: Some(height),
        ratio,
        category,
        description,
    }
}

pub const PRESETS: &[AspectRatioPreset] = &[
    preset(
        "Square 1:1 (1024x1024)",
        1024,
        1024,
        "1:1",
        PresetCategory::Standard,
        "Perfect square for posts and profile pictures",
    ),
    preset(
        "Widescreen 16:9 (1280x720)",
        1280,
        720,
        "16:9",
        PresetCategory::SocialMedia,
        "Standard HD video and thumbnails",
    ),
    preset(
        "Widescreen 16:9 (1600x896)",
        1600,
        896,
        "16:9",
        PresetCategory::SocialMedia,
        "High resolution widescreen for video content",
    ),
    preset(
        "Portrait 9:16 (720x1280)",
        720,
        1280,
        "9:16",
        PresetCategory::SocialMedia,
        "Vertical format for stories and short video",
    ),
    preset(
        "Portrait 9:16 (896x1600)",
        896,
        1600,
        "9:16",
        PresetCategory::SocialMedia,
        "High resolution vertical format for mobile content",
    ),
    preset(
        "Standard 3:2 (1280x832)",
        1280,
        832,
        "3:2",
        PresetCategory::Photography,
        "Classic photography aspect ratio",
    ),
    preset(
        "Standard 2:3 (832x1280)",
        832,
        1280,
        "2:3",
        PresetCategory::Photography,
        "Portrait orientation photography standard",
    ),
    preset(
        "Standard 3:2 (1536x1024)",
        1536,
        1024,
        "3:2",
        PresetCategory::Photography,
        "High resolution photography standard",
    ),
    AspectRatioPreset {
        name: "Custom",
        width: None,
        height: None,
        ratio: "custom",
        category: PresetCategory::Custom,
        description: "Use custom dimensions from config defaults",
    },
];

/// Dimensions used by the custom preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionDefaults {
    pub width: u32,
    pub height: u32,
}

impl Default for DimensionDefaults {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AspectRatioError {
    #[error("dimensions must be positive integers, got {width}x{height}")]
    NonPositive { width: u32, height: u32 },

    #[error("dimensions must be at least 64px, got {width}x{height}")]
    TooSmall { width: u32, height: u32 },

    #[error("dimensions must not exceed 2048px, got {width}x{height}")]
    TooLarge { width: u32, height: u32 },

    #[error(
        "dimensions must be multiples of 64, got {width}x{height}, \
         nearest valid: {nearest_width}x{nearest_height}"
    )]
    Misaligned {
        width: u32,
        height: u32,
        nearest_width: u32,
        nearest_height: u32,
    },

    #[error("unknown preset '{0}'")]
    UnknownPreset(String),
}

/// Check that `width`x`height` is a size the backend accepts.
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), AspectRatioError> {
    if width == 0 || height == 0 {
        return Err(AspectRatioError::NonPositive { width, height });
    }
    if width < MIN_DIMENSION || height < MIN_DIMENSION {
        return Err(AspectRatioError::TooSmall { width, height });
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(AspectRatioError::TooLarge { width, height });
    }
    if width % DIMENSION_STEP != 0 || height % DIMENSION_STEP != 0 {
        return Err(AspectRatioError::Misaligned {
            width,
            height,
            nearest_width: nearest_step(width),
            nearest_height: nearest_step(height),
        });
    }
    Ok(())
}

/// Nearest multiple of the step, ties to even multiples.
fn nearest_step(value: u32) -> u32 {
    let steps = (value as f64 / DIMENSION_STEP as f64).round_ties_even();
    steps as u32 * DIMENSION_STEP
}

pub fn validate_preset_name(name: &str) -> Result<(), AspectRatioError> {
    preset_by_name(name).map(|_| ())
}

pub fn preset_by_name(name: &str) -> Result<&'static AspectRatioPreset, AspectRatioError> {
    PRESETS
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| AspectRatioError::UnknownPreset(name.to_string()))
}

/// Preset names in definition order.
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.name).collect()
}

pub fn presets_by_category(category: PresetCategory) -> Vec<&'static AspectRatioPreset> {
    PRESETS.iter().filter(|p| p.category == category).collect()
}

/// Reduced ratio string, e.g. 1920x1080 → "16:9".
pub fn calculate_aspect_ratio(width: u32, height: u32) -> String {
    let divisor = gcd(width, height).max(1);
    format!("{}:{}", width / divisor, height / divisor)
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Dimensions for a preset; the custom preset resolves to `defaults`.
pub fn dimensions(
    preset_name: &str,
    defaults: DimensionDefaults,
) -> Result<(u32, u32), AspectRatioError> {
    let preset = preset_by_name(preset_name)?;
    Ok(preset.dimensions().unwrap_or((defaults.width, defaults.height)))
}

pub fn find_preset_for_dimensions(width: u32, height: u32) -> Option<&'static AspectRatioPreset> {
    PRESETS
        .iter()
        .find(|p| p.dimensions() == Some((width, height)))
}
