//! Facial perception modifiers. Always exactly one signal.

use super::StaticFamily;

pub const FACIAL: StaticFamily = StaticFamily {
    name: "facial",
    axes: &[(
        "facial_signal",
        &[
            "weathered",
            "sharp-featured",
            "soft-featured",
            "gaunt",
            "pockmarked",
            "hollow-eyed",
            "ruddy",
            "heavy-browed",
            "broken-nosed",
            "asymmetrical",
        ],
    )],
    mandatory: &["facial_signal"],
    optional: &[],
    max_optional: 0,
    weights: &[(
        "facial_signal",
        &[
            ("weathered", 3.0),
            ("sharp-featured", 2.0),
            ("soft-featured", 2.0),
            ("gaunt", 1.5),
            ("ruddy", 1.5),
            ("pockmarked", 1.0),
            ("hollow-eyed", 1.0),
            ("heavy-browed", 1.0),
            ("broken-nosed", 0.5),
            ("asymmetrical", 0.5),
        ],
    )],
    exclusions: &[],
};
