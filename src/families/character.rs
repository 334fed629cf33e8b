//! Physical and social character states.

use super::StaticFamily;

pub const CHARACTER: StaticFamily = StaticFamily {
    name: "character",
    axes: &[
        // Build and body structure
        ("physique", &["skinny", "wiry", "stocky", "hunched", "frail", "broad"]),
        // Economic/social status
        ("wealth", &["poor", "modest", "well-kept", "wealthy", "decadent"]),
        ("health", &["sickly", "scarred", "weary", "hale", "limping"]),
        ("demeanor", &["timid", "suspicious", "resentful", "alert", "proud"]),
        ("age", &["young", "middle-aged", "old", "ancient"]),
    ],
    mandatory: &["physique", "wealth"],
    optional: &["health", "demeanor", "age"],
    // More than two extra axes dilutes the prompt
    max_optional: 2,
    weights: &[
        // Skewed toward lower classes
        (
            "wealth",
            &[
                ("poor", 4.0),
                ("modest", 3.0),
                ("well-kept", 2.0),
                ("wealthy", 1.0),
                ("decadent", 0.5),
            ],
        ),
        // Skewed toward survival builds
        (
            "physique",
            &[
                ("skinny", 3.0),
                ("wiry", 2.0),
                ("hunched", 2.0),
                ("frail", 1.0),
                ("stocky", 1.0),
                ("broad", 0.5),
            ],
        ),
    ],
    exclusions: &[
        (("wealth", "decadent"), &[("physique", &["frail"]), ("health", &["sickly"])]),
        (("age", "ancient"), &[("demeanor", &["timid"])]),
        (("physique", "broad"), &[("health", &["sickly"])]),
        (("health", "hale"), &[("physique", &["frail"])]),
    ],
};
