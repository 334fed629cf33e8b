//! How a character's work sits in the world: standing, visibility, and cost.

use super::StaticFamily;

pub const OCCUPATION: StaticFamily = StaticFamily {
    name: "occupation",
    axes: &[
        ("legitimacy", &["sanctioned", "tolerated", "questioned", "illicit"]),
        ("visibility", &["public", "discreet", "hidden", "conspicuous"]),
        ("moral_load", &["neutral", "burdened", "conflicted", "corrosive"]),
        ("dependency", &["essential", "useful", "replaceable", "parasitic"]),
        ("risk_exposure", &["benign", "straining", "hazardous", "lethal"]),
    ],
    mandatory: &["legitimacy", "visibility"],
    optional: &["moral_load", "dependency", "risk_exposure"],
    max_optional: 2,
    weights: &[
        (
            "legitimacy",
            &[("sanctioned", 3.0), ("tolerated", 3.0), ("questioned", 1.5), ("illicit", 1.0)],
        ),
        (
            "visibility",
            &[("public", 3.0), ("discreet", 2.0), ("hidden", 1.0), ("conspicuous", 1.0)],
        ),
        (
            "risk_exposure",
            &[("benign", 3.0), ("straining", 2.0), ("hazardous", 1.0), ("lethal", 0.5)],
        ),
    ],
    // legitimacy is never blocked, so output is never empty
    exclusions: &[
        (("legitimacy", "illicit"), &[("visibility", &["public"])]),
        (("legitimacy", "sanctioned"), &[("dependency", &["parasitic"])]),
        (("moral_load", "corrosive"), &[("dependency", &["essential"])]),
        (("dependency", "essential"), &[("visibility", &["hidden"])]),
        (("risk_exposure", "lethal"), &[("moral_load", &["neutral"])]),
    ],
};
