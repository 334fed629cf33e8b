//! Prompt rendering for generated conditions.

use super::condition::Condition;

/// Join a condition's values with ", " in insertion order.
///
/// Axis names never appear in the output. An empty condition renders as "".
pub fn condition_to_prompt(condition: &Condition) -> String {
    condition.values().collect::<Vec<_>>().join(", ")
}

/// Join prompt fragments with ", ", skipping empty ones.
pub fn join_fragments<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for fragment in fragments {
        let fragment = fragment.as_ref();
        if fragment.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push_str(", ");
        }
        out.push_str(fragment);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_condition_renders_empty() {
        assert_eq!(condition_to_prompt(&Condition::new()), "");
    }

    #[test]
    fn test_values_in_insertion_order() {
        let c: Condition = [("a", "v1"), ("b", "v2")].into_iter().collect();
        assert_eq!(condition_to_prompt(&c), "v1, v2");

        let reversed: Condition = [("b", "v2"), ("a", "v1")].into_iter().collect();
        assert_eq!(condition_to_prompt(&reversed), "v2, v1");
    }

    #[test]
    fn test_display_matches_prompt() {
        let c: Condition = [("physique", "stocky"), ("wealth", "modest"), ("age", "old")]
            .into_iter()
            .collect();
        assert_eq!(c.to_string(), condition_to_prompt(&c));
        assert_eq!(c.to_string(), "stocky, modest, old");
    }

    #[test]
    fn test_join_fragments_skips_empty() {
        assert_eq!(join_fragments(["wiry, poor", "", "weathered"]), "wiry, poor, weathered");
        assert_eq!(join_fragments(["", ""]), "");
        assert_eq!(join_fragments(Vec::<String>::new()), "");
    }
}
