//! The generated axis→value mapping.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Insertion-ordered mapping from axis name to selected value.
///
/// Mandatory axes come first in policy order, then optional axes in the
/// order they were drawn. Removals keep the relative order of the rest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Condition {
    entries: Vec<(String, String)>,
}

impl Condition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `axis` to `value`. An existing axis keeps its position.
    pub fn insert(&mut self, axis: impl Into<String>, value: impl Into<String>) {
        let axis = axis.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(a, _)| *a == axis) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((axis, value)),
        }
    }

    pub fn get(&self, axis: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(a, _)| a == axis)
            .map(|(_, v)| v.as_str())
    }

    /// Remove `axis`, returning its value if it was present.
    pub fn remove(&mut self, axis: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(a, _)| a == axis)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn contains_axis(&self, axis: &str) -> bool {
        self.get(axis).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(a, v)| (a.as_str(), v.as_str()))
    }

    pub fn axes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(a, _)| a.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A: Into<String>, V: Into<String>> FromIterator<(A, V)> for Condition {
    fn from_iter<I: IntoIterator<Item = (A, V)>>(iter: I) -> Self {
        let mut condition = Condition::new();
        for (axis, value) in iter {
            condition.insert(axis, value);
        }
        condition
    }
}

/// Serializes as a JSON object in insertion order.
impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (axis, value) in &self.entries {
            map.serialize_entry(axis, value)?;
        }
        map.end()
    }
}

/// Renders the prompt fragment, same as [`super::condition_to_prompt`].
impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order_and_position() {
        let mut c = Condition::new();
        c.insert("physique", "wiry");
        c.insert("wealth", "poor");
        c.insert("physique", "broad");
        assert_eq!(c.axes().collect::<Vec<_>>(), vec!["physique", "wealth"]);
        assert_eq!(c.get("physique"), Some("broad"));
    }

    #[test]
    fn test_remove() {
        let mut c: Condition = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        assert_eq!(c.remove("b"), Some("2".to_string()));
        assert_eq!(c.remove("b"), None);
        assert_eq!(c.values().collect::<Vec<_>>(), vec!["1", "3"]);
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let c: Condition = [("wealth", "poor"), ("age", "old"), ("demeanor", "proud")]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"wealth":"poor","age":"old","demeanor":"proud"}"#);
    }
}
