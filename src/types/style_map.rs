use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Ordered CSS property map.
///
/// Properties keep the position of their first insertion; setting an existing
/// property replaces its value in place, so later resolution steps win without
/// reordering the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `property`, overwriting any earlier value.
    pub fn set(&mut self, property: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == property) {
            entry.1 = value;
        } else {
            self.entries.push((property.to_string(), value));
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(k, _)| k == property)?;
        Some(self.entries.remove(idx).1)
    }

    /// Copy every property of `other` into `self`, `other` winning on conflicts.
    pub fn merge(&mut self, other: &StyleMap) {
        for (k, v) in &other.entries {
            self.set(k, v.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Renders as an inline `style` attribute value: `a: b; c: d`.
impl fmt::Display for StyleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{k}: {v}")?;
        }
        Ok(())
    }
}

impl Serialize for StyleMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (k, v) in iter {
            map.set(k.as_ref(), v);
        }
        map
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_keeps_position() {
        let mut style = StyleMap::new();
        style.set("width", "10px");
        style.set("color", "red");
        style.set("width", "20px");

        let keys: Vec<_> = style.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["width", "color"]);
        assert_eq!(style.get("width"), Some("20px"));
    }

    #[test]
    fn test_display_and_serialize() {
        let style: StyleMap = [("height", "21px"), ("width", "100px")].into_iter().collect();
        assert_eq!(style.to_string(), "height: 21px; width: 100px");
        assert_eq!(
            serde_json::to_string(&style).unwrap(),
            r#"{"height":"21px","width":"100px"}"#
        );
    }

    #[test]
    fn test_merge_and_remove() {
        let mut base: StyleMap = [("color", "red"), ("height", "1px")].into_iter().collect();
        let over: StyleMap = [("color", "blue")].into_iter().collect();
        base.merge(&over);
        assert_eq!(base.get("color"), Some("blue"));
        assert_eq!(base.remove("height").as_deref(), Some("1px"));
        assert_eq!(base.remove("height"), None);
        assert_eq!(base.len(), 1);
    }
}
