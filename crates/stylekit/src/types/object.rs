//! Ordered style objects produced by the resolvers and helpers.

use std::fmt;

use super::StyleValue;

/// An entry in a [`StyleObject`].
#[derive(Debug, Clone, PartialEq)]
pub enum StyleEntry {
    /// A property value.
    Value(StyleValue),
    /// A nested block, e.g. the properties under a media-query key.
    Nested(StyleObject),
}

impl StyleEntry {
    /// Get the value, if this entry is not nested.
    pub fn as_value(&self) -> Option<&StyleValue> {
        match self {
            StyleEntry::Value(v) => Some(v),
            StyleEntry::Nested(_) => None,
        }
    }

    /// Get the nested object, if this entry is nested.
    pub fn as_nested(&self) -> Option<&StyleObject> {
        match self {
            StyleEntry::Nested(obj) => Some(obj),
            StyleEntry::Value(_) => None,
        }
    }
}

impl From<StyleValue> for StyleEntry {
    fn from(value: StyleValue) -> Self {
        StyleEntry::Value(value)
    }
}

macro_rules! impl_entry_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for StyleEntry {
                fn from(value: $ty) -> Self {
                    StyleEntry::Value(value.into())
                }
            }
        )*
    };
}

impl_entry_from!(&str, String, f64, i32, u32);

impl From<StyleObject> for StyleEntry {
    fn from(obj: StyleObject) -> Self {
        StyleEntry::Nested(obj)
    }
}

/// An insertion-ordered style object.
///
/// Keys are CSS-in-JS property names (`fontSize`) or media-query keys
/// (`@media (min-width: 768px)`). Inserting an existing key replaces the value
/// without moving it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleObject {
    entries: Vec<(String, StyleEntry)>,
}

impl StyleObject {
    /// Create an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set an entry.
    pub fn with(mut self, key: impl Into<String>, entry: impl Into<StyleEntry>) -> Self {
        self.insert(key, entry);
        self
    }

    /// Set an entry, replacing any previous one with the same key.
    pub fn insert(&mut self, key: impl Into<String>, entry: impl Into<StyleEntry>) {
        let key = key.into();
        let entry = entry.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = entry,
            None => self.entries.push((key, entry)),
        }
    }

    /// Shallow merge: every entry of `other` is inserted into `self`.
    pub fn extend(&mut self, other: StyleObject) {
        for (key, entry) in other.entries {
            self.insert(key, entry);
        }
    }

    /// Get an entry.
    pub fn get(&self, key: &str) -> Option<&StyleEntry> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, e)| e)
    }

    /// Get a (non-nested) value.
    pub fn value(&self, key: &str) -> Option<&StyleValue> {
        self.get(key).and_then(StyleEntry::as_value)
    }

    /// Get a string value.
    pub fn str_value(&self, key: &str) -> Option<&str> {
        self.value(key).and_then(StyleValue::as_str)
    }

    /// Get a nested block.
    pub fn nested(&self, key: &str) -> Option<&StyleObject> {
        self.get(key).and_then(StyleEntry::as_nested)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the object has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top-level keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleEntry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }
}

impl IntoIterator for StyleObject {
    type Item = (String, StyleEntry);
    type IntoIter = std::vec::IntoIter<(String, StyleEntry)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, E: Into<StyleEntry>> FromIterator<(K, E)> for StyleObject {
    fn from_iter<I: IntoIterator<Item = (K, E)>>(iter: I) -> Self {
        let mut obj = Self::new();
        for (key, entry) in iter {
            obj.insert(key, entry);
        }
        obj
    }
}

impl fmt::Display for StyleObject {
    /// Debug-friendly `{ key: value; @media ... { ... } }` rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (key, entry) in &self.entries {
            match entry {
                StyleEntry::Value(v) => write!(f, " {key}: {v};")?,
                StyleEntry::Nested(obj) => write!(f, " {key} {obj}")?,
            }
        }
        f.write_str(" }")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_in_place() {
        let mut obj = StyleObject::new().with("a", "1").with("b", 2);
        obj.insert("a", "3");

        assert_eq!(obj.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(obj.str_value("a"), Some("3"));
        assert_eq!(obj.value("b"), Some(&StyleValue::Number(2.0)));
    }

    #[test]
    fn nested_entries() {
        let inner = StyleObject::new().with("color", "blue");
        let obj = StyleObject::new()
            .with("color", "red")
            .with("@media (min-width: 768px)", inner.clone());

        assert_eq!(obj.nested("@media (min-width: 768px)"), Some(&inner));
        assert_eq!(obj.nested("color"), None);
        assert_eq!(
            obj.to_string(),
            "{ color: red; @media (min-width: 768px) { color: blue; } }"
        );
    }

    #[test]
    fn extend_is_shallow_merge() {
        let mut obj = StyleObject::new().with("a", "1");
        obj.extend(StyleObject::new().with("b", "2").with("a", "x"));
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.str_value("a"), Some("x"));
    }
}
