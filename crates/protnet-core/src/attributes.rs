//! String-keyed attribute bags.
//!
//! Every node and edge owns one `Attributes` value, and the graph keeps
//! three more as defaults for its external codec. Entities carry a handful
//! of attributes at most, so lookups are linear scans over a `Vec` and the
//! serialized order stays close to insertion order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single key/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// An ordered list of attributes with unique keys.
///
/// Setting a key to the empty string removes it. Removal swaps the last
/// pair into the vacated slot, so order after a removal is not preserved.
///
/// Deserialized pairs go through [`Attributes::set`], so a later duplicate
/// key wins and empty values are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Attribute>", into = "Vec<Attribute>")]
pub struct Attributes {
    entries: Vec<Attribute>,
}

impl Attributes {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `key`, or `""` when it is not set.
    pub fn get(&self, key: &str) -> &str {
        self.position(key)
            .map(|i| self.entries[i].value.as_str())
            .unwrap_or("")
    }

    /// Sets `key` to `value`.
    ///
    /// An existing key is overwritten in place. An empty `value` removes the
    /// key instead. New keys are appended.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.position(&key) {
            Some(i) if value.is_empty() => {
                self.entries.swap_remove(i);
            }
            Some(i) => self.entries[i].value = value,
            None if value.is_empty() => {}
            None => self.entries.push(Attribute { key, value }),
        }
    }

    /// Removes `key`, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let i = self.position(key)?;
        Some(self.entries.swap_remove(i).value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over the pairs in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.entries.iter()
    }

    /// Borrows the pairs as a slice, for serialization.
    pub fn as_slice(&self) -> &[Attribute] {
        &self.entries
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|a| a.key == key)
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Attributes {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl From<Vec<Attribute>> for Attributes {
    fn from(pairs: Vec<Attribute>) -> Self {
        pairs.into_iter().map(|a| (a.key, a.value)).collect()
    }
}

impl From<Attributes> for Vec<Attribute> {
    fn from(attrs: Attributes) -> Self {
        attrs.entries
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        attrs.extend(iter);
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_missing_key_is_empty() {
        let attrs = Attributes::new();
        assert_eq!(attrs.get("rank"), "");
        assert!(!attrs.contains("rank"));
    }

    #[test]
    fn test_set_appends_in_order() {
        let mut attrs = Attributes::new();
        attrs.set("label", "TP53");
        attrs.set("desc", "tumor suppressor");
        attrs.set("color", "red");

        let keys: Vec<&str> = attrs.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, vec!["label", "desc", "color"]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut attrs = Attributes::new();
        attrs.set("a", "1");
        attrs.set("b", "2");
        attrs.set("a", "3");

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.as_slice()[0], Attribute::new("a", "3"));
    }

    #[test]
    fn test_empty_value_removes_by_swap() {
        let mut attrs = Attributes::new();
        attrs.set("a", "1");
        attrs.set("b", "2");
        attrs.set("c", "3");
        attrs.set("a", "");

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("a"), "");
        assert_eq!(attrs.get("b"), "2");
        assert_eq!(attrs.get("c"), "3");
        // The last pair fills the hole.
        assert_eq!(attrs.as_slice()[0].key, "c");
    }

    #[test]
    fn test_empty_value_for_absent_key_is_noop() {
        let mut attrs = Attributes::new();
        attrs.set("a", "");
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_remove_returns_previous() {
        let mut attrs: Attributes = [("rank", "0.25"), ("community", "2")].into_iter().collect();
        assert_eq!(attrs.remove("rank").as_deref(), Some("0.25"));
        assert_eq!(attrs.remove("rank"), None);
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_serializes_as_pair_list() {
        let attrs: Attributes = [("k", "v")].into_iter().collect();
        let json = serde_json::to_string(&attrs).unwrap();
        assert_eq!(json, r#"[{"key":"k","value":"v"}]"#);
    }

    #[test]
    fn test_deserialize_applies_set_rules() {
        let attrs: Attributes = serde_json::from_str(
            r#"[{"key":"a","value":""},{"key":"a","value":"x"},{"key":"b","value":"1"},{"key":"b","value":"2"}]"#,
        )
        .unwrap();

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("a"), "x");
        assert_eq!(attrs.get("b"), "2");
    }

    fn key_strategy() -> impl Strategy<Value = String> {
        "[a-e]{1,2}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Property: a non-empty write is immediately readable
        #[test]
        fn prop_set_then_get(
            ops in proptest::collection::vec((key_strategy(), "[a-z0-9]{0,3}"), 0..24),
            key in key_strategy(),
            value in "[a-z0-9]{1,4}",
        ) {
            let mut attrs = Attributes::new();
            for (k, v) in ops {
                attrs.set(k, v);
            }
            attrs.set(key.clone(), value.clone());
            prop_assert_eq!(attrs.get(&key), value.as_str());
        }

        /// Property: an empty write unsets the key
        #[test]
        fn prop_set_empty_unsets(
            ops in proptest::collection::vec((key_strategy(), "[a-z0-9]{0,3}"), 0..24),
            key in key_strategy(),
        ) {
            let mut attrs = Attributes::new();
            for (k, v) in ops {
                attrs.set(k, v);
            }
            attrs.set(key.clone(), "");
            prop_assert_eq!(attrs.get(&key), "");
            prop_assert!(!attrs.contains(&key));
        }

        /// Property: keys stay unique whatever the write sequence
        #[test]
        fn prop_keys_unique(
            ops in proptest::collection::vec((key_strategy(), "[a-z0-9]{0,3}"), 0..32),
        ) {
            let mut attrs = Attributes::new();
            for (k, v) in ops {
                attrs.set(k, v);
            }
            let mut keys: Vec<&str> = attrs.iter().map(|a| a.key.as_str()).collect();
            let total = keys.len();
            keys.sort_unstable();
            keys.dedup();
            prop_assert_eq!(keys.len(), total);
            prop_assert!(attrs.iter().all(|a| !a.value.is_empty()));
        }
    }
}
