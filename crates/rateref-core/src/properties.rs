//! Immutable multimaps of textual properties.
//!
//! A [`PropertySet`] holds, for each key, an ordered list of string values.
//! Keys are kept sorted; values keep their insertion order. It is the
//! intermediate form for textual definitions such as index definition files.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RateRefError, RateRefResult};

/// An immutable, key-sorted multimap of string properties.
///
/// ```rust
/// use rateref_core::properties::PropertySet;
///
/// let base = PropertySet::of_multimap([("a", "x"), ("a", "y"), ("c", "z")]);
/// let other = PropertySet::of([("a", "aa")]);
///
/// let combined = base.combined_with(&other);
/// assert_eq!(combined.to_string(), "{a=[aa], c=[z]}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertySet {
    entries: BTreeMap<String, Vec<String>>,
}

impl PropertySet {
    /// The empty property set.
    pub const EMPTY: PropertySet = PropertySet {
        entries: BTreeMap::new(),
    };

    /// Builds a set from single-valued entries.
    ///
    /// A key repeated in the input keeps its last value.
    pub fn of<K, V>(map: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: map
                .into_iter()
                .map(|(k, v)| (k.into(), vec![v.into()]))
                .collect(),
        }
    }

    /// Builds a set from key-value pairs, collecting repeated keys into
    /// lists in input order.
    pub fn of_multimap<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (k, v) in pairs {
            entries.entry(k.into()).or_default().push(v.into());
        }
        Self { entries }
    }

    /// Returns true if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The keys, sorted.
    pub fn keys(&self) -> BTreeSet<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// The single value of a key.
    ///
    /// Fails with `NotFound` if the key is absent and with `AmbiguousValue`
    /// if it holds more than one value.
    pub fn value(&self, key: &str) -> RateRefResult<&str> {
        match self.entries.get(key).map(Vec::as_slice) {
            Some([single]) => Ok(single.as_str()),
            Some(values) if values.len() > 1 => {
                Err(RateRefError::ambiguous_value(key, values.len()))
            }
            _ => Err(RateRefError::not_found("property", key)),
        }
    }

    /// The single value of a key, or `None` if absent.
    pub fn optional_value(&self, key: &str) -> RateRefResult<Option<&str>> {
        if self.contains(key) {
            self.value(key).map(Some)
        } else {
            Ok(None)
        }
    }

    /// All values of a key in insertion order; empty if the key is absent.
    pub fn value_list(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Combines with another set, `other` winning per key.
    ///
    /// The values of each key in `other` replace this set's values for that
    /// key entirely. Keys only in `self` are kept unchanged.
    pub fn combined_with(&self, other: &PropertySet) -> PropertySet {
        if other.is_empty() {
            return self.clone();
        }
        let mut entries = self.entries.clone();
        for (key, values) in &other.entries {
            entries.insert(key.clone(), values.clone());
        }
        Self { entries }
    }

    /// The contents as key-value pairs, keys sorted and values in order.
    pub fn as_multimap(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .flat_map(|(k, vs)| vs.iter().map(move |v| (k.as_str(), v.as_str())))
            .collect()
    }
}

impl fmt::Display for PropertySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, values)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}=[{}]", values.join(", "))?;
        }
        f.write_str("}")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertySet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::of_multimap(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(set: &PropertySet) -> u64 {
        let mut hasher = DefaultHasher::new();
        set.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_empty() {
        let set = PropertySet::EMPTY;
        assert!(set.is_empty());
        assert!(!set.contains("unknown"));
        assert!(set.value_list("unknown").is_empty());
        assert!(set.value("unknown").unwrap_err().is_not_found());
        assert_eq!(set.to_string(), "{}");
    }

    #[test]
    fn test_of_map() {
        let set = PropertySet::of([("a", "x"), ("b", "y")]);

        assert!(!set.is_empty());
        assert_eq!(set.value("a").unwrap(), "x");
        assert_eq!(set.value_list("b"), ["y"]);
        assert!(!set.contains("c"));
        assert_eq!(set.keys().into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(set.as_multimap(), vec![("a", "x"), ("b", "y")]);
        assert!(set.value("unknown").is_err());
        assert_eq!(set.to_string(), "{a=[x], b=[y]}");
    }

    #[test]
    fn test_of_multimap() {
        let set = PropertySet::of_multimap([("a", "x"), ("a", "y"), ("b", "z")]);

        assert!(matches!(
            set.value("a"),
            Err(RateRefError::AmbiguousValue { count: 2, .. })
        ));
        assert_eq!(set.value_list("a"), ["x", "y"]);
        assert_eq!(set.value("b").unwrap(), "z");
        assert_eq!(
            set.as_multimap(),
            vec![("a", "x"), ("a", "y"), ("b", "z")]
        );
        assert_eq!(set.to_string(), "{a=[x, y], b=[z]}");
    }

    #[test]
    fn test_keys_sorted_values_in_order() {
        let set = PropertySet::of_multimap([("b", "2"), ("a", "9"), ("a", "1")]);
        assert_eq!(set.to_string(), "{a=[9, 1], b=[2]}");
    }

    #[test]
    fn test_combined_with() {
        let base = PropertySet::of_multimap([("a", "x"), ("a", "y"), ("b", "y"), ("c", "z")]);
        let other = PropertySet::of_multimap([("a", "aa"), ("b", "bb")]);
        let expected = PropertySet::of_multimap([("a", "aa"), ("b", "bb"), ("c", "z")]);

        assert_eq!(base.combined_with(&other), expected);
    }

    #[test]
    fn test_combined_with_empty() {
        let base = PropertySet::of_multimap([("a", "x"), ("a", "y"), ("b", "y"), ("c", "z")]);

        assert_eq!(base.combined_with(&PropertySet::EMPTY), base);
        assert_eq!(PropertySet::EMPTY.combined_with(&base), base);
    }

    #[test]
    fn test_equals_hash() {
        let a1 = PropertySet::of([("a", "x"), ("b", "y")]);
        let a2 = PropertySet::of([("a", "x"), ("b", "y")]);
        let b = PropertySet::of([("a", "x"), ("b", "z")]);

        assert_eq!(a1, a2);
        assert_ne!(a1, b);
        assert_eq!(hash_of(&a1), hash_of(&a2));
    }

    #[test]
    fn test_optional_value() {
        let set = PropertySet::of([("a", "x")]);
        assert_eq!(set.optional_value("a").unwrap(), Some("x"));
        assert_eq!(set.optional_value("b").unwrap(), None);
    }

    #[test]
    fn test_serde() {
        let set = PropertySet::of_multimap([("a", "x"), ("a", "y")]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"a":["x","y"]}"#);
        let back: PropertySet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn property_set() -> impl Strategy<Value = PropertySet> {
            proptest::collection::vec(("[a-d]", "[a-z]{1,3}"), 0..8)
                .prop_map(|pairs| PropertySet::of_multimap(pairs))
        }

        proptest! {
            #[test]
            fn combined_with_empty_is_identity(set in property_set()) {
                prop_assert_eq!(set.combined_with(&PropertySet::EMPTY), set.clone());
                prop_assert_eq!(PropertySet::EMPTY.combined_with(&set), set);
            }

            #[test]
            fn other_always_wins(base in property_set(), other in property_set()) {
                let combined = base.combined_with(&other);
                for key in other.keys() {
                    prop_assert_eq!(combined.value_list(key), other.value_list(key));
                }
                for key in base.keys() {
                    if !other.contains(key) {
                        prop_assert_eq!(combined.value_list(key), base.value_list(key));
                    }
                }
            }
        }
    }
}
