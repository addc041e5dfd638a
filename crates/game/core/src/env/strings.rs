//! Localization table backing [`crate::SetupStore::resolve_string`].

use std::collections::BTreeMap;

use crate::setup::TextKey;

/// Flat key → text table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StringTable {
    entries: BTreeMap<String, String>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    pub fn resolve(&self, key: &TextKey) -> Option<&str> {
        self.entries.get(key.as_str()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds every entry of `other`, overriding existing keys.
    pub fn merge(&mut self, other: StringTable) {
        self.entries.extend(other.entries);
    }
}

impl<K, V> FromIterator<(K, V)> for StringTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, text)| (key.into(), text.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_keys_only() {
        let table = StringTable::new().with("LOC_AGE_NAME", "Age");
        assert_eq!(table.resolve(&TextKey::from("LOC_AGE_NAME")), Some("Age"));
        assert_eq!(table.resolve(&TextKey::from("LOC_MISSING")), None);
    }

    #[test]
    fn merge_overrides_existing_entries() {
        let mut base = StringTable::new().with("LOC_MAP", "Map");
        base.merge(StringTable::new().with("LOC_MAP", "World Map"));
        assert_eq!(base.resolve(&TextKey::from("LOC_MAP")), Some("World Map"));
        assert_eq!(base.len(), 1);
    }
}
