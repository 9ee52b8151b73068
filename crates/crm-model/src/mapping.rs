//! Source column to target field mapping.

use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::SerializeMap};

use crate::ordered::{OrderedPairsVisitor, upsert};

/// Ordered `source column -> target field` pairs.
///
/// Serialized as a JSON object; document order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMapping {
    pairs: Vec<(String, String)>,
}

impl FieldMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `source` to `target`, replacing an earlier target for the same source.
    pub fn insert(&mut self, source: impl Into<String>, target: impl Into<String>) -> Option<String> {
        upsert(&mut self.pairs, source.into(), target.into())
    }

    pub fn target_for(&self, source: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(column, _)| column == source)
            .map(|(_, target)| target.as_str())
    }

    /// `(source, target)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(source, target)| (source.as_str(), target.as_str()))
    }

    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(source, _)| source.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMapping
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = FieldMapping::new();
        for (source, target) in iter {
            mapping.insert(source, target);
        }
        mapping
    }
}

impl Serialize for FieldMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (source, target) in &self.pairs {
            map.serialize_entry(source, target)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FieldMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pairs = deserializer.deserialize_map(OrderedPairsVisitor {
            expecting: "an object mapping source columns to target fields",
        })?;
        Ok(Self { pairs })
    }
}
