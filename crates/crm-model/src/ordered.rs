//! Order-preserving deserialization for string-to-string JSON objects.

use std::fmt;

use serde::de::{MapAccess, Visitor};

/// Collects a JSON object into `(key, value)` pairs in document order.
///
/// A repeated key keeps its first position and takes the last value.
pub(crate) struct OrderedPairsVisitor {
    pub(crate) expecting: &'static str,
}

impl<'de> Visitor<'de> for OrderedPairsVisitor {
    type Value = Vec<(String, String)>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.expecting)
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut pairs: Vec<(String, String)> =
            Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, String>()? {
            upsert(&mut pairs, key, value);
        }
        Ok(pairs)
    }
}

/// Inserts or replaces in place, returning the previous value.
pub(crate) fn upsert(
    pairs: &mut Vec<(String, String)>,
    key: String,
    value: String,
) -> Option<String> {
    match pairs.iter_mut().find(|(existing, _)| *existing == key) {
        Some((_, slot)) => Some(std::mem::replace(slot, value)),
        None => {
            pairs.push((key, value));
            None
        }
    }
}
