//! PatternStats - aggregate statistics of the regret pattern database.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Aggregate statistics as served by the pattern-statistics provider.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PatternStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_patterns: Option<u64>,

    /// Extraction timestamp, passed through as the server formatted it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_at: Option<String>,

    #[serde(default)]
    pub categories: OrderedCounts,

    #[serde(default)]
    pub severity_distribution: OrderedCounts,

    #[serde(default)]
    pub age_distribution: OrderedCounts,
}

/// A `key -> count` mapping ordered the way a browser orders object keys:
/// integer-like keys ascending, then every other key in arrival order.
///
/// Duplicate keys keep their first position and take the last value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderedCounts(Vec<(String, u64)>);

impl OrderedCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, count: u64) {
        let key = key.into();
        if let Some(entry) = self.0.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = count;
            return;
        }

        match index_key(&key) {
            Some(index) => {
                let at = self
                    .0
                    .iter()
                    .position(|(k, _)| index_key(k).map_or(true, |other| other > index))
                    .unwrap_or(self.0.len());
                self.0.insert(at, (key, count));
            }
            None => self.0.push((key, count)),
        }
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Canonical non-negative integer keys (`"0"`, `"7"`, `"10"`, not `"07"`).
fn index_key(key: &str) -> Option<u32> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|&n| n < u32::MAX)
}

impl<K: Into<String>> FromIterator<(K, u64)> for OrderedCounts {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut counts = OrderedCounts::new();
        for (key, count) in iter {
            counts.insert(key, count);
        }
        counts
    }
}

impl Serialize for OrderedCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, count) in &self.0 {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

struct OrderedCountsVisitor;

impl<'de> Visitor<'de> for OrderedCountsVisitor {
    type Value = OrderedCounts;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of labels to counts")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
        let mut counts = OrderedCounts::new();
        while let Some((key, count)) = access.next_entry::<String, u64>()? {
            counts.insert(key, count);
        }
        Ok(counts)
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(OrderedCounts::new())
    }
}

impl<'de> Deserialize<'de> for OrderedCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OrderedCountsVisitor)
    }
}
