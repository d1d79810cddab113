//! Key indices for exact-match property lookups.

use sift_core::Value;
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::trace;

/// Hashable form of a property value.
///
/// Floats are keyed by bit pattern after folding `-0.0` into `0.0` and
/// every `NaN` into one canonical pattern. Lists are not indexed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum IndexValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(u64),
    String(String),
}

impl IndexValue {
    pub(crate) fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(IndexValue::Null),
            Value::Bool(b) => Some(IndexValue::Bool(*b)),
            Value::Int(i) => Some(IndexValue::Int(*i)),
            Value::Float(f) => Some(IndexValue::Float(float_bits(*f))),
            Value::String(s) => Some(IndexValue::String(s.clone())),
            Value::List(_) => None,
        }
    }
}

fn float_bits(f: f64) -> u64 {
    if f == 0.0 {
        0.0f64.to_bits()
    } else if f.is_nan() {
        f64::NAN.to_bits()
    } else {
        f.to_bits()
    }
}

/// Property index: key -> value -> ordered set of element ids.
///
/// Only keys registered with [`PropertyIndex::create`] are maintained.
#[derive(Debug)]
pub(crate) struct PropertyIndex<Id> {
    keys: HashMap<String, HashMap<IndexValue, BTreeSet<Id>>>,
}

impl<Id> Default for PropertyIndex<Id> {
    fn default() -> Self {
        Self {
            keys: HashMap::new(),
        }
    }
}

impl<Id: Ord + Copy + std::fmt::Display> PropertyIndex<Id> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register a key. Returns false if it was already indexed.
    pub(crate) fn create(&mut self, key: &str) -> bool {
        if self.keys.contains_key(key) {
            return false;
        }
        self.keys.insert(key.to_string(), HashMap::new());
        true
    }

    /// Unregister a key and discard its entries. Returns false if it was not indexed.
    pub(crate) fn drop_key(&mut self, key: &str) -> bool {
        self.keys.remove(key).is_some()
    }

    pub(crate) fn keys(&self) -> HashSet<String> {
        self.keys.keys().cloned().collect()
    }

    pub(crate) fn insert(&mut self, key: &str, value: &Value, id: Id) {
        let Some(entries) = self.keys.get_mut(key) else {
            return;
        };
        if let Some(index_value) = IndexValue::from_value(value) {
            trace!(key, %id, "index insert");
            entries.entry(index_value).or_default().insert(id);
        }
    }

    pub(crate) fn remove(&mut self, key: &str, value: &Value, id: Id) {
        let Some(entries) = self.keys.get_mut(key) else {
            return;
        };
        if let Some(index_value) = IndexValue::from_value(value) {
            if let Some(set) = entries.get_mut(&index_value) {
                trace!(key, %id, "index remove");
                set.remove(&id);
                if set.is_empty() {
                    entries.remove(&index_value);
                }
            }
        }
    }

    /// Ids whose property `key` equals `value`, in id order.
    ///
    /// Returns `None` when the key is not indexed or the value cannot be
    /// indexed; the caller has to scan instead.
    pub(crate) fn lookup(&self, key: &str, value: &Value) -> Option<impl Iterator<Item = Id> + '_> {
        let entries = self.keys.get(key)?;
        let index_value = IndexValue::from_value(value)?;
        Some(
            entries
                .get(&index_value)
                .into_iter()
                .flat_map(|set| set.iter().copied()),
        )
    }
}
