//! Query planning.
//!
//! The planner only decides where candidates come from. Every condition,
//! including the one used to seed index lookups, is still evaluated on each
//! candidate, so an index only has to return a superset of the matches.

use sift_core::{ElementKind, Value};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

use crate::{Compare, Condition, QueryConfig};

/// Where a query pulls its candidates from.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanPlan {
    /// Scan every element of the kind.
    FullScan,
    /// One exact-match index lookup per value, concatenated in value order.
    IndexLookup { key: String, values: Vec<Value> },
}

impl ScanPlan {
    pub fn is_index_lookup(&self) -> bool {
        matches!(self, ScanPlan::IndexLookup { .. })
    }

    /// The key whose index seeds this plan, if any.
    pub fn seed_key(&self) -> Option<&str> {
        match self {
            ScanPlan::FullScan => None,
            ScanPlan::IndexLookup { key, .. } => Some(key),
        }
    }
}

impl fmt::Display for ScanPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanPlan::FullScan => write!(f, "full scan"),
            ScanPlan::IndexLookup { key, values } => {
                write!(f, "index lookup on {} ({} values)", key, values.len())
            }
        }
    }
}

/// The first condition that can drive index lookups: an equality on an
/// indexed key with at least one operand and no null operand.
pub fn seed_condition<'c>(
    conditions: &'c [Condition],
    indexed_keys: &HashSet<String>,
) -> Option<&'c Condition> {
    conditions.iter().find(|condition| {
        condition.compare() == Compare::Equal
            && indexed_keys.contains(condition.key())
            && !condition.values().is_empty()
            && !condition.has_null_operand()
    })
}

/// Query planner.
pub struct QueryPlanner<'c> {
    config: &'c QueryConfig,
}

impl<'c> QueryPlanner<'c> {
    /// Create a new planner.
    pub fn new(config: &'c QueryConfig) -> Self {
        Self { config }
    }

    /// Plan a scan over elements of `kind`.
    ///
    /// `indexed_keys` is `None` when the backend has no key index.
    pub fn plan(
        &self,
        kind: ElementKind,
        conditions: &[Condition],
        indexed_keys: Option<&HashSet<String>>,
    ) -> ScanPlan {
        let plan = match indexed_keys {
            Some(keys) if self.config.use_key_index => match seed_condition(conditions, keys) {
                Some(seed) => ScanPlan::IndexLookup {
                    key: seed.key().to_string(),
                    values: seed.values().to_vec(),
                },
                None => ScanPlan::FullScan,
            },
            _ => ScanPlan::FullScan,
        };
        debug!(%kind, conditions = conditions.len(), %plan, "planned element scan");
        plan
    }
}
