//! Query configuration.

use serde::{Deserialize, Serialize};

/// Options that shape how a query is planned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Seed equality conditions from the backend's key index when it has one.
    /// When false every query is a full scan.
    pub use_key_index: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            use_key_index: true,
        }
    }
}

impl QueryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_use_key_index(mut self, use_key_index: bool) -> Self {
        self.use_key_index = use_key_index;
        self
    }

    /// A configuration that never touches key indices.
    pub fn scan_only() -> Self {
        Self {
            use_key_index: false,
        }
    }
}
