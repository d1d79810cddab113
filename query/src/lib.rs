//! Sift Query
//!
//! Filter the vertices and edges of any property graph backend.
//!
//! Responsibilities:
//! - Model property conditions and evaluate them against elements
//! - Collect conditions and a pagination window through a fluent builder
//! - Seed equality queries from a backend key index when one is available
//! - Stream matches lazily, reading the backend only as far as needed

mod condition;
mod config;
mod error;
mod iter;
mod merge;
mod plan;
mod query;
mod range;

pub use condition::{Compare, Condition, ParseCompareError};
pub use config::QueryConfig;
pub use error::{QueryError, QueryResult};
pub use iter::FilteredIter;
pub use merge::MergeIter;
pub use plan::{seed_condition, QueryPlanner, ScanPlan};
pub use query::GraphQuery;
pub use range::PageRange;
