//! Sift Core Types
//!
//! This crate provides the foundational types shared by every Sift crate:
//! - Identity types (VertexId, EdgeId)
//! - Value types (the Value enum and its total order for comparable values)
//! - Element capability (property lookup by key) and the ElementKind tag
//! - Plain Vertex and Edge records
//! - The backend contract (Graph, KeyIndex)
//! - Common error types

pub mod backend;
mod entity;
mod error;
mod id;
mod value;

pub use backend::{ElementIter, Graph, KeyIndex};
pub use entity::*;
pub use error::*;
pub use id::*;
pub use value::*;
