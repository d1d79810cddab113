//! Sift Graph Storage
//!
//! An in-memory property graph that implements the Sift backend contract:
//! - Vertex and edge storage in id (insertion) order
//! - Full scans of vertices and edges
//! - Optional key indices: exact-match lookup of elements by property value,
//!   kept in sync as properties change and elements are removed

mod graph;
mod index;

pub use graph::*;
