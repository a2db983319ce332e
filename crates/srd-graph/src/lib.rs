//! SRD Graph Model
//!
//! Immutable signed graphs and the `{0, 1, 2}` vertex assignments scored
//! against them.
//!
//! # Core Concepts
//!
//! - [`VertexId`]: Opaque vertex identifier (integer or name), totally ordered
//! - [`Sign`]: Edge polarity, `+1` or `-1`
//! - [`Graph`]: Validated vertex set with a precomputed signed adjacency
//! - [`Label`] / [`Assignment`]: Dense per-vertex values in vertex order
//! - [`GraphSpec`]: Wire format accepted from callers
//!
//! # Example
//!
//! ```rust,ignore
//! use srd_graph::{Assignment, Graph, GraphSpec, Label};
//!
//! let spec: GraphSpec = serde_json::from_str(input)?;
//! let graph = Graph::try_from(spec)?;
//!
//! let mut assignment = Assignment::zeros(graph.vertex_count());
//! assignment.set(graph.index_of(&"b".into()).unwrap(), Label::Two);
//! ```

#![warn(unreachable_pub)]

mod assignment;
mod error;
mod graph;
mod spec;
mod vertex;

pub use assignment::{Assignment, Label};
pub use error::GraphError;
pub use graph::{Edge, Graph, Neighbor, Sign};
pub use spec::{EdgeSpec, GraphSpec, VertexSpec};
pub use vertex::VertexId;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
