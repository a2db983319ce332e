//! Signed graph model
//!
//! A [`Graph`] is built once per solve and is read-only afterwards. Vertices
//! are stored in ascending [`VertexId`] order and addressed by their position
//! in that order; every assignment is indexed the same way.

use crate::error::GraphError;
use crate::vertex::VertexId;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Edge polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "i8")]
pub enum Sign {
    /// `+1`, a supporting relation
    Positive,
    /// `-1`, an opposing relation
    Negative,
}

impl Sign {
    /// Numeric value of the sign
    #[inline]
    #[must_use]
    pub fn value(self) -> i64 {
        match self {
            Self::Positive => 1,
            Self::Negative => -1,
        }
    }

    /// Check for a positive edge
    #[inline]
    #[must_use]
    pub fn is_positive(self) -> bool {
        matches!(self, Self::Positive)
    }

    /// Parse a wire sign; only exactly `1` and `-1` are accepted
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        if value == 1.0 {
            Some(Self::Positive)
        } else if value == -1.0 {
            Some(Self::Negative)
        } else {
            None
        }
    }
}

impl From<Sign> for i8 {
    fn from(sign: Sign) -> Self {
        match sign {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }
}

/// Undirected signed edge
///
/// Endpoints are not required to be vertices of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// First endpoint
    pub source: VertexId,
    /// Second endpoint
    pub target: VertexId,
    /// Polarity
    pub sign: Sign,
}

impl Edge {
    /// Create new edge
    #[inline]
    #[must_use]
    pub fn new(source: impl Into<VertexId>, target: impl Into<VertexId>, sign: Sign) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            sign,
        }
    }

    /// Positive edge shorthand
    #[inline]
    #[must_use]
    pub fn positive(source: impl Into<VertexId>, target: impl Into<VertexId>) -> Self {
        Self::new(source, target, Sign::Positive)
    }

    /// Negative edge shorthand
    #[inline]
    #[must_use]
    pub fn negative(source: impl Into<VertexId>, target: impl Into<VertexId>) -> Self {
        Self::new(source, target, Sign::Negative)
    }
}

/// One incident edge seen from a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    /// Index of the other endpoint
    pub index: usize,
    /// Polarity of the connecting edge
    pub sign: Sign,
}

/// Immutable signed graph
#[derive(Debug, Clone)]
pub struct Graph {
    /// Vertices in ascending order
    vertices: Vec<VertexId>,
    /// Vertex -> position
    index: HashMap<VertexId, usize>,
    /// Edges as supplied, dangling ones included
    edges: Vec<Edge>,
    /// Incident edges per vertex; parallel edges repeat
    adjacency: Vec<Vec<Neighbor>>,
    /// Edges with at least one endpoint outside the vertex set
    dangling: usize,
}

impl Graph {
    /// Build a graph
    ///
    /// # Errors
    /// - [`GraphError::NoVertices`] if `vertices` is empty
    /// - [`GraphError::DuplicateVertex`] if two identifiers print the same,
    ///   e.g. `7` and `"7"`
    ///
    /// Edges whose endpoints are not both in the vertex set are kept but
    /// never consulted as neighbors; a warning is logged with their count.
    pub fn new(
        vertices: impl IntoIterator<Item = VertexId>,
        edges: Vec<Edge>,
    ) -> Result<Self, GraphError> {
        let mut vertices: Vec<VertexId> = vertices.into_iter().collect();
        if vertices.is_empty() {
            return Err(GraphError::NoVertices);
        }
        vertices.sort();

        // `7` and `"7"` share a JSON key
        let mut keys = HashSet::with_capacity(vertices.len());
        if let Some(dup) = vertices.iter().find(|v| !keys.insert(v.to_string())) {
            return Err(GraphError::DuplicateVertex(dup.clone()));
        }

        let index: HashMap<VertexId, usize> = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();

        let mut adjacency = vec![Vec::new(); vertices.len()];
        let mut dangling = 0;
        for edge in &edges {
            match (index.get(&edge.source), index.get(&edge.target)) {
                (Some(&s), Some(&t)) if s == t => {
                    adjacency[s].push(Neighbor { index: s, sign: edge.sign });
                }
                (Some(&s), Some(&t)) => {
                    adjacency[s].push(Neighbor { index: t, sign: edge.sign });
                    adjacency[t].push(Neighbor { index: s, sign: edge.sign });
                }
                _ => {
                    tracing::debug!(
                        "Dangling edge {}-{} ignored",
                        edge.source,
                        edge.target
                    );
                    dangling += 1;
                }
            }
        }

        if dangling > 0 {
            tracing::warn!(
                "{} of {} edges reference unknown vertices and will be ignored",
                dangling,
                edges.len()
            );
        }

        Ok(Self {
            vertices,
            index,
            edges,
            adjacency,
            dangling,
        })
    }

    /// Number of vertices
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Vertices in ascending order
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Vertex at a position
    #[inline]
    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<&VertexId> {
        self.vertices.get(index)
    }

    /// Position of a vertex
    #[inline]
    #[must_use]
    pub fn index_of(&self, id: &VertexId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Position of the vertex a textual key names
    #[must_use]
    pub fn resolve_key(&self, key: &str) -> Option<usize> {
        self.vertices
            .iter()
            .position(|v| v.to_string() == key)
            .or_else(|| self.vertices.iter().position(|v| v.matches_key(key)))
    }

    /// All edges as supplied
    #[inline]
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Incident edges of a vertex, in edge order
    #[inline]
    #[must_use]
    pub fn neighbors(&self, index: usize) -> &[Neighbor] {
        self.adjacency.get(index).map_or(&[], Vec::as_slice)
    }

    /// Number of edges ignored because an endpoint is unknown
    #[inline]
    #[must_use]
    pub fn dangling_edge_count(&self) -> usize {
        self.dangling
    }

    /// Bits needed to encode one assignment (two per vertex)
    #[inline]
    #[must_use]
    pub fn bit_width(&self) -> usize {
        self.vertices.len() * 2
    }
}
