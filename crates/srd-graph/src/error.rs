//! Error types for graph construction

use crate::vertex::VertexId;

/// Graph construction and assignment errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// Graph references no vertices
    #[error("invalid graph: no vertices")]
    NoVertices,

    /// Edge sign is not exactly `+1` or `-1`
    #[error("invalid graph: edge {from}-{to} has sign {sign}, expected 1 or -1")]
    InvalidSign {
        /// First endpoint
        from: VertexId,
        /// Second endpoint
        to: VertexId,
        /// Offending sign value
        sign: f64,
    },

    /// Vertex listed more than once
    #[error("invalid graph: duplicate vertex {0}")]
    DuplicateVertex(VertexId),

    /// Assignment value outside `{0, 1, 2}`
    #[error("invalid label {value} for vertex {vertex}")]
    InvalidLabel {
        /// Vertex the value was given for
        vertex: VertexId,
        /// Offending value
        value: i64,
    },
}

impl GraphError {
    /// Check if this is a malformed-graph failure
    #[inline]
    #[must_use]
    pub fn is_invalid_graph(&self) -> bool {
        matches!(
            self,
            Self::NoVertices | Self::InvalidSign { .. } | Self::DuplicateVertex(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_invalid_graph() {
        let err = GraphError::InvalidSign {
            from: VertexId::name("a"),
            to: VertexId::Int(2),
            sign: 0.5,
        };
        assert!(err.to_string().contains("invalid graph"));
        assert!(err.to_string().contains("a-2"));
        assert!(err.is_invalid_graph());
    }

    #[test]
    fn invalid_label_is_not_graph_kind() {
        let err = GraphError::InvalidLabel {
            vertex: VertexId::name("a"),
            value: 3,
        };
        assert!(!err.is_invalid_graph());
    }
}
