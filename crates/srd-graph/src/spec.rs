//! Wire format for graphs
//!
//! `{"vertices": [{"id": ..}], "edges": [{"source": .., "target": .., "sign": 1}]}`

use crate::error::GraphError;
use crate::graph::{Edge, Graph, Sign};
use crate::vertex::VertexId;
use serde::{Deserialize, Serialize};

/// Graph as delivered by callers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphSpec {
    /// Vertex list
    pub vertices: Vec<VertexSpec>,
    /// Edge list
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// Vertex entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VertexSpec {
    /// Identifier
    pub id: VertexId,
}

/// Edge entry; `sign` is checked on conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeSpec {
    /// First endpoint
    pub source: VertexId,
    /// Second endpoint
    pub target: VertexId,
    /// Raw sign, must be exactly 1 or -1
    pub sign: f64,
}

impl TryFrom<GraphSpec> for Graph {
    type Error = GraphError;

    fn try_from(spec: GraphSpec) -> Result<Self, Self::Error> {
        if spec.vertices.is_empty() {
            return Err(GraphError::NoVertices);
        }

        let edges = spec
            .edges
            .into_iter()
            .map(|e| match Sign::from_f64(e.sign) {
                Some(sign) => Ok(Edge::new(e.source, e.target, sign)),
                None => Err(GraphError::InvalidSign {
                    from: e.source,
                    to: e.target,
                    sign: e.sign,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Graph::new(spec.vertices.into_iter().map(|v| v.id), edges)
    }
}

impl From<&Graph> for GraphSpec {
    fn from(graph: &Graph) -> Self {
        Self {
            vertices: graph
                .vertices()
                .iter()
                .map(|id| VertexSpec { id: id.clone() })
                .collect(),
            edges: graph
                .edges()
                .iter()
                .map(|e| EdgeSpec {
                    source: e.source.clone(),
                    target: e.target.clone(),
                    sign: f64::from(i8::from(e.sign)),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<Graph, GraphError> {
        let spec: GraphSpec = serde_json::from_str(json).unwrap();
        Graph::try_from(spec)
    }

    #[test]
    fn parses_mixed_identifiers() {
        let g = parse(
            r#"{"vertices":[{"id":2},{"id":"x"},{"id":1}],
                "edges":[{"source":1,"target":"x","sign":-1}]}"#,
        )
        .unwrap();
        assert_eq!(
            g.vertices(),
            &[VertexId::Int(1), VertexId::Int(2), VertexId::name("x")]
        );
        assert_eq!(g.neighbors(0)[0].sign, Sign::Negative);
    }

    #[test]
    fn missing_edges_field_defaults_empty() {
        let g = parse(r#"{"vertices":[{"id":"a"}]}"#).unwrap();
        assert!(g.edges().is_empty());
    }

    #[test]
    fn rejects_no_vertices() {
        let err = parse(r#"{"vertices":[],"edges":[]}"#).unwrap_err();
        assert_eq!(err, GraphError::NoVertices);
    }

    #[test]
    fn rejects_int_and_name_with_same_key() {
        let err = parse(r#"{"vertices":[{"id":7},{"id":"7"}],"edges":[]}"#).unwrap_err();
        assert_eq!(err, GraphError::DuplicateVertex(VertexId::name("7")));
    }

    #[test]
    fn rejects_fractional_and_zero_signs() {
        for sign in ["0", "0.5", "-2", "1.5"] {
            let json = format!(
                r#"{{"vertices":[{{"id":"a"}},{{"id":"b"}}],
                    "edges":[{{"source":"a","target":"b","sign":{sign}}}]}}"#
            );
            let err = parse(&json).unwrap_err();
            assert!(err.is_invalid_graph(), "sign {sign} accepted");
        }
    }

    #[test]
    fn spec_round_trips_through_graph() {
        let g = parse(
            r#"{"vertices":[{"id":"a"},{"id":"b"}],
                "edges":[{"source":"a","target":"b","sign":1}]}"#,
        )
        .unwrap();
        let json = serde_json::to_string(&GraphSpec::from(&g)).unwrap();
        let again = parse(&json).unwrap();
        assert_eq!(again.vertices(), g.vertices());
        assert_eq!(again.edges(), g.edges());
    }
}
