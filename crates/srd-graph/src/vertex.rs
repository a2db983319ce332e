//! Vertex identifiers

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Opaque vertex identifier
///
/// Callers may name vertices with integers or strings. The derived ordering
/// puts every integer before every name, integers ascending and names
/// lexicographic. Every fixed-order loop in the workspace walks vertices in
/// this order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VertexId {
    /// Integer identifier
    Int(i64),
    /// Named identifier
    Name(String),
}

impl VertexId {
    /// Create a named identifier
    #[inline]
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Check whether the identifier matches a textual key
    ///
    /// JSON object keys are always strings, so `"7"` matches `Int(7)`.
    #[must_use]
    pub fn matches_key(&self, key: &str) -> bool {
        match self {
            Self::Int(i) => key.parse::<i64>().is_ok_and(|k| k == *i),
            Self::Name(n) => n == key,
        }
    }
}

impl Display for VertexId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Name(n) => f.write_str(n),
        }
    }
}

impl From<i64> for VertexId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for VertexId {
    fn from(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}

impl From<String> for VertexId {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_sort_before_names() {
        let mut ids = vec![
            VertexId::name("b"),
            VertexId::Int(10),
            VertexId::name("a"),
            VertexId::Int(-3),
        ];
        ids.sort();
        assert_eq!(
            ids,
            vec![
                VertexId::Int(-3),
                VertexId::Int(10),
                VertexId::name("a"),
                VertexId::name("b"),
            ]
        );
    }

    #[test]
    fn deserializes_untagged() {
        let ids: Vec<VertexId> = serde_json::from_str(r#"[1, "x"]"#).unwrap();
        assert_eq!(ids, vec![VertexId::Int(1), VertexId::name("x")]);
    }

    #[test]
    fn matches_json_keys() {
        assert!(VertexId::Int(7).matches_key("7"));
        assert!(!VertexId::Int(7).matches_key("07x"));
        assert!(VertexId::name("v1").matches_key("v1"));
        assert!(!VertexId::name("7").matches_key("8"));
    }
}
