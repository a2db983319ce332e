//! Vertex assignments
//!
//! An [`Assignment`] holds one [`Label`] per vertex, in the graph's vertex
//! order. It is a plain value: cloning it is how callers take a private
//! snapshot before probing a hypothetical change.

use crate::error::GraphError;
use crate::graph::Graph;
use crate::vertex::VertexId;
use std::collections::BTreeMap;

/// Value assigned to a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Label {
    /// 0
    #[default]
    Zero,
    /// 1
    One,
    /// 2
    Two,
}

impl Label {
    /// All labels in ascending order
    pub const ALL: [Label; 3] = [Label::Zero, Label::One, Label::Two];

    /// Numeric value
    #[inline]
    #[must_use]
    pub fn value(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Two => 2,
        }
    }

    /// Label for a numeric value in `{0, 1, 2}`
    #[inline]
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Zero),
            1 => Some(Self::One),
            2 => Some(Self::Two),
            _ => None,
        }
    }

    /// One step down, saturating at zero
    #[inline]
    #[must_use]
    pub fn decremented(self) -> Self {
        match self {
            Self::Zero | Self::One => Self::Zero,
            Self::Two => Self::One,
        }
    }
}

/// Total mapping from vertices to labels
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Assignment {
    labels: Vec<Label>,
}

impl Assignment {
    /// All-zero assignment for `len` vertices
    #[inline]
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self {
            labels: vec![Label::Zero; len],
        }
    }

    /// Wrap labels given in vertex order
    #[inline]
    #[must_use]
    pub fn from_labels(labels: Vec<Label>) -> Self {
        Self { labels }
    }

    /// Build from a keyed map; vertices missing from `values` read as zero
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidLabel`] for a value outside `{0, 1, 2}`.
    /// Keys that are not vertices of `graph` are ignored.
    pub fn from_map(
        graph: &Graph,
        values: &BTreeMap<VertexId, i64>,
    ) -> Result<Self, GraphError> {
        let mut assignment = Self::zeros(graph.vertex_count());
        for (vertex, &value) in values {
            let Some(index) = graph.index_of(vertex) else {
                continue;
            };
            let label = u8::try_from(value)
                .ok()
                .and_then(Label::from_value)
                .ok_or_else(|| GraphError::InvalidLabel {
                    vertex: vertex.clone(),
                    value,
                })?;
            assignment.set(index, label);
        }
        Ok(assignment)
    }

    /// Number of vertices covered
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label at a position; out-of-range positions read as zero
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Label {
        self.labels.get(index).copied().unwrap_or_default()
    }

    /// Numeric value at a position
    #[inline]
    #[must_use]
    pub fn value(&self, index: usize) -> i64 {
        i64::from(self.get(index).value())
    }

    /// Set the label at a position
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    #[inline]
    pub fn set(&mut self, index: usize, label: Label) {
        self.labels[index] = label;
    }

    /// Labels in vertex order
    #[inline]
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Sum of all values
    #[must_use]
    pub fn weight(&self) -> u64 {
        self.labels.iter().map(|l| u64::from(l.value())).sum()
    }

    /// Copy with one position changed
    #[must_use]
    pub fn with(&self, index: usize, label: Label) -> Self {
        let mut copy = self.clone();
        copy.set(index, label);
        copy
    }

    /// Keyed view for output
    #[must_use]
    pub fn to_map(&self, graph: &Graph) -> BTreeMap<VertexId, u8> {
        graph
            .vertices()
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), self.get(i).value()))
            .collect()
    }
}
