//! Testing utilities for the SRD workspace
//!
//! Shared graph fixtures and proptest strategies.

#![allow(missing_docs)]

use proptest::prelude::*;
use srd_graph::{Assignment, Edge, Graph, Label, Sign, VertexId};

/// `a - b - c`, all positive
pub fn path_abc() -> Graph {
    Graph::new(
        vec!["a".into(), "b".into(), "c".into()],
        vec![Edge::positive("a", "b"), Edge::positive("b", "c")],
    )
    .unwrap()
}

/// Positive path over integer vertices `0..n`
pub fn path(n: i64) -> Graph {
    let edges = (1..n).map(|i| Edge::positive(i - 1, i)).collect();
    Graph::new((0..n).map(VertexId::Int), edges).unwrap()
}

/// Positive star: center `0`, leaves `1..=leaves`
pub fn star(leaves: i64) -> Graph {
    let edges = (1..=leaves).map(|i| Edge::positive(0_i64, i)).collect();
    Graph::new((0..=leaves).map(VertexId::Int), edges).unwrap()
}

/// Cycle over `0..n` with the given signs, edge `i` joining `i` and `i + 1 mod n`
pub fn signed_cycle(signs: &[Sign]) -> Graph {
    let n = i64::try_from(signs.len()).expect("cycle too long");
    let edges = (0..n)
        .zip(signs)
        .map(|(i, sign)| Edge::new(i, (i + 1) % n, *sign))
        .collect();
    Graph::new((0..n).map(VertexId::Int), edges).unwrap()
}

/// Assignment from raw values; panics on values above 2
pub fn assignment(values: &[u8]) -> Assignment {
    Assignment::from_labels(
        values
            .iter()
            .map(|v| Label::from_value(*v).expect("label out of range"))
            .collect(),
    )
}

pub fn arb_sign() -> impl Strategy<Value = Sign> {
    prop_oneof![Just(Sign::Positive), Just(Sign::Negative)]
}

pub fn arb_label() -> impl Strategy<Value = Label> {
    proptest::sample::select(Label::ALL.to_vec())
}

/// Random signed graph over `0..n`; some edges dangle into `n..n + 2`
pub fn arb_graph(max_vertices: usize, max_edges: usize) -> impl Strategy<Value = Graph> {
    let max_vertices = i64::try_from(max_vertices).expect("too many vertices");
    (1..=max_vertices).prop_flat_map(move |n| {
        proptest::collection::vec((0..n + 2, 0..n + 2, arb_sign()), 0..=max_edges).prop_map(
            move |edges| {
                let edges = edges
                    .into_iter()
                    .map(|(s, t, sign)| Edge::new(s, t, sign))
                    .collect();
                Graph::new((0..n).map(VertexId::Int), edges).unwrap()
            },
        )
    })
}

/// Random graph together with a random assignment over it
pub fn arb_graph_and_assignment(
    max_vertices: usize,
    max_edges: usize,
) -> impl Strategy<Value = (Graph, Assignment)> {
    arb_graph(max_vertices, max_edges).prop_flat_map(|graph| {
        let n = graph.vertex_count();
        proptest::collection::vec(arb_label(), n)
            .prop_map(move |labels| (graph.clone(), Assignment::from_labels(labels)))
    })
}
