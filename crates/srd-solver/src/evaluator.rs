//! Constraint evaluator
//!
//! Scores an assignment against the signed Roman domination rules:
//!
//! - **Domination**: a vertex valued 0 needs a positively connected neighbor
//!   valued 2, otherwise it costs `domination_penalty`.
//! - **Defense**: a vertex's own value plus the sign-weighted values of its
//!   neighbors must reach 1, otherwise it costs
//!   `defense_penalty_base + (1 - defense)`.
//!
//! Evaluation is pure. Dangling edges were dropped from the adjacency when
//! the graph was built, so they contribute nothing here.

use crate::config::SolverConfig;
use serde::Serialize;
use srd_graph::{Assignment, Graph, Label};

/// Result of scoring one assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Evaluation {
    /// `violations == 0`
    pub valid: bool,
    /// Sum of assigned values
    pub weight: u64,
    /// Sum of all vertex penalties
    pub violations: u64,
}

impl Evaluation {
    /// Single ranking key, lower is better
    #[inline]
    #[must_use]
    pub fn combined(&self, multiplier: u64) -> u64 {
        self.violations
            .saturating_mul(multiplier)
            .saturating_add(self.weight)
    }
}

/// Per-vertex breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexReport {
    /// Own value plus sign-weighted neighbor values
    pub defense: i64,
    /// Zero-valued with no strong neighbor
    pub domination_violated: bool,
    /// Defense below 1
    pub defense_violated: bool,
    /// Total penalty contributed by this vertex
    pub penalty: u64,
}

impl VertexReport {
    /// Fails either condition
    #[inline]
    #[must_use]
    pub fn is_violated(&self) -> bool {
        self.domination_violated || self.defense_violated
    }
}

/// Deterministic constraint evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    domination_penalty: u64,
    defense_penalty_base: u64,
    score_multiplier: u64,
}

impl Evaluator {
    /// Create evaluator from configuration
    #[inline]
    #[must_use]
    pub fn new(config: &SolverConfig) -> Self {
        Self {
            domination_penalty: config.domination_penalty,
            defense_penalty_base: config.defense_penalty_base,
            score_multiplier: config.score_multiplier,
        }
    }

    /// Score an assignment
    #[must_use]
    pub fn evaluate(&self, graph: &Graph, assignment: &Assignment) -> Evaluation {
        let n = graph.vertex_count();
        let violations = (0..n)
            .map(|v| self.vertex_report(graph, assignment, v).penalty)
            .sum();
        let weight = (0..n).map(|v| u64::from(assignment.get(v).value())).sum();

        Evaluation {
            valid: violations == 0,
            weight,
            violations,
        }
    }

    /// Score a single vertex against the current assignment
    #[must_use]
    pub fn vertex_report(&self, graph: &Graph, assignment: &Assignment, vertex: usize) -> VertexReport {
        let own = assignment.value(vertex);
        let mut defense = own;
        let mut strong_neighbor = false;

        for neighbor in graph.neighbors(vertex) {
            defense += assignment.value(neighbor.index) * neighbor.sign.value();
            if neighbor.sign.is_positive() && assignment.get(neighbor.index) == Label::Two {
                strong_neighbor = true;
            }
        }

        let domination_violated = own == 0 && !strong_neighbor;
        let defense_violated = defense < 1;

        let mut penalty = 0;
        if domination_violated {
            penalty += self.domination_penalty;
        }
        if defense_violated {
            penalty += self.defense_penalty_base + (1 - defense).unsigned_abs();
        }

        VertexReport {
            defense,
            domination_violated,
            defense_violated,
            penalty,
        }
    }

    /// Combined score of an evaluation under this evaluator's multiplier
    #[inline]
    #[must_use]
    pub fn combined_score(&self, evaluation: &Evaluation) -> u64 {
        evaluation.combined(self.score_multiplier)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(&SolverConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use srd_graph::{Edge, VertexId};

    fn path_abc() -> Graph {
        Graph::new(
            vec!["a".into(), "b".into(), "c".into()],
            vec![Edge::positive("a", "b"), Edge::positive("b", "c")],
        )
        .unwrap()
    }

    fn labels(values: &[u8]) -> Assignment {
        Assignment::from_labels(values.iter().map(|v| Label::from_value(*v).unwrap()).collect())
    }

    #[test]
    fn center_two_dominates_path() {
        let e = Evaluator::default().evaluate(&path_abc(), &labels(&[0, 2, 0]));
        assert_eq!(
            e,
            Evaluation {
                valid: true,
                weight: 2,
                violations: 0
            }
        );
    }

    #[test]
    fn all_zero_path_penalties() {
        let g = path_abc();
        let ev = Evaluator::default();
        let a = labels(&[0, 0, 0]);

        // every vertex: no strong neighbor (10) and defense 0 (5 + 1)
        for v in 0..3 {
            let r = ev.vertex_report(&g, &a, v);
            assert!(r.domination_violated);
            assert!(r.defense_violated);
            assert_eq!(r.defense, 0);
            assert_eq!(r.penalty, 16);
        }
        let e = ev.evaluate(&g, &a);
        assert!(!e.valid);
        assert_eq!(e.violations, 48);
        assert_eq!(e.weight, 0);
    }

    #[test]
    fn configured_penalties_apply() {
        let config = SolverConfig::default()
            .with_domination_penalty(1)
            .with_defense_penalty_base(2);
        let e = Evaluator::new(&config).evaluate(&path_abc(), &labels(&[0, 0, 0]));
        // per vertex: 1 + (2 + 1)
        assert_eq!(e.violations, 12);
    }

    #[test]
    fn negative_edge_lowers_defense() {
        let g = Graph::new(
            vec!["a".into(), "b".into()],
            vec![Edge::negative("a", "b")],
        )
        .unwrap();
        let r = Evaluator::default().vertex_report(&g, &labels(&[1, 2]), 0);
        assert_eq!(r.defense, -1);
        assert!(!r.domination_violated);
        // 5 + (1 - (-1))
        assert_eq!(r.penalty, 7);
    }

    #[test]
    fn negative_two_is_not_a_strong_neighbor() {
        let g = Graph::new(
            vec!["a".into(), "b".into()],
            vec![Edge::negative("a", "b")],
        )
        .unwrap();
        let r = Evaluator::default().vertex_report(&g, &labels(&[0, 2]), 0);
        assert!(r.domination_violated);
        assert_eq!(r.defense, -2);
        assert_eq!(r.penalty, 10 + 5 + 3);
    }

    #[test]
    fn parallel_edges_count_twice() {
        let g = Graph::new(
            vec!["a".into(), "b".into()],
            vec![Edge::positive("a", "b"), Edge::positive("a", "b")],
        )
        .unwrap();
        let r = Evaluator::default().vertex_report(&g, &labels(&[0, 1]), 0);
        assert_eq!(r.defense, 2);
    }

    #[test]
    fn dangling_edge_contributes_nothing() {
        let g = Graph::new(
            vec![VertexId::from("a")],
            vec![Edge::positive("a", "ghost")],
        )
        .unwrap();
        let e = Evaluator::default().evaluate(&g, &labels(&[1]));
        assert!(e.valid);
        assert_eq!(e.weight, 1);
    }

    #[test]
    fn isolated_vertex_needs_one() {
        let g = Graph::new(vec![VertexId::Int(0)], vec![]).unwrap();
        let ev = Evaluator::default();
        assert_eq!(ev.evaluate(&g, &labels(&[0])).violations, 16);
        assert!(ev.evaluate(&g, &labels(&[1])).valid);
        assert!(ev.evaluate(&g, &labels(&[2])).valid);
    }

    #[test]
    fn combined_score_folds_violations() {
        let e = Evaluation {
            valid: false,
            weight: 3,
            violations: 2,
        };
        assert_eq!(Evaluator::default().combined_score(&e), 203);
        assert_eq!(
            Evaluation {
                valid: false,
                weight: 1,
                violations: u64::MAX
            }
            .combined(100),
            u64::MAX
        );
    }
}
