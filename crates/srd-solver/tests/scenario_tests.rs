use pretty_assertions::assert_eq;
use srd_graph::{Edge, Graph, GraphSpec, Label, Sign, VertexId};
use srd_solver::{
    decode, Evaluation, Evaluator, HybridSolver, Pipeline, Provenance, RandomSampler, RepairEngine,
    RepairStatus, Sample, SolverConfig, StaticSampler, UnavailableSampler,
};
use srd_test_utils::{assignment, path, path_abc, signed_cycle, star};

#[test]
fn test_center_two_is_valid() {
    let e = Evaluator::default().evaluate(&path_abc(), &assignment(&[0, 2, 0]));
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
fn test_all_zero_path_total() {
    let g = path_abc();
    let ev = Evaluator::default();
    let a = assignment(&[0, 0, 0]);

    let expected: u64 = (0..g.vertex_count())
        .map(|v| ev.vertex_report(&g, &a, v).penalty)
        .sum();
    let e = ev.evaluate(&g, &a);
    assert!(!e.valid);
    assert_eq!(e.violations, expected);
    assert_eq!(e.violations, 3 * (10 + 5 + 1));
}

#[test]
fn test_decode_two_vertices() {
    let g = Graph::new(vec!["b".into(), "a".into()], vec![]).unwrap();
    let a = decode(&"1000".parse().unwrap(), &g);
    let map = a.to_map(&g);
    assert_eq!(map[&VertexId::from("a")], 0);
    assert_eq!(map[&VertexId::from("b")], 2);
}

#[test]
fn test_star_reduces_to_center() {
    let g = star(5);
    let out = RepairEngine::new(&SolverConfig::default()).repair(&g);
    assert_eq!(out.status, RepairStatus::Repaired);
    // first leaf, then the center
    assert_eq!(out.iterations, 2);
    assert_eq!(out.assignment.get(0), Label::Two);
    assert_eq!(out.assignment.get(1), Label::Two);

    let classical = Pipeline::new(SolverConfig::default()).unwrap().classical(&g);
    assert!(classical.evaluation.valid);
    assert_eq!(classical.assignment.get(0), Label::Two);
    assert_eq!(classical.evaluation.weight, 2);
}

#[test]
fn test_repair_long_path_valid() {
    let g = path(12);
    let out = RepairEngine::new(&SolverConfig::default()).repair(&g);
    assert!(out.evaluation.valid);
}

#[test]
fn test_negative_cycle_best_effort() {
    let g = signed_cycle(&[Sign::Negative; 4]);
    let out = RepairEngine::new(&SolverConfig::default()).repair(&g);
    let zero = Evaluator::default().evaluate(&g, &assignment(&[0; 4]));
    assert!(out.evaluation.violations <= zero.violations);
    assert!(out.iterations <= 100);
}

#[tokio::test]
async fn test_unavailable_sampler_still_solves() {
    let solver =
        HybridSolver::new(SolverConfig::default(), UnavailableSampler::new("no backend")).unwrap();
    let s = solver.solve(&path(6)).await;
    assert_eq!(s.provenance, Provenance::Classical);
    assert!(s.valid);
    assert_eq!(s.assignment.len(), 6);
}

#[tokio::test]
async fn test_empty_sample_table_still_solves() {
    let solver = HybridSolver::new(SolverConfig::default(), StaticSampler::new(vec![])).unwrap();
    let s = solver.solve(&path_abc()).await;
    assert_eq!(s.provenance, Provenance::Classical);
    assert!(s.valid);
}

#[tokio::test]
async fn test_heavier_sample_loses() {
    // all-twos sample is valid but heavier than the classical result
    let heavy = Sample::new("101010".parse().unwrap(), 50);
    let solver = HybridSolver::new(SolverConfig::default(), StaticSampler::new(vec![heavy])).unwrap();
    let s = solver.solve(&path_abc()).await;
    assert_eq!(s.provenance, Provenance::Classical);
    assert_eq!(s.weight, 2);
}

#[tokio::test]
async fn test_random_sampler_is_never_worse_than_classical() {
    let config = SolverConfig::default().with_shots(256).with_noise_floor(1);
    let g = star(3);
    let classical = HybridSolver::new(config.clone(), UnavailableSampler::new("off"))
        .unwrap()
        .solve(&g)
        .await;
    let hybrid = HybridSolver::new(config, RandomSampler::new(42))
        .unwrap()
        .solve(&g)
        .await;

    let score = |valid: bool, violations: u64, weight: u64| (violations * 100 + weight, !valid);
    assert!(
        score(hybrid.valid, hybrid.violations, hybrid.weight)
            <= score(classical.valid, classical.violations, classical.weight)
    );
}

#[tokio::test]
async fn test_wire_graph_with_dangling_edge() {
    let spec: GraphSpec = serde_json::from_str(
        r#"{"vertices":[{"id":"a"},{"id":"b"}],
            "edges":[{"source":"a","target":"b","sign":1},
                     {"source":"b","target":"nowhere","sign":-1}]}"#,
    )
    .unwrap();
    let solver = HybridSolver::new(SolverConfig::default(), UnavailableSampler::new("off")).unwrap();
    let s = solver.solve_spec(spec).await.unwrap();
    assert!(s.valid);
    assert_eq!(s.weight, 2);
}

#[tokio::test]
async fn test_bad_sign_fails_fast() {
    let spec: GraphSpec = serde_json::from_str(
        r#"{"vertices":[{"id":"a"},{"id":"b"}],
            "edges":[{"source":"a","target":"b","sign":0.25}]}"#,
    )
    .unwrap();
    let solver = HybridSolver::new(SolverConfig::default(), UnavailableSampler::new("off")).unwrap();
    let err = solver.solve_spec(spec).await.unwrap_err();
    assert!(err.is_invalid_graph());
}

#[tokio::test]
async fn test_int_and_name_sharing_a_key_fail_fast() {
    let spec: GraphSpec =
        serde_json::from_str(r#"{"vertices":[{"id":7},{"id":"7"}],"edges":[]}"#).unwrap();
    let solver = HybridSolver::new(SolverConfig::default(), UnavailableSampler::new("off")).unwrap();
    let err = solver.solve_spec(spec).await.unwrap_err();
    assert!(err.is_invalid_graph());
}

#[test]
fn test_solution_keys_are_unique() {
    let g = Graph::new(vec![VertexId::Int(1), VertexId::from("x")], vec![]).unwrap();
    let s = Pipeline::new(SolverConfig::default()).unwrap().solve_classical(&g);
    let json: serde_json::Value = serde_json::to_value(&s).unwrap();
    assert_eq!(json["assignment"].as_object().unwrap().len(), g.vertex_count());
}

#[test]
fn test_edge_shorthands() {
    assert_eq!(Edge::negative("x", "y").sign, Sign::Negative);
}
