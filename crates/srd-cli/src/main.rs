use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use serde_json::json;
use srd_graph::{Assignment, Graph, GraphSpec, VertexId};
use srd_solver::{
    decode, BitString, HybridSolver, Pipeline, RandomSampler, Sampler, Solution, SolverConfig,
    StaticSampler,
};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    let graph_arg = Arg::new("graph")
        .long("graph")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Graph JSON: {vertices: [{id}], edges: [{source, target, sign}]}");
    let config_arg = Arg::new("config")
        .long("config")
        .value_parser(value_parser!(PathBuf))
        .help("Solver configuration (TOML)");

    Command::new("srd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Signed Roman domination hybrid solver")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("solve")
                .about("Solve a graph, optionally arbitrating against sampled candidates")
                .arg(graph_arg.clone())
                .arg(config_arg.clone())
                .arg(
                    Arg::new("counts")
                        .long("counts")
                        .value_parser(value_parser!(PathBuf))
                        .conflicts_with("seed")
                        .help("Observed sampler counts JSON: {\"<bitstring>\": count}"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_parser(value_parser!(u64))
                        .help("Sample uniformly random bit-strings from this seed"),
                )
                .arg(
                    Arg::new("pretty")
                        .long("pretty")
                        .action(ArgAction::SetTrue)
                        .help("Pretty-print the JSON result"),
                ),
        )
        .subcommand(
            Command::new("evaluate")
                .about("Score an assignment against a graph")
                .arg(graph_arg.clone())
                .arg(config_arg)
                .arg(
                    Arg::new("assignment")
                        .long("assignment")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Assignment JSON: {\"<vertex>\": 0|1|2}"),
                ),
        )
        .subcommand(
            Command::new("decode")
                .about("Decode a bit-string into an assignment")
                .arg(graph_arg)
                .arg(
                    Arg::new("bits")
                        .long("bits")
                        .required(true)
                        .help("Bit-string, rightmost bit first"),
                ),
        )
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn load_graph(path: &Path) -> Result<Graph> {
    let spec: GraphSpec = serde_json::from_str(&read(path)?)
        .with_context(|| format!("malformed graph JSON in {}", path.display()))?;
    Ok(Graph::try_from(spec)?)
}

fn load_config(path: Option<&PathBuf>) -> Result<SolverConfig> {
    match path {
        Some(path) => Ok(SolverConfig::from_toml_str(&read(path)?)
            .with_context(|| format!("invalid configuration in {}", path.display()))?),
        None => Ok(SolverConfig::default()),
    }
}

fn load_counts(path: &Path) -> Result<StaticSampler> {
    let counts: BTreeMap<String, u64> = serde_json::from_str(&read(path)?)
        .with_context(|| format!("malformed counts JSON in {}", path.display()))?;
    Ok(StaticSampler::from_counts(&counts)?)
}

fn parse_assignment(graph: &Graph, input: &str) -> Result<Assignment> {
    let raw: BTreeMap<String, i64> =
        serde_json::from_str(input).context("malformed assignment JSON")?;

    let mut values: BTreeMap<VertexId, i64> = BTreeMap::new();
    for (key, value) in raw {
        match graph.resolve_key(&key).and_then(|i| graph.vertex(i)) {
            Some(vertex) => {
                values.insert(vertex.clone(), value);
            }
            None => tracing::warn!("Ignoring assignment for unknown vertex {}", key),
        }
    }
    Ok(Assignment::from_map(graph, &values)?)
}

async fn solve_with<S: Sampler>(
    config: SolverConfig,
    sampler: S,
    graph: &Graph,
) -> Result<Solution> {
    let solver = HybridSolver::new(config, sampler)?;
    Ok(solver.solve(graph).await)
}

async fn run_solve(args: &ArgMatches) -> Result<()> {
    let graph = load_graph(args.get_one::<PathBuf>("graph").context("missing --graph")?)?;
    let config = load_config(args.get_one::<PathBuf>("config"))?;

    let solution = if let Some(path) = args.get_one::<PathBuf>("counts") {
        solve_with(config, load_counts(path)?, &graph).await?
    } else if let Some(seed) = args.get_one::<u64>("seed") {
        solve_with(config, RandomSampler::new(*seed), &graph).await?
    } else {
        Pipeline::new(config)?.solve_classical(&graph)
    };

    let out = if args.get_flag("pretty") {
        serde_json::to_string_pretty(&solution)?
    } else {
        serde_json::to_string(&solution)?
    };
    println!("{out}");
    Ok(())
}

fn run_evaluate(args: &ArgMatches) -> Result<()> {
    let graph = load_graph(args.get_one::<PathBuf>("graph").context("missing --graph")?)?;
    let config = load_config(args.get_one::<PathBuf>("config"))?;
    let path = args.get_one::<PathBuf>("assignment").context("missing --assignment")?;
    let assignment = parse_assignment(&graph, &read(path)?)?;

    let pipeline = Pipeline::new(config)?;
    let evaluator = pipeline.evaluator();
    let evaluation = evaluator.evaluate(&graph, &assignment);
    let vertices: Vec<_> = graph
        .vertices()
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let report = evaluator.vertex_report(&graph, &assignment, i);
            json!({
                "id": id,
                "value": assignment.get(i).value(),
                "defense": report.defense,
                "penalty": report.penalty,
            })
        })
        .collect();

    let out = json!({
        "valid": evaluation.valid,
        "weight": evaluation.weight,
        "violations": evaluation.violations,
        "combined": evaluator.combined_score(&evaluation),
        "vertices": vertices,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn run_decode(args: &ArgMatches) -> Result<()> {
    let graph = load_graph(args.get_one::<PathBuf>("graph").context("missing --graph")?)?;
    let Some(raw) = args.get_one::<String>("bits") else {
        bail!("missing --bits");
    };
    let bits: BitString = raw.parse()?;
    let assignment = decode(&bits, &graph);
    println!("{}", serde_json::to_string_pretty(&assignment.to_map(&graph))?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("solve", args)) => run_solve(args).await,
        Some(("evaluate", args)) => run_evaluate(args),
        Some(("decode", args)) => run_decode(args),
        _ => unreachable!("subcommand is required"),
    }
}
