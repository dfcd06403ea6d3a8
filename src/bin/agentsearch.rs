use agentsearch::{
    adversarial::{
        AdversarialAlgorithm, AgentConfig, ConfigError, EvaluatorRegistry, ReflexAgent,
        DEFAULT_DEPTH, DEFAULT_EVALUATOR,
    },
    domains::{
        self, ChaseState, Direction, Layout, LayoutError, MazeHeuristicName, MazeProblem,
    },
    search::{
        validate, Plan, SearchEngineName, SearchResult, TerminationCondition, ValidationError, Verbosity,
    },
};
use clap::{Parser, Subcommand, ValueEnum};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{path::PathBuf, process::ExitCode, time::Duration};
use thiserror::Error;
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Solve grid mazes with classic search, or play the chase game with an
/// adversarial agent.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        global = true,
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(
        help = "Whether to use coloured output",
        short = 'c',
        long = "colour",
        global = true
    )]
    colour: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a path from the start to the single resource of a maze layout.
    Search {
        #[arg(help = "The maze layout file")]
        layout: PathBuf,
        #[arg(
            value_enum,
            help = "The search engine to use",
            short = 'e',
            long = "engine",
            id = "ENGINE",
            default_value_t = SearchEngineName::AStar
        )]
        search_engine_name: SearchEngineName,
        #[arg(
            value_enum,
            help = "The heuristic evaluator to use, only A* looks at it",
            long = "heuristic",
            id = "HEURISTIC",
            default_value_t = MazeHeuristicName::Manhattan
        )]
        heuristic_name: MazeHeuristicName,
        #[arg(
            help = "Give up after this long, e.g. `30s` or `2min`",
            long = "time-limit",
            value_parser = humantime::parse_duration
        )]
        time_limit: Option<Duration>,
        #[arg(help = "Give up after expanding this many nodes", long = "node-limit")]
        node_limit: Option<usize>,
        #[arg(help = "Give up when using more memory than this", long = "memory-limit")]
        memory_limit_mb: Option<usize>,
    },
    /// Play the chase game against threats that move at random.
    Play {
        #[arg(help = "The chase layout file")]
        layout: PathBuf,
        #[arg(
            value_enum,
            help = "The agent playing the protagonist",
            short = 'a',
            long = "agent",
            id = "AGENT",
            default_value_t = AgentKind::AlphaBeta
        )]
        agent: AgentKind,
        #[arg(
            help = "Search depth in full rounds of moves",
            short = 'd',
            long = "depth",
            default_value_t = DEFAULT_DEPTH
        )]
        depth: usize,
        #[arg(
            help = "The leaf evaluator of the search agents",
            long = "evaluator",
            default_value = DEFAULT_EVALUATOR
        )]
        evaluator: String,
        #[arg(
            help = "A TOML agent config, overrides the agent, depth and evaluator",
            long = "config"
        )]
        config: Option<PathBuf>,
        #[arg(help = "Stop after this many rounds", long = "max-turns", default_value_t = 500)]
        max_turns: usize,
        #[arg(help = "Seed for every random choice of the game", long = "seed")]
        seed: Option<u64>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
enum AgentKind {
    #[clap(help = "Look one move ahead with a fixed scoring formula.")]
    Reflex,
    Minimax,
    AlphaBeta,
    Expectimax,
}

impl AgentKind {
    fn algorithm(self) -> Option<AdversarialAlgorithm> {
        match self {
            AgentKind::Reflex => None,
            AgentKind::Minimax => Some(AdversarialAlgorithm::Minimax),
            AgentKind::AlphaBeta => Some(AdversarialAlgorithm::AlphaBeta),
            AgentKind::Expectimax => Some(AdversarialAlgorithm::Expectimax),
        }
    }
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("plan is invalid: {0}")]
    Validation(#[from] ValidationError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let result = match cli.command {
        Commands::Search {
            layout,
            search_engine_name,
            heuristic_name,
            time_limit,
            node_limit,
            memory_limit_mb,
        } => {
            let mut termination_condition =
                TerminationCondition::new(time_limit, node_limit, memory_limit_mb);
            search(
                layout,
                search_engine_name,
                heuristic_name,
                &mut termination_condition,
            )
        }
        Commands::Play {
            layout,
            agent,
            depth,
            evaluator,
            config,
            max_turns,
            seed,
        } => {
            let config = match config {
                Some(path) => AgentConfig::load(&path).map(Some),
                None => Ok(agent
                    .algorithm()
                    .map(|algorithm| AgentConfig::new(algorithm, depth, &evaluator))),
            };
            config
                .map_err(CliError::from)
                .and_then(|config| play(layout, config, max_turns, seed))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn search(
    layout: PathBuf,
    search_engine_name: SearchEngineName,
    heuristic_name: MazeHeuristicName,
    termination_condition: &mut TerminationCondition,
) -> Result<(), CliError> {
    let problem = MazeProblem::new(Layout::from_path(&layout)?)?;
    let mut heuristic = heuristic_name.create();
    let (result, _) =
        search_engine_name.search(&problem, heuristic.as_mut(), termination_condition);

    match result {
        SearchResult::Success(plan) => report_plan(&plan, &problem),
        _ => {
            info!("no plan found");
            println!("No plan found: {:?}", result);
            Ok(())
        }
    }
}

/// Print a plan once it has been replayed successfully against the maze.
fn report_plan(plan: &Plan<Direction>, problem: &MazeProblem) -> Result<(), CliError> {
    info!("validating plan");
    validate(plan, problem)?;
    info!("plan is valid");
    info!(plan_length = plan.len());

    println!("Plan found:");
    println!("{}", plan);
    println!("Plan length: {}", plan.len());
    println!("Plan cost: {}", plan.cost(problem));
    Ok(())
}

fn play(
    layout: PathBuf,
    config: Option<AgentConfig>,
    max_turns: usize,
    seed: Option<u64>,
) -> Result<(), CliError> {
    let state = ChaseState::new(Layout::from_path(&layout)?);
    let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

    let record = match config {
        Some(config) => {
            let agent = config.build(&EvaluatorRegistry::standard())?;
            info!(agent = ?agent);
            domains::play(state, |state| agent.get_action(state), &mut rng, max_turns)
        }
        None => {
            let mut agent = ReflexAgent::new(StdRng::seed_from_u64(rng.gen()));
            domains::play(state, |state| agent.get_action(state), &mut rng, max_turns)
        }
    };

    println!("Outcome: {}", record.outcome);
    println!("Score: {}", record.score);
    println!("Turns: {}", record.turns);
    Ok(())
}
