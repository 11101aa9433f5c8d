mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use wisdom_shared::config::{
    SimulationParameters, DEFAULT_ACCURACY, DEFAULT_CORRELATION, DEFAULT_LEARNERS,
    DEFAULT_SIMULATIONS,
};

#[derive(Parser)]
#[command(name = "wisdom", about = "Collective accuracy of correlated majority votes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ParamArgs {
    /// Number of learners voting in each trial
    #[arg(long, default_value_t = DEFAULT_LEARNERS)]
    learners: u32,
    /// Number of simulated trials
    #[arg(long, default_value_t = DEFAULT_SIMULATIONS)]
    simulations: u32,
    /// Probability that a single learner is correct
    #[arg(long, default_value_t = DEFAULT_ACCURACY)]
    accuracy: f64,
    /// Correlation strength between consecutive learners, in [-1, 1]
    #[arg(long, default_value_t = DEFAULT_CORRELATION, allow_hyphen_values = true)]
    correlation: f64,
}

impl ParamArgs {
    fn to_params(&self) -> SimulationParameters {
        SimulationParameters::new(self.learners, self.simulations, self.accuracy, self.correlation)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run one simulation and report its convergence
    Run {
        #[command(flatten)]
        params: ParamArgs,
        /// Seed for the random source
        #[arg(long, default_value = "0")]
        seed: u64,
        /// Number of convergence checkpoints to print
        #[arg(long, default_value = "10")]
        checkpoints: usize,
        /// Write the full running mean as `trial,running_mean` CSV
        #[arg(long)]
        convergence_csv: Option<String>,
        /// Print the empirical accuracy of the first and last learner
        #[arg(long)]
        learner_stats: bool,
    },
    /// Run many seeds per correlation strength in parallel
    Sweep {
        #[command(flatten)]
        params: ParamArgs,
        /// Correlation strengths to compare
        #[arg(long, value_delimiter = ',', default_value = "-1,0,1", allow_hyphen_values = true)]
        correlations: Vec<f64>,
        /// Seeds per correlation strength
        #[arg(long, default_value = "8")]
        seeds: u32,
        /// First seed
        #[arg(long, default_value = "0")]
        seed_start: u64,
        /// Seed step between runs
        #[arg(long, default_value = "1")]
        seed_stride: u64,
        /// Number of parallel workers (0 = auto)
        #[arg(long, default_value = "0")]
        workers: usize,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            params,
            seed,
            checkpoints,
            convergence_csv,
            learner_stats,
        } => commands::run::run(
            &params.to_params(),
            seed,
            checkpoints,
            convergence_csv.as_deref(),
            learner_stats,
        ),
        Commands::Sweep {
            params,
            correlations,
            seeds,
            seed_start,
            seed_stride,
            workers,
        } => commands::sweep::run(
            &params.to_params(),
            correlations,
            seeds,
            seed_start,
            seed_stride,
            workers,
        ),
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("wisdom=info,wisdom_sim=info"));

    if std::env::var("WISDOM_LOG_JSON").is_ok() {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}
