use rayon::prelude::*;
use tracing::info;

use wisdom_shared::config::{CorrelationSweep, SimulationConfig, SimulationParameters};
use wisdom_shared::result::{BatchResult, SimResult};

use crate::engine;

/// Runs every config on its own seeded generator across a rayon pool.
pub fn run_batch(configs: Vec<SimulationConfig>, n_workers: Option<usize>) -> anyhow::Result<BatchResult> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(n_workers.unwrap_or_else(|| rayon::current_num_threads().min(8)))
        .build()?;

    info!(configs = configs.len(), workers = pool.current_num_threads(), "running batch");

    let results: Result<Vec<SimResult>, _> = pool.install(|| {
        configs
            .par_iter()
            .map(|config| {
                engine::simulate_seeded(&config.params, config.seed).map(|result| SimResult {
                    seed: config.seed,
                    params: config.params,
                    mean_accuracy: result.mean_accuracy,
                })
            })
            .collect()
    });

    Ok(BatchResult::from_results(results?))
}

pub fn run_sweep(
    base: &SimulationParameters,
    sweep: &CorrelationSweep,
    n_workers: Option<usize>,
) -> anyhow::Result<BatchResult> {
    let configs = sweep.generate_configs(base);
    run_batch(configs, n_workers)
}
