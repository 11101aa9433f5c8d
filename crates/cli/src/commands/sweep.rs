use wisdom_shared::config::{CorrelationSweep, SimulationParameters};
use wisdom_sim::runner;

use crate::output;

pub fn run(
    base: &SimulationParameters,
    correlations: Vec<f64>,
    seeds: u32,
    seed_start: u64,
    seed_stride: u64,
    workers: usize,
) -> anyhow::Result<()> {
    if seeds == 0 {
        anyhow::bail!("--seeds must be at least 1");
    }
    let n_workers = if workers == 0 { None } else { Some(workers) };
    let sweep = CorrelationSweep {
        correlations,
        seeds_per_point: seeds,
        seed_start,
        seed_stride,
    };

    println!(
        "Sweeping {} correlation strengths x {} seeds ({} learners, {} trials each)...",
        sweep.correlations.len(),
        seeds,
        base.num_learners,
        base.num_simulations,
    );

    let start = std::time::Instant::now();
    let result = runner::run_sweep(base, &sweep, n_workers)?;
    let elapsed = start.elapsed();

    output::print_sweep(&result, base.individual_accuracy, elapsed);
    Ok(())
}
