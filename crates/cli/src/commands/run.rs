use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::Context;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use tracing::info;
use wisdom_shared::config::SimulationParameters;
use wisdom_sim::{convergence, engine};

use crate::output;

pub fn run(
    params: &SimulationParameters,
    seed: u64,
    n_checkpoints: usize,
    convergence_csv: Option<&str>,
    learner_stats: bool,
) -> anyhow::Result<()> {
    if !params.within_ui_ranges() {
        tracing::warn!(?params, "parameters fall outside the reference control ranges");
    }

    println!(
        "Simulating {} learners over {} trials (accuracy {:.2}, correlation {:.2})...",
        params.num_learners,
        params.num_simulations,
        params.individual_accuracy,
        params.correlation_strength,
    );

    let start = std::time::Instant::now();
    let mut rng = Pcg64::seed_from_u64(seed);
    let (result, grid) = engine::simulate_detailed(params, &mut rng)?;
    let elapsed = start.elapsed();
    info!(seed, elapsed_ms = elapsed.as_millis() as u64, "simulation finished");

    let running = convergence::running_mean(&result.outcomes);
    output::print_result(&result, elapsed);
    output::print_checkpoints(&convergence::checkpoints(&running, n_checkpoints));

    if learner_stats {
        let mut stats = vec![(0, grid.learner_accuracy(0))];
        let last = grid.n_learners() - 1;
        if last > 0 {
            stats.push((last, grid.learner_accuracy(last)));
        }
        output::print_learner_stats(&stats);
    }
    drop(grid);

    if let Some(path) = convergence_csv {
        write_convergence_csv(path, &running)
            .with_context(|| format!("Failed to write convergence CSV to {}", path))?;
        println!("Convergence written to {}", path);
    }
    Ok(())
}

fn write_convergence_csv(path: &str, running: &[f64]) -> anyhow::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "trial,running_mean")?;
    for (i, mean) in running.iter().enumerate() {
        writeln!(out, "{},{}", i + 1, mean)?;
    }
    out.flush()?;
    Ok(())
}
