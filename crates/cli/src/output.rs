use std::time::Duration;

use wisdom_shared::result::{BatchResult, EnsembleResult};

pub fn print_result(result: &EnsembleResult, elapsed: Duration) {
    println!("\n========================================");
    println!("  Trials:              {}", result.n_trials());
    println!("  Majority correct:    {}", result.n_correct());
    println!("  Time:                {:.2}s", elapsed.as_secs_f64());
    println!("  Collective accuracy: {:.2}%", result.mean_accuracy * 100.0);
    println!("========================================");
}

pub fn print_checkpoints(points: &[(usize, f64)]) {
    if points.is_empty() {
        return;
    }
    println!("\nConvergence:");
    for (trial, mean) in points {
        println!("  {:>8}  {:.4}", trial, mean);
    }
}

pub fn print_learner_stats(stats: &[(usize, f64)]) {
    println!("\nEmpirical learner accuracy:");
    for (learner, accuracy) in stats {
        println!("  learner {:>5}: {:.4}", learner, accuracy);
    }
}

pub fn print_sweep(result: &BatchResult, individual_accuracy: f64, elapsed: Duration) {
    println!("\n========================================");
    println!("  Runs:                {}", result.n_sims());
    println!("  Time:                {:.2}s", elapsed.as_secs_f64());
    println!("  Individual accuracy: {:.2}%", individual_accuracy * 100.0);
    println!("========================================");
    println!(
        "  {:>11}  {:>9}  {:>9}  {:>9}  {:>9}",
        "correlation", "mean", "min", "max", "std err"
    );
    for s in result.scenarios() {
        println!(
            "  {:>11.2}  {:>8.2}%  {:>8.2}%  {:>8.2}%  {:>9.4}",
            s.correlation_strength,
            s.mean_accuracy * 100.0,
            s.min_accuracy * 100.0,
            s.max_accuracy * 100.0,
            s.std_error,
        );
    }
}
