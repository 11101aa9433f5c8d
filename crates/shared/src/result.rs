use crate::config::SimulationParameters;

/// Outcome of one simulation call: the per-trial majority verdicts and their mean.
#[derive(Debug, Clone, PartialEq)]
pub struct EnsembleResult {
    pub mean_accuracy: f64,
    pub outcomes: Vec<bool>,
}

impl EnsembleResult {
    pub fn from_outcomes(outcomes: Vec<bool>) -> Self {
        Self {
            mean_accuracy: mean_of(&outcomes),
            outcomes,
        }
    }

    pub fn n_trials(&self) -> usize {
        self.outcomes.len()
    }

    pub fn n_correct(&self) -> usize {
        self.outcomes.iter().filter(|&&o| o).count()
    }
}

/// Fraction of `true` values; 0.0 for an empty slice.
pub fn mean_of(outcomes: &[bool]) -> f64 {
    if outcomes.is_empty() {
        return 0.0;
    }
    outcomes.iter().filter(|&&o| o).count() as f64 / outcomes.len() as f64
}

/// Summary of one seeded run inside a batch.
#[derive(Debug, Clone)]
pub struct SimResult {
    pub seed: u64,
    pub params: SimulationParameters,
    pub mean_accuracy: f64,
}

#[derive(Debug, Clone)]
pub struct ScenarioSummary {
    pub correlation_strength: f64,
    pub n_sims: usize,
    pub mean_accuracy: f64,
    pub min_accuracy: f64,
    pub max_accuracy: f64,
    pub std_error: f64,
}

#[derive(Debug, Clone)]
pub struct BatchResult {
    pub results: Vec<SimResult>,
    pub total_accuracy: f64,
}

impl BatchResult {
    pub fn from_results(results: Vec<SimResult>) -> Self {
        let total_accuracy = results.iter().map(|r| r.mean_accuracy).sum();
        Self {
            results,
            total_accuracy,
        }
    }

    pub fn n_sims(&self) -> usize {
        self.results.len()
    }

    pub fn avg_accuracy(&self) -> f64 {
        if self.results.is_empty() {
            0.0
        } else {
            self.total_accuracy / self.results.len() as f64
        }
    }

    /// Groups results by correlation strength, in order of first appearance.
    pub fn scenarios(&self) -> Vec<ScenarioSummary> {
        let mut order: Vec<f64> = Vec::new();
        for r in &self.results {
            let c = r.params.correlation_strength;
            if !order.iter().any(|&seen| seen == c) {
                order.push(c);
            }
        }

        order
            .into_iter()
            .map(|c| {
                let values: Vec<f64> = self
                    .results
                    .iter()
                    .filter(|r| r.params.correlation_strength == c)
                    .map(|r| r.mean_accuracy)
                    .collect();
                summarize(c, &values)
            })
            .collect()
    }
}

fn summarize(correlation_strength: f64, values: &[f64]) -> ScenarioSummary {
    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // Sample standard deviation over sqrt(n); a single run has no spread to report.
    let std_error = if n > 1 {
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        (var / n as f64).sqrt()
    } else {
        0.0
    };
    ScenarioSummary {
        correlation_strength,
        n_sims: n,
        mean_accuracy: mean,
        min_accuracy: min,
        max_accuracy: max,
        std_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim(seed: u64, correlation: f64, mean_accuracy: f64) -> SimResult {
        SimResult {
            seed,
            params: SimulationParameters {
                correlation_strength: correlation,
                ..SimulationParameters::default()
            },
            mean_accuracy,
        }
    }

    #[test]
    fn mean_matches_counts() {
        let result = EnsembleResult::from_outcomes(vec![true, false, true, true]);
        assert_eq!(result.n_trials(), 4);
        assert_eq!(result.n_correct(), 3);
        assert_eq!(result.mean_accuracy, 0.75);
        assert_eq!(mean_of(&[]), 0.0);
    }

    #[test]
    fn batch_groups_by_correlation() {
        let batch = BatchResult::from_results(vec![
            sim(0, 1.0, 0.5),
            sim(0, -1.0, 0.0),
            sim(1, 1.0, 0.7),
            sim(1, -1.0, 0.0),
        ]);
        assert_eq!(batch.n_sims(), 4);
        assert!((batch.avg_accuracy() - 0.3).abs() < 1e-12);

        let scenarios = batch.scenarios();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].correlation_strength, 1.0);
        assert_eq!(scenarios[0].n_sims, 2);
        assert!((scenarios[0].mean_accuracy - 0.6).abs() < 1e-12);
        assert_eq!(scenarios[0].min_accuracy, 0.5);
        assert_eq!(scenarios[0].max_accuracy, 0.7);
        assert!((scenarios[0].std_error - 0.1).abs() < 1e-12);
        assert_eq!(scenarios[1].std_error, 0.0);
    }

    #[test]
    fn empty_batch_averages_to_zero() {
        let batch = BatchResult::from_results(Vec::new());
        assert_eq!(batch.avg_accuracy(), 0.0);
        assert!(batch.scenarios().is_empty());
    }
}
