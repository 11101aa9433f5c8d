use rand::Rng;
use rand_distr::{Bernoulli, Distribution};
use wisdom_shared::config::SimulationParameters;
use wisdom_shared::error::SimError;

/// Correct/incorrect outcome of every learner in every trial.
///
/// Stored column-major: all trials of learner 0, then all trials of learner 1, ...
/// which is also the order the random draws are consumed in.
#[derive(Debug, Clone)]
pub struct LearnerGrid {
    n_trials: usize,
    n_learners: usize,
    cells: Vec<bool>,
}

impl LearnerGrid {
    /// Draws learner 0 as Bernoulli(accuracy) per trial, then chains every further
    /// learner to its predecessor:
    ///
    /// ```text
    /// blended = c * (2 * prev - 1) + sqrt(1 - c^2) * fresh      fresh ~ Bernoulli(accuracy) in {0, 1}
    /// correct = clamp(blended, 0, 1) >= accuracy
    /// ```
    ///
    /// The chain keeps learner 0's marginal but drifts for later learners when
    /// `0 < |c| < 1`. At `c = 1` every learner copies learner 0; at `c = -1` they alternate.
    pub fn generate<R: Rng + ?Sized>(
        params: &SimulationParameters,
        rng: &mut R,
    ) -> Result<Self, SimError> {
        params.validate()?;

        let n_trials = params.num_simulations as usize;
        let n_learners = params.num_learners as usize;
        let accuracy = params.individual_accuracy;
        let strength = params.correlation_strength;

        let bernoulli = Bernoulli::new(accuracy)
            .map_err(|e| SimError::invalid("individual_accuracy", e.to_string()))?;

        let n_cells = n_trials * n_learners;
        let mut cells: Vec<bool> = Vec::new();
        cells
            .try_reserve_exact(n_cells)
            .map_err(|e| SimError::ResourceExhausted {
                cells: n_cells as u128,
                reason: e.to_string(),
            })?;

        for _ in 0..n_trials {
            cells.push(bernoulli.sample(rng));
        }

        let noise_weight = (1.0 - strength * strength).sqrt();
        for learner in 1..n_learners {
            let prev_start = (learner - 1) * n_trials;
            for trial in 0..n_trials {
                let prev: f64 = if cells[prev_start + trial] { 1.0 } else { -1.0 };
                let fresh: f64 = if bernoulli.sample(rng) { 1.0 } else { 0.0 };
                let blended: f64 = strength * prev + noise_weight * fresh;
                cells.push(blended.clamp(0.0, 1.0) >= accuracy);
            }
        }

        Ok(Self {
            n_trials,
            n_learners,
            cells,
        })
    }

    #[inline]
    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    #[inline]
    pub fn n_learners(&self) -> usize {
        self.n_learners
    }

    #[inline]
    pub fn get(&self, trial: usize, learner: usize) -> bool {
        self.cells[learner * self.n_trials + trial]
    }

    /// Every trial's outcome for one learner.
    pub fn column(&self, learner: usize) -> &[bool] {
        let start = learner * self.n_trials;
        &self.cells[start..start + self.n_trials]
    }

    /// Number of correct learners per trial.
    pub fn correct_counts(&self) -> Vec<u32> {
        let mut counts = vec![0u32; self.n_trials];
        for column in self.cells.chunks_exact(self.n_trials) {
            for (count, &correct) in counts.iter_mut().zip(column) {
                *count += correct as u32;
            }
        }
        counts
    }

    /// Per-trial strict-majority verdict.
    pub fn majority(&self, threshold: u32) -> Vec<bool> {
        self.correct_counts()
            .into_iter()
            .map(|count| count >= threshold)
            .collect()
    }

    /// Empirical accuracy of one learner across all trials.
    pub fn learner_accuracy(&self, learner: usize) -> f64 {
        wisdom_shared::result::mean_of(self.column(learner))
    }
}
