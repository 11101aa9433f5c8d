use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use tracing::debug;
use wisdom_shared::config::SimulationParameters;
use wisdom_shared::error::SimError;
use wisdom_shared::result::EnsembleResult;

use crate::learners::LearnerGrid;

/// Estimate the collective accuracy of a strict-majority vote.
///
/// Parameters are validated before anything is allocated or drawn. The grid is
/// dropped once the per-trial verdicts are taken.
pub fn simulate<R: Rng + ?Sized>(
    params: &SimulationParameters,
    rng: &mut R,
) -> Result<EnsembleResult, SimError> {
    simulate_detailed(params, rng).map(|(result, _)| result)
}

/// Like [`simulate`], but hands back the learner grid the verdicts came from.
pub fn simulate_detailed<R: Rng + ?Sized>(
    params: &SimulationParameters,
    rng: &mut R,
) -> Result<(EnsembleResult, LearnerGrid), SimError> {
    let grid = LearnerGrid::generate(params, rng)?;
    let threshold = params.majority_threshold();
    let result = EnsembleResult::from_outcomes(grid.majority(threshold));

    debug!(
        learners = params.num_learners,
        simulations = params.num_simulations,
        accuracy = params.individual_accuracy,
        correlation = params.correlation_strength,
        threshold,
        mean_accuracy = result.mean_accuracy,
        "ensemble simulated"
    );
    Ok((result, grid))
}

/// Same as [`simulate`] with a fresh `Pcg64` seeded from `seed`.
pub fn simulate_seeded(
    params: &SimulationParameters,
    seed: u64,
) -> Result<EnsembleResult, SimError> {
    let mut rng = Pcg64::seed_from_u64(seed);
    simulate(params, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_distr::{Bernoulli, Distribution};

    #[test]
    fn same_seed_same_result() {
        let params = SimulationParameters::new(15, 2_000, 0.55, 0.4);
        let a = simulate_seeded(&params, 42).unwrap();
        let b = simulate_seeded(&params, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn single_learner_reproduces_raw_draws() {
        for &strength in &[-1.0, -0.3, 0.0, 0.8, 1.0] {
            let params = SimulationParameters::new(1, 5_000, 0.65, strength);
            let result = simulate_seeded(&params, 17).unwrap();

            let mut rng = Pcg64::seed_from_u64(17);
            let bernoulli = Bernoulli::new(0.65).unwrap();
            let raw: Vec<bool> = (0..5_000).map(|_| bernoulli.sample(&mut rng)).collect();
            assert_eq!(result.outcomes, raw, "strength {strength}");
        }
    }

    #[test]
    fn two_anticorrelated_learners_never_agree_on_majority() {
        let params = SimulationParameters::new(2, 1_000, 0.7, -1.0);
        let result = simulate_seeded(&params, 5).unwrap();
        assert!(result.outcomes.iter().all(|&o| !o));
        assert_eq!(result.mean_accuracy, 0.0);
    }

    #[test]
    fn odd_anticorrelated_chain_follows_first_learner() {
        // Learners alternate, so with 3 of them the majority is learner 0's side.
        let params = SimulationParameters::new(3, 1_000, 0.6, -1.0);
        let mut rng = Pcg64::seed_from_u64(21);
        let (result, grid) = simulate_detailed(&params, &mut rng).unwrap();
        assert_eq!(result.outcomes, grid.column(0));
        assert_eq!(result, simulate_seeded(&params, 21).unwrap());
    }

    #[test]
    fn full_accuracy_with_negative_strength_alternates() {
        // prev correct: -0.5 + 0.866 < 1; prev wrong: 0.5 + 0.866 clips to 1.
        let params = SimulationParameters::new(4, 200, 1.0, -0.5);
        let mut rng = Pcg64::seed_from_u64(2);
        let grid = LearnerGrid::generate(&params, &mut rng).unwrap();
        for learner in 0..4 {
            let expected = learner % 2 == 0;
            assert!(grid.column(learner).iter().all(|&c| c == expected), "learner {learner}");
        }

        let result = simulate_seeded(&params, 2).unwrap();
        assert_eq!(result.mean_accuracy, 0.0);
    }

    #[test]
    fn invalid_parameters_fail_fast() {
        let bad = [
            SimulationParameters::new(5, 10, 1.5, 0.0),
            SimulationParameters::new(5, 10, 0.6, -2.0),
            SimulationParameters::new(0, 10, 0.6, 0.0),
        ];
        for params in &bad {
            let err = simulate_seeded(params, 0).unwrap_err();
            assert!(err.is_invalid_parameter(), "{params:?}: {err}");
        }
    }
}
