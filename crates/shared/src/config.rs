use crate::error::SimError;

// Defaults of the reference control panel
pub const DEFAULT_LEARNERS: u32 = 100;
pub const DEFAULT_SIMULATIONS: u32 = 25_000;
pub const DEFAULT_ACCURACY: f64 = 0.51;
pub const DEFAULT_CORRELATION: f64 = 0.0;

// Ranges the control panel offers; the engine itself accepts any accuracy in [0, 1]
pub const MIN_LEARNERS: u32 = 1;
pub const MAX_LEARNERS: u32 = 5_000;
pub const MIN_SIMULATIONS: u32 = 1;
pub const MAX_SIMULATIONS: u32 = 50_000;
pub const MIN_UI_ACCURACY: f64 = 0.1;
pub const MIN_CORRELATION: f64 = -1.0;
pub const MAX_CORRELATION: f64 = 1.0;

/// Largest learner grid the engine will allocate (5000 learners x 50000 trials).
pub const MAX_GRID_CELLS: u128 = MAX_LEARNERS as u128 * MAX_SIMULATIONS as u128;

/// The reference scenarios: perfectly anti-correlated, independent, perfectly correlated.
pub const REFERENCE_CORRELATIONS: [f64; 3] = [-1.0, 0.0, 1.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    pub num_learners: u32,
    pub num_simulations: u32,
    pub individual_accuracy: f64,
    pub correlation_strength: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            num_learners: DEFAULT_LEARNERS,
            num_simulations: DEFAULT_SIMULATIONS,
            individual_accuracy: DEFAULT_ACCURACY,
            correlation_strength: DEFAULT_CORRELATION,
        }
    }
}

impl SimulationParameters {
    pub fn new(
        num_learners: u32,
        num_simulations: u32,
        individual_accuracy: f64,
        correlation_strength: f64,
    ) -> Self {
        Self {
            num_learners,
            num_simulations,
            individual_accuracy,
            correlation_strength,
        }
    }

    /// Checks every field against its domain, then the size of the learner grid.
    /// Nothing is clamped: out-of-range values are rejected.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.num_learners < MIN_LEARNERS {
            return Err(SimError::invalid(
                "num_learners",
                format!("must be at least {MIN_LEARNERS}, got {}", self.num_learners),
            ));
        }
        if self.num_simulations < MIN_SIMULATIONS {
            return Err(SimError::invalid(
                "num_simulations",
                format!(
                    "must be at least {MIN_SIMULATIONS}, got {}",
                    self.num_simulations
                ),
            ));
        }
        if !(0.0..=1.0).contains(&self.individual_accuracy) {
            return Err(SimError::invalid(
                "individual_accuracy",
                format!("must lie in [0, 1], got {}", self.individual_accuracy),
            ));
        }
        if !(MIN_CORRELATION..=MAX_CORRELATION).contains(&self.correlation_strength) {
            return Err(SimError::invalid(
                "correlation_strength",
                format!("must lie in [-1, 1], got {}", self.correlation_strength),
            ));
        }

        let cells = self.grid_cells();
        if cells > MAX_GRID_CELLS {
            return Err(SimError::ResourceExhausted {
                cells,
                reason: format!("exceeds the limit of {MAX_GRID_CELLS}"),
            });
        }
        Ok(())
    }

    /// Strict majority: more than half of the learners must be correct.
    #[inline]
    pub fn majority_threshold(&self) -> u32 {
        self.num_learners / 2 + 1
    }

    #[inline]
    pub fn grid_cells(&self) -> u128 {
        self.num_learners as u128 * self.num_simulations as u128
    }

    /// Whether the parameters sit inside the ranges the control panel offers.
    pub fn within_ui_ranges(&self) -> bool {
        (MIN_LEARNERS..=MAX_LEARNERS).contains(&self.num_learners)
            && (MIN_SIMULATIONS..=MAX_SIMULATIONS).contains(&self.num_simulations)
            && (MIN_UI_ACCURACY..=1.0).contains(&self.individual_accuracy)
            && (MIN_CORRELATION..=MAX_CORRELATION).contains(&self.correlation_strength)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub params: SimulationParameters,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            params: SimulationParameters::default(),
            seed: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CorrelationSweep {
    pub correlations: Vec<f64>,
    pub seeds_per_point: u32,
    pub seed_start: u64,
    pub seed_stride: u64,
}

impl Default for CorrelationSweep {
    fn default() -> Self {
        Self {
            correlations: REFERENCE_CORRELATIONS.to_vec(),
            seeds_per_point: 8,
            seed_start: 0,
            seed_stride: 1,
        }
    }
}

impl CorrelationSweep {
    pub fn apply(&self, base: &SimulationParameters, correlation: f64, i: u32) -> SimulationConfig {
        SimulationConfig {
            params: SimulationParameters {
                correlation_strength: correlation,
                ..*base
            },
            seed: self
                .seed_start
                .wrapping_add((i as u64).wrapping_mul(self.seed_stride)),
        }
    }

    /// One config per (correlation, seed index), correlations in the order given.
    /// Every correlation point reuses the same seed sequence.
    pub fn generate_configs(&self, base: &SimulationParameters) -> Vec<SimulationConfig> {
        self.correlations
            .iter()
            .flat_map(|&c| (0..self.seeds_per_point).map(move |i| self.apply(base, c, i)))
            .collect()
    }
}
