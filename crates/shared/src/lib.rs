pub mod config;
pub mod error;
pub mod result;

pub use config::{CorrelationSweep, SimulationConfig, SimulationParameters};
pub use error::SimError;
pub use result::{BatchResult, EnsembleResult, ScenarioSummary, SimResult};
