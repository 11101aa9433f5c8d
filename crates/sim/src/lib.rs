pub mod convergence;
pub mod engine;
pub mod learners;
pub mod runner;

pub use convergence::{checkpoints, running_mean};
pub use engine::{simulate, simulate_detailed, simulate_seeded};
pub use learners::LearnerGrid;
