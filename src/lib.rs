//! Multi-armed bandit simulation: reward sources, agent policies and the
//! learning loop that plays one against the other.

pub mod config;
pub mod errors;
pub mod policies;
pub mod record;
pub mod report;
pub mod simulation;
pub mod sources;

pub use errors::{ConfigurationError, PolicyError, RunError, SimulationError};
pub use policies::{AgentPolicy, ArmStats, PolicyStats, PolicyType};
pub use record::TrialRecord;
pub use report::SimulationReport;
pub use simulation::{LearningLoop, LoopState};
pub use sources::{RewardSource, SourceConfig};
