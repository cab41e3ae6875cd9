use crate::policies::ArmStats;

use serde::Serialize;
use uuid::Uuid;

/// Final snapshot of a completed run, handed to reporting and plotting.
#[derive(Clone, Debug, Serialize)]
pub struct SimulationReport {
    pub run_id: Uuid,
    pub agent: String,
    pub trials: usize,
    pub total_reward: f64,
    pub win_rate: f64,
    pub best_expected_reward: f64,
    pub arms: Vec<ArmStats>,
}
