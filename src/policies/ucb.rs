use super::arm::ArmStats;
use super::policy::{
    argmax, check_arm, check_num_arms, check_reward, AgentPolicy, PolicyStats,
};

use crate::errors::{ConfigurationError, PolicyError};

/// UCB1 exploration term for an arm pulled `count` times out of `total_count`.
pub fn confidence_bonus(total_count: u64, count: u64) -> f64 {
    (2.0 * (total_count as f64).ln() / count as f64).sqrt()
}

#[derive(Clone, Debug)]
struct UcbArm {
    mean: f64,
    pulls: u64,
    bonus: f64,
}

impl UcbArm {
    fn new(num_arms: usize) -> Self {
        Self {
            mean: 0.0,
            pulls: 0,
            bonus: confidence_bonus(num_arms as u64, 1),
        }
    }

    // the forced initial pull counts towards n_i, keeping ln(N) and 1/n_i defined
    fn count(&self) -> u64 {
        self.pulls + 1
    }

    fn upper_bound(&self) -> f64 {
        self.mean + self.bonus
    }

    fn update(&mut self, reward: f64) {
        self.pulls += 1;
        self.mean += (reward - self.mean) / self.count() as f64;
    }

    fn stats(&self) -> ArmStats {
        ArmStats {
            pulls: self.pulls,
            estimate: self.upper_bound(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Ucb {
    arms: Vec<UcbArm>,
}

impl Ucb {
    pub fn new(num_arms: usize) -> Result<Self, ConfigurationError> {
        check_num_arms(num_arms)?;

        Ok(Self {
            arms: vec![UcbArm::new(num_arms); num_arms],
        })
    }

    fn total_count(&self) -> u64 {
        self.arms.iter().map(UcbArm::count).sum()
    }

    pub fn mean(&self, arm_id: usize) -> Result<f64, PolicyError> {
        check_arm(arm_id, self.arms.len())?;
        Ok(self.arms[arm_id].mean)
    }

    pub fn bonus(&self, arm_id: usize) -> Result<f64, PolicyError> {
        check_arm(arm_id, self.arms.len())?;
        Ok(self.arms[arm_id].bonus)
    }

    pub fn upper_bound(&self, arm_id: usize) -> Result<f64, PolicyError> {
        check_arm(arm_id, self.arms.len())?;
        Ok(self.arms[arm_id].upper_bound())
    }
}

impl AgentPolicy for Ucb {
    fn name(&self) -> &'static str {
        "ucb"
    }

    fn num_arms(&self) -> usize {
        self.arms.len()
    }

    fn select_arm(&mut self) -> Result<usize, PolicyError> {
        argmax(self.arms.iter().map(UcbArm::upper_bound))
    }

    fn update(&mut self, arm_id: usize, reward: f64) -> Result<(), PolicyError> {
        check_arm(arm_id, self.arms.len())?;
        check_reward(arm_id, reward)?;
        self.arms[arm_id].update(reward);

        // N grew, so every arm's bonus moves, not only the pulled one
        let total_count = self.total_count();
        self.arms
            .iter_mut()
            .for_each(|arm| arm.bonus = confidence_bonus(total_count, arm.count()));

        Ok(())
    }

    fn stats(&self) -> PolicyStats {
        PolicyStats {
            arms: self.arms.iter().map(UcbArm::stats).collect(),
        }
    }
}
