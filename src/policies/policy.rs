use super::arm::ArmStats;
use super::epsilon_greedy::EpsilonGreedy;
use super::optimistic::OptimisticGreedy;
use super::random::RandomPolicy;
use super::thompson_sampling::{BetaThompsonSampling, GaussianThompsonSampling};
use super::ucb::Ucb;

use crate::errors::{ConfigurationError, PolicyError};

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize)]
pub struct PolicyStats {
    pub arms: Vec<ArmStats>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PolicyType {
    Random {
        #[serde(default)]
        seed: Option<u64>,
    },
    EpsilonGreedy {
        epsilon: f64,
        #[serde(default)]
        seed: Option<u64>,
    },
    Optimistic {
        initial_estimate: f64,
    },
    Ucb,
    BetaThompson {
        #[serde(default)]
        seed: Option<u64>,
    },
    GaussianThompson {
        #[serde(default)]
        seed: Option<u64>,
    },
}

impl PolicyType {
    /// Builds the policy for `num_arms` arms. Policies without their own seed
    /// fall back to `default_seed`.
    pub fn build(
        self,
        num_arms: usize,
        default_seed: Option<u64>,
    ) -> Result<Box<dyn AgentPolicy>, ConfigurationError> {
        let policy: Box<dyn AgentPolicy> = match self {
            PolicyType::Random { seed } => {
                Box::new(RandomPolicy::new(num_arms, seed.or(default_seed))?)
            }
            PolicyType::EpsilonGreedy { epsilon, seed } => Box::new(EpsilonGreedy::new(
                num_arms,
                epsilon,
                seed.or(default_seed),
            )?),
            PolicyType::Optimistic { initial_estimate } => {
                Box::new(OptimisticGreedy::new(num_arms, initial_estimate)?)
            }
            PolicyType::Ucb => Box::new(Ucb::new(num_arms)?),
            PolicyType::BetaThompson { seed } => {
                Box::new(BetaThompsonSampling::new(num_arms, seed.or(default_seed))?)
            }
            PolicyType::GaussianThompson { seed } => Box::new(GaussianThompsonSampling::new(
                num_arms,
                seed.or(default_seed),
            )?),
        };

        Ok(policy)
    }
}

pub trait AgentPolicy: Send {
    fn name(&self) -> &'static str;
    fn num_arms(&self) -> usize;
    fn select_arm(&mut self) -> Result<usize, PolicyError>;
    fn update(&mut self, arm_id: usize, reward: f64) -> Result<(), PolicyError>;
    fn stats(&self) -> PolicyStats;

    /// Whether the policy's likelihood only admits outcomes in [0, 1].
    fn requires_binary_rewards(&self) -> bool {
        false
    }
}

impl<P: AgentPolicy + ?Sized> AgentPolicy for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn num_arms(&self) -> usize {
        (**self).num_arms()
    }

    fn select_arm(&mut self) -> Result<usize, PolicyError> {
        (**self).select_arm()
    }

    fn update(&mut self, arm_id: usize, reward: f64) -> Result<(), PolicyError> {
        (**self).update(arm_id, reward)
    }

    fn stats(&self) -> PolicyStats {
        (**self).stats()
    }

    fn requires_binary_rewards(&self) -> bool {
        (**self).requires_binary_rewards()
    }
}

pub(super) fn check_num_arms(num_arms: usize) -> Result<(), ConfigurationError> {
    if num_arms == 0 {
        Err(ConfigurationError::NoArms)
    } else {
        Ok(())
    }
}

pub(super) fn check_arm(arm_id: usize, num_arms: usize) -> Result<(), PolicyError> {
    if arm_id < num_arms {
        Ok(())
    } else {
        Err(PolicyError::IndexOutOfRange { arm_id, num_arms })
    }
}

pub(super) fn check_reward(arm_id: usize, reward: f64) -> Result<(), PolicyError> {
    if reward.is_finite() {
        Ok(())
    } else {
        Err(PolicyError::InvalidReward { arm_id, reward })
    }
}

// lowest index wins ties, a NaN is kept only until any number shows up
pub(super) fn argmax<I: IntoIterator<Item = f64>>(values: I) -> Result<usize, PolicyError> {
    values
        .into_iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (arm_id, value)| match best {
            Some((_, best_value)) if best_value >= value || value.is_nan() => best,
            _ => Some((arm_id, value)),
        })
        .map(|(arm_id, _)| arm_id)
        .ok_or(PolicyError::InvalidConfiguration(ConfigurationError::NoArms))
}
