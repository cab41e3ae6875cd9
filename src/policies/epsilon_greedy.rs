use super::arm::MeanArm;
use super::policy::{
    argmax, check_arm, check_num_arms, check_reward, AgentPolicy, PolicyStats,
};
use super::rng::MaybeSeededRng;

use crate::errors::{ConfigurationError, PolicyError};

use rand::{seq::IndexedRandom, Rng};

#[derive(Clone, Debug)]
pub struct EpsilonGreedy {
    arms: Vec<MeanArm>,
    epsilon: f64,
    rng: MaybeSeededRng,
}

impl EpsilonGreedy {
    pub fn new(num_arms: usize, epsilon: f64, seed: Option<u64>) -> Result<Self, ConfigurationError> {
        check_num_arms(num_arms)?;
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(ConfigurationError::InvalidEpsilon(epsilon));
        }

        Ok(Self {
            arms: vec![MeanArm::new(0.0, 0); num_arms],
            epsilon,
            rng: MaybeSeededRng::new(seed),
        })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    fn nothing_pulled(&self) -> bool {
        self.arms.iter().all(|arm| arm.pulls == 0)
    }

    // a unique best arm costs no draw, ties are broken uniformly
    fn greedy_arm(&mut self) -> Result<usize, PolicyError> {
        let best = argmax(self.arms.iter().map(|arm| arm.estimate))?;
        let top = self.arms[best].estimate;
        let tied: Vec<usize> = (0..self.arms.len())
            .filter(|&arm_id| self.arms[arm_id].estimate == top)
            .collect();

        if tied.len() > 1 {
            Ok(*tied.choose(self.rng.get_rng()).unwrap_or(&best))
        } else {
            Ok(best)
        }
    }
}

impl AgentPolicy for EpsilonGreedy {
    fn name(&self) -> &'static str {
        "epsilon_greedy"
    }

    fn num_arms(&self) -> usize {
        self.arms.len()
    }

    fn select_arm(&mut self) -> Result<usize, PolicyError> {
        // no draw is spent on the coin flip when epsilon is zero
        let explore = self.nothing_pulled()
            || (self.epsilon > 0.0 && self.rng.get_rng().random::<f64>() < self.epsilon);

        if explore {
            Ok(self.rng.get_rng().random_range(0..self.arms.len()))
        } else {
            self.greedy_arm()
        }
    }

    fn update(&mut self, arm_id: usize, reward: f64) -> Result<(), PolicyError> {
        check_arm(arm_id, self.arms.len())?;
        check_reward(arm_id, reward)?;
        self.arms[arm_id].update(reward);
        Ok(())
    }

    fn stats(&self) -> PolicyStats {
        PolicyStats {
            arms: self.arms.iter().map(MeanArm::stats).collect(),
        }
    }
}
