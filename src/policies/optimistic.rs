use super::arm::MeanArm;
use super::policy::{
    argmax, check_arm, check_num_arms, check_reward, AgentPolicy, PolicyStats,
};

use crate::errors::{ConfigurationError, PolicyError};

/// Purely greedy policy whose arms start from an inflated estimate backed by
/// one pseudo-pull each, so every arm gets tried before the estimates settle.
#[derive(Clone, Debug)]
pub struct OptimisticGreedy {
    arms: Vec<MeanArm>,
    initial_estimate: f64,
}

impl OptimisticGreedy {
    pub fn new(num_arms: usize, initial_estimate: f64) -> Result<Self, ConfigurationError> {
        check_num_arms(num_arms)?;
        if !initial_estimate.is_finite() {
            return Err(ConfigurationError::InvalidInitialEstimate(initial_estimate));
        }

        Ok(Self {
            arms: vec![MeanArm::new(initial_estimate, 1); num_arms],
            initial_estimate,
        })
    }

    pub fn initial_estimate(&self) -> f64 {
        self.initial_estimate
    }
}

impl AgentPolicy for OptimisticGreedy {
    fn name(&self) -> &'static str {
        "optimistic"
    }

    fn num_arms(&self) -> usize {
        self.arms.len()
    }

    fn select_arm(&mut self) -> Result<usize, PolicyError> {
        argmax(self.arms.iter().map(|arm| arm.estimate))
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::abs_diff_eq;
    use std::collections::HashSet;

    #[test]
    fn create_invalid() {
        assert!(OptimisticGreedy::new(0, 10.0).is_err());
        assert!(matches!(
            OptimisticGreedy::new(2, f64::NAN),
            Err(ConfigurationError::InvalidInitialEstimate(_))
        ));
    }

    #[test]
    fn initial_state() {
        let policy = OptimisticGreedy::new(3, 10.0).unwrap();
        policy.stats().arms.iter().for_each(|arm| {
            assert_eq!(arm.pulls, 0);
            assert_eq!(arm.estimate, 10.0);
        });
    }

    #[test]
    fn every_arm_tried_first() {
        let num_arms = 5;
        let mut policy = OptimisticGreedy::new(num_arms, 10.0).unwrap();

        let tried: HashSet<usize> = (0..num_arms)
            .map(|_| {
                let arm_id = policy.select_arm().unwrap();
                policy.update(arm_id, 1.0).unwrap();
                arm_id
            })
            .collect();

        assert_eq!(tried.len(), num_arms);
    }

    #[test]
    fn update_mixes_in_initial_estimate() {
        let mut policy = OptimisticGreedy::new(2, 10.0).unwrap();
        let rewards = [1.0, 0.0, 1.0];
        rewards.iter().for_each(|&r| policy.update(1, r).unwrap());

        // (10 + 1 + 0 + 1) / 4
        let stats = policy.stats();
        assert_eq!(stats.arms[1].pulls, 3);
        assert!(abs_diff_eq!(stats.arms[1].estimate, 3.0, epsilon = 1e-12));
        assert_eq!(stats.arms[0].estimate, 10.0);
    }

    #[test]
    fn update_rejects_non_finite() {
        let mut policy = OptimisticGreedy::new(2, 10.0).unwrap();
        assert!(matches!(
            policy.update(1, f64::NAN),
            Err(PolicyError::InvalidReward { arm_id: 1, .. })
        ));
        assert_eq!(policy.stats().arms[1].estimate, 10.0);
    }

    #[test]
    fn deterministic_choice() {
        let mut policy = OptimisticGreedy::new(3, 5.0).unwrap();
        policy.update(0, 1.0).unwrap();
        assert_eq!(policy.select_arm().ok(), Some(1));
        assert_eq!(policy.select_arm().ok(), Some(1));
    }
}
