use super::arm::MeanArm;
use super::policy::{check_arm, check_num_arms, check_reward, AgentPolicy, PolicyStats};
use super::rng::MaybeSeededRng;

use crate::errors::{ConfigurationError, PolicyError};

use rand::Rng;

/// Uniform exploration baseline. Estimates are tracked but never consulted.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    arms: Vec<MeanArm>,
    rng: MaybeSeededRng,
}

impl RandomPolicy {
    pub fn new(num_arms: usize, seed: Option<u64>) -> Result<Self, ConfigurationError> {
        check_num_arms(num_arms)?;

        Ok(Self {
            arms: vec![MeanArm::new(0.0, 0); num_arms],
            rng: MaybeSeededRng::new(seed),
        })
    }
}

impl AgentPolicy for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn num_arms(&self) -> usize {
        self.arms.len()
    }

    fn select_arm(&mut self) -> Result<usize, PolicyError> {
        Ok(self.rng.get_rng().random_range(0..self.arms.len()))
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

    const SEED: Option<u64> = Some(1234);

    #[test]
    fn create_without_arms() {
        assert!(matches!(
            RandomPolicy::new(0, SEED),
            Err(ConfigurationError::NoArms)
        ));
    }

    #[test]
    fn draw_in_range() {
        let mut policy = RandomPolicy::new(4, SEED).unwrap();
        for _ in 0..200 {
            assert!(policy.select_arm().unwrap() < 4);
        }
    }

    #[test]
    fn draw_covers_all_arms() {
        let mut policy = RandomPolicy::new(3, SEED).unwrap();
        let mut counts = [0usize; 3];
        for _ in 0..3000 {
            counts[policy.select_arm().unwrap()] += 1;
        }
        counts
            .iter()
            .for_each(|&count| assert!((count as f64 / 3000.0 - 1.0 / 3.0).abs() < 0.05));
    }

    #[test]
    fn update_tracks_mean() {
        let mut policy = RandomPolicy::new(2, SEED).unwrap();
        [1.0, 0.0, 0.0].iter().for_each(|&r| policy.update(1, r).unwrap());

        let stats = policy.stats();
        assert_eq!(stats.arms[0].pulls, 0);
        assert_eq!(stats.arms[1].pulls, 3);
        assert!(abs_diff_eq!(stats.arms[1].estimate, 1.0 / 3.0, epsilon = 1e-12));
    }

    #[test]
    fn update_out_of_range() {
        let mut policy = RandomPolicy::new(2, SEED).unwrap();
        assert!(matches!(
            policy.update(2, 1.0),
            Err(PolicyError::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            policy.update(0, f64::INFINITY),
            Err(PolicyError::InvalidReward { .. })
        ));
        assert_eq!(policy.stats().arms[0].pulls, 0);
    }
}
