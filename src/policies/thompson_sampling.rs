use super::arm::ArmStats;
use super::policy::{
    argmax, check_arm, check_num_arms, check_reward, AgentPolicy, PolicyStats,
};
use super::rng::MaybeSeededRng;

use crate::errors::{ConfigurationError, PolicyError};

use rand::Rng;
use rand_distr::{Beta, Distribution, Normal};

#[derive(Clone, Debug)]
struct BetaArm {
    alpha: f64,
    beta: f64,
    pulls: u64,
}

impl Default for BetaArm {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
            pulls: 0,
        }
    }
}

impl BetaArm {
    fn mean(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, PolicyError> {
        let s = Beta::new(self.alpha, self.beta)
            .map_err(|e| PolicyError::SamplingError(e.to_string()))?
            .sample(rng);

        Ok(s)
    }

    fn update(&mut self, reward: f64) {
        self.alpha += reward;
        self.beta += 1.0 - reward;
        self.pulls += 1;
    }

    fn stats(&self) -> ArmStats {
        ArmStats {
            pulls: self.pulls,
            estimate: self.mean(),
        }
    }
}

/// Thompson sampling over Bernoulli rewards with a uniform Beta(1, 1) prior.
#[derive(Clone, Debug)]
pub struct BetaThompsonSampling {
    arms: Vec<BetaArm>,
    rng: MaybeSeededRng,
}

impl BetaThompsonSampling {
    pub fn new(num_arms: usize, seed: Option<u64>) -> Result<Self, ConfigurationError> {
        check_num_arms(num_arms)?;

        Ok(Self {
            arms: vec![BetaArm::default(); num_arms],
            rng: MaybeSeededRng::new(seed),
        })
    }

    /// Posterior shape parameters `(alpha, beta)` of an arm.
    pub fn posterior(&self, arm_id: usize) -> Result<(f64, f64), PolicyError> {
        check_arm(arm_id, self.arms.len())?;
        let arm = &self.arms[arm_id];
        Ok((arm.alpha, arm.beta))
    }
}

impl AgentPolicy for BetaThompsonSampling {
    fn name(&self) -> &'static str {
        "beta_thompson"
    }

    fn num_arms(&self) -> usize {
        self.arms.len()
    }

    fn select_arm(&mut self) -> Result<usize, PolicyError> {
        let rng = self.rng.get_rng();
        let samples = self
            .arms
            .iter()
            .map(|arm| arm.sample(rng))
            .collect::<Result<Vec<f64>, PolicyError>>()?;

        argmax(samples)
    }

    fn update(&mut self, arm_id: usize, reward: f64) -> Result<(), PolicyError> {
        check_arm(arm_id, self.arms.len())?;
        if !(0.0..=1.0).contains(&reward) {
            return Err(PolicyError::InvalidReward { arm_id, reward });
        }
        self.arms[arm_id].update(reward);
        Ok(())
    }

    fn stats(&self) -> PolicyStats {
        PolicyStats {
            arms: self.arms.iter().map(BetaArm::stats).collect(),
        }
    }

    fn requires_binary_rewards(&self) -> bool {
        true
    }
}

#[derive(Clone, Debug)]
struct NormalArm {
    mean: f64,
    precision: f64,
    pulls: u64,
}

impl Default for NormalArm {
    fn default() -> Self {
        Self {
            mean: 1.0,
            precision: 1.0,
            pulls: 0,
        }
    }
}

impl NormalArm {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, PolicyError> {
        let s = Normal::new(self.mean, (1.0 / self.precision).sqrt())
            .map_err(|e| PolicyError::SamplingError(e.to_string()))?
            .sample(rng);

        Ok(s)
    }

    // conjugate update for a unit-precision likelihood
    fn update(&mut self, reward: f64) {
        self.mean = (reward + self.precision * self.mean) / (self.precision + 1.0);
        self.precision += 1.0;
        self.pulls += 1;
    }

    fn stats(&self) -> ArmStats {
        ArmStats {
            pulls: self.pulls,
            estimate: self.mean,
        }
    }
}

/// Thompson sampling over Gaussian rewards of unknown mean and unit precision.
#[derive(Clone, Debug)]
pub struct GaussianThompsonSampling {
    arms: Vec<NormalArm>,
    rng: MaybeSeededRng,
}

impl GaussianThompsonSampling {
    pub fn new(num_arms: usize, seed: Option<u64>) -> Result<Self, ConfigurationError> {
        check_num_arms(num_arms)?;

        Ok(Self {
            arms: vec![NormalArm::default(); num_arms],
            rng: MaybeSeededRng::new(seed),
        })
    }

    /// Posterior `(mean, precision)` of an arm.
    pub fn posterior(&self, arm_id: usize) -> Result<(f64, f64), PolicyError> {
        check_arm(arm_id, self.arms.len())?;
        let arm = &self.arms[arm_id];
        Ok((arm.mean, arm.precision))
    }
}

impl AgentPolicy for GaussianThompsonSampling {
    fn name(&self) -> &'static str {
        "gaussian_thompson"
    }

    fn num_arms(&self) -> usize {
        self.arms.len()
    }

    fn select_arm(&mut self) -> Result<usize, PolicyError> {
        let rng = self.rng.get_rng();
        let samples = self
            .arms
            .iter()
            .map(|arm| arm.sample(rng))
            .collect::<Result<Vec<f64>, PolicyError>>()?;

        argmax(samples)
    }

    fn update(&mut self, arm_id: usize, reward: f64) -> Result<(), PolicyError> {
        check_arm(arm_id, self.arms.len())?;
        check_reward(arm_id, reward)?;
        self.arms[arm_id].update(reward);
        Ok(())
    }

    fn stats(&self) -> PolicyStats {
        PolicyStats {
            arms: self.arms.iter().map(NormalArm::stats).collect(),
        }
    }
}
