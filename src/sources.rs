use crate::errors::ConfigurationError;

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceConfig {
    Bernoulli { probability: f64 },
    Gaussian { mean: f64, std_dev: f64 },
}

/// A slot machine with fixed payout parameters. Pulls never alter it.
#[derive(Clone, Debug)]
pub enum RewardSource {
    Bernoulli { probability: f64 },
    Gaussian { mean: f64, normal: Normal<f64> },
}

impl RewardSource {
    pub fn bernoulli(probability: f64) -> Result<Self, ConfigurationError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(ConfigurationError::InvalidProbability(probability));
        }

        Ok(Self::Bernoulli { probability })
    }

    pub fn gaussian(mean: f64, std_dev: f64) -> Result<Self, ConfigurationError> {
        if !mean.is_finite() {
            return Err(ConfigurationError::InvalidMean(mean));
        }
        if !(std_dev.is_finite() && std_dev > 0.0) {
            return Err(ConfigurationError::InvalidStdDev(std_dev));
        }
        let normal =
            Normal::new(mean, std_dev).map_err(|_| ConfigurationError::InvalidStdDev(std_dev))?;

        Ok(Self::Gaussian { mean, normal })
    }

    pub fn pull<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            RewardSource::Bernoulli { probability } => {
                if rng.random::<f64>() < *probability {
                    1.0
                } else {
                    0.0
                }
            }
            RewardSource::Gaussian { normal, .. } => normal.sample(rng),
        }
    }

    /// Whether every pull yields 0 or 1.
    pub fn is_binary(&self) -> bool {
        matches!(self, RewardSource::Bernoulli { .. })
    }

    pub fn expected_reward(&self) -> f64 {
        match self {
            RewardSource::Bernoulli { probability } => *probability,
            RewardSource::Gaussian { mean, .. } => *mean,
        }
    }
}

impl TryFrom<SourceConfig> for RewardSource {
    type Error = ConfigurationError;

    fn try_from(config: SourceConfig) -> Result<Self, Self::Error> {
        match config {
            SourceConfig::Bernoulli { probability } => Self::bernoulli(probability),
            SourceConfig::Gaussian { mean, std_dev } => Self::gaussian(mean, std_dev),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    const SEED: u64 = 1234;

    #[test]
    fn create_invalid() {
        assert!(matches!(
            RewardSource::bernoulli(1.2),
            Err(ConfigurationError::InvalidProbability(_))
        ));
        assert!(RewardSource::bernoulli(-0.1).is_err());
        assert!(RewardSource::bernoulli(f64::NAN).is_err());
        assert!(matches!(
            RewardSource::gaussian(0.0, 0.0),
            Err(ConfigurationError::InvalidStdDev(_))
        ));
        assert!(RewardSource::gaussian(0.0, -1.0).is_err());
        assert!(matches!(
            RewardSource::gaussian(f64::INFINITY, 1.0),
            Err(ConfigurationError::InvalidMean(_))
        ));
    }

    #[test]
    fn bernoulli_extremes() {
        let mut rng = SmallRng::seed_from_u64(SEED);
        let always = RewardSource::bernoulli(1.0).unwrap();
        let never = RewardSource::bernoulli(0.0).unwrap();
        for _ in 0..100 {
            assert_eq!(always.pull(&mut rng), 1.0);
            assert_eq!(never.pull(&mut rng), 0.0);
        }
    }

    #[test]
    fn bernoulli_rate() {
        let mut rng = SmallRng::seed_from_u64(SEED);
        let source = RewardSource::bernoulli(0.3).unwrap();
        let wins: f64 = (0..10_000).map(|_| source.pull(&mut rng)).sum();
        assert!((wins / 10_000.0 - 0.3).abs() < 0.02);
    }

    #[test]
    fn gaussian_mean() {
        let mut rng = SmallRng::seed_from_u64(SEED);
        let source = RewardSource::gaussian(2.0, 0.5).unwrap();
        let total: f64 = (0..10_000).map(|_| source.pull(&mut rng)).sum();
        assert!((total / 10_000.0 - 2.0).abs() < 0.05);
        assert_eq!(source.expected_reward(), 2.0);
    }

    #[test]
    fn from_config() {
        let source = RewardSource::try_from(SourceConfig::Bernoulli { probability: 0.4 }).unwrap();
        assert_eq!(source.expected_reward(), 0.4);
        assert!(source.is_binary());
        assert!(!RewardSource::gaussian(0.0, 1.0).unwrap().is_binary());

        let result = RewardSource::try_from(SourceConfig::Gaussian {
            mean: 0.0,
            std_dev: 0.0,
        });
        assert!(result.is_err());
    }
}
