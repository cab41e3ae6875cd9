use crate::errors::{ConfigurationError, SimulationError};
use crate::policies::{AgentPolicy, PolicyType};
use crate::simulation::LearningLoop;
use crate::sources::{RewardSource, SourceConfig};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct SimulationConfig {
    pub trials: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    pub sources: Vec<SourceConfig>,
    pub agent: PolicyType,
}

impl SimulationConfig {
    pub fn build(self) -> Result<LearningLoop<Box<dyn AgentPolicy>>, SimulationError> {
        if self.sources.is_empty() {
            return Err(ConfigurationError::NoArms.into());
        }
        let sources = self
            .sources
            .into_iter()
            .map(RewardSource::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let agent = self.agent.build(sources.len(), self.seed)?;

        LearningLoop::new(sources, agent, self.trials, self.seed)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub log_level: String,
    pub simulation: SimulationConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config"))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        builder.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    const CONFIG: &str = r#"
log_level = "info"

[simulation]
trials = 100
seed = 1234

[simulation.agent]
type = "epsilon_greedy"
epsilon = 0.1

[[simulation.sources]]
type = "bernoulli"
probability = 0.3

[[simulation.sources]]
type = "gaussian"
mean = 0.5
std_dev = 1.0
"#;

    fn parse(toml: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn deserialize() {
        let config = parse(CONFIG);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.simulation.trials, 100);
        assert_eq!(config.simulation.seed, Some(1234));
        assert_eq!(
            config.simulation.agent,
            PolicyType::EpsilonGreedy {
                epsilon: 0.1,
                seed: None
            }
        );
        assert_eq!(
            config.simulation.sources[1],
            SourceConfig::Gaussian {
                mean: 0.5,
                std_dev: 1.0
            }
        );
    }

    #[test]
    fn build_and_run() {
        let mut simulation = parse(CONFIG).simulation.build().unwrap();
        assert_eq!(simulation.agent().name(), "epsilon_greedy");
        assert_eq!(simulation.run().unwrap().len(), 100);
    }

    #[test]
    fn build_rejects_bad_source() {
        let mut config = parse(CONFIG).simulation;
        config.sources.push(SourceConfig::Bernoulli { probability: 2.0 });
        assert!(matches!(
            config.build(),
            Err(SimulationError::InvalidConfiguration(
                ConfigurationError::InvalidProbability(_)
            ))
        ));
    }

    #[test]
    fn build_rejects_beta_agent_on_gaussian_sources() {
        let mut config = parse(CONFIG).simulation;
        config.agent = PolicyType::BetaThompson { seed: None };
        config.sources = vec![
            SourceConfig::Gaussian {
                mean: 3.0,
                std_dev: 1.0,
            },
            SourceConfig::Gaussian {
                mean: -3.0,
                std_dev: 1.0,
            },
        ];
        assert!(matches!(
            config.build(),
            Err(SimulationError::InvalidConfiguration(
                ConfigurationError::IncompatibleSource { arm_id: 0, .. }
            ))
        ));
    }

    #[test]
    fn build_rejects_empty_sources() {
        let mut config = parse(CONFIG).simulation;
        config.sources.clear();
        assert!(matches!(
            config.build(),
            Err(SimulationError::InvalidConfiguration(
                ConfigurationError::NoArms
            ))
        ));
    }
}
