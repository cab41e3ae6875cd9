use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("At least one arm is required")]
    NoArms,
    #[error("Win probability {0} is outside [0, 1]")]
    InvalidProbability(f64),
    #[error("Standard deviation {0} must be finite and strictly positive")]
    InvalidStdDev(f64),
    #[error("Mean {0} must be finite")]
    InvalidMean(f64),
    #[error("Epsilon {0} is outside [0, 1]")]
    InvalidEpsilon(f64),
    #[error("Initial estimate {0} must be finite")]
    InvalidInitialEstimate(f64),
    #[error("At least one trial is required")]
    NoTrials,
    #[error("{sources} reward sources given for an agent with {arms} arms")]
    ConfigurationMismatch { sources: usize, arms: usize },
    #[error("Arm {arm_id} does not pay out 0 or 1, which {policy} requires")]
    IncompatibleSource { arm_id: usize, policy: &'static str },
}

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error(transparent)]
    InvalidConfiguration(#[from] ConfigurationError),
    #[error("Arm {arm_id} out of range for {num_arms} arms")]
    IndexOutOfRange { arm_id: usize, num_arms: usize },
    #[error("Reward {reward} for arm {arm_id} is not a valid outcome")]
    InvalidReward { arm_id: usize, reward: f64 },
    #[error("Sampling failed: {0}")]
    SamplingError(String),
}

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    InvalidConfiguration(#[from] ConfigurationError),
    #[error(transparent)]
    Policy(#[from] PolicyError),
    #[error("Learning loop already ran, build a fresh one to rerun")]
    AlreadyRun,
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Cannot read config: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    #[error("Failed to serialize report to JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}
