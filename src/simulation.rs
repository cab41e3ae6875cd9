use crate::errors::{ConfigurationError, PolicyError, SimulationError};
use crate::policies::{AgentPolicy, MaybeSeededRng, PolicyStats};
use crate::record::TrialRecord;
use crate::report::SimulationReport;
use crate::sources::RewardSource;

use tracing::{debug, info, info_span};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running { trial: usize },
    Completed,
}

/// Drives `trials` rounds of select, pull, update against a fixed set of
/// reward sources. Strategy logic lives entirely in the agent.
pub struct LearningLoop<P> {
    id: Uuid,
    sources: Vec<RewardSource>,
    agent: P,
    trials: usize,
    rng: MaybeSeededRng,
    record: TrialRecord,
    state: LoopState,
}

impl<P: AgentPolicy> LearningLoop<P> {
    pub fn new(
        sources: Vec<RewardSource>,
        agent: P,
        trials: usize,
        seed: Option<u64>,
    ) -> Result<Self, SimulationError> {
        if trials == 0 {
            return Err(ConfigurationError::NoTrials.into());
        }
        if sources.is_empty() {
            return Err(ConfigurationError::NoArms.into());
        }
        if sources.len() != agent.num_arms() {
            return Err(ConfigurationError::ConfigurationMismatch {
                sources: sources.len(),
                arms: agent.num_arms(),
            }
            .into());
        }
        if agent.requires_binary_rewards() {
            if let Some(arm_id) = sources.iter().position(|source| !source.is_binary()) {
                return Err(ConfigurationError::IncompatibleSource {
                    arm_id,
                    policy: agent.name(),
                }
                .into());
            }
        }

        Ok(Self {
            id: Uuid::new_v4(),
            sources,
            agent,
            trials,
            rng: MaybeSeededRng::new(seed),
            record: TrialRecord::with_capacity(trials),
            state: LoopState::Idle,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn agent(&self) -> &P {
        &self.agent
    }

    pub fn sources(&self) -> &[RewardSource] {
        &self.sources
    }

    pub fn record(&self) -> &TrialRecord {
        &self.record
    }

    pub fn stats(&self) -> PolicyStats {
        self.agent.stats()
    }

    pub fn run(&mut self) -> Result<&TrialRecord, SimulationError> {
        if self.state != LoopState::Idle {
            return Err(SimulationError::AlreadyRun);
        }

        let span = info_span!("learning_loop", id = %self.id, agent = self.agent.name());
        let _enter = span.enter();
        info!(
            trials = self.trials,
            arms = self.sources.len(),
            "Starting learning loop"
        );

        for trial in 0..self.trials {
            self.state = LoopState::Running { trial };
            self.step(trial)?;
        }
        self.state = LoopState::Completed;

        info!(
            total_reward = self.record.total_reward(),
            "Completed learning loop"
        );
        Ok(&self.record)
    }

    fn step(&mut self, trial: usize) -> Result<(), SimulationError> {
        let arm_id = self.agent.select_arm()?;
        let source = self
            .sources
            .get(arm_id)
            .ok_or(PolicyError::IndexOutOfRange {
                arm_id,
                num_arms: self.sources.len(),
            })?;

        let outcome = source.pull(self.rng.get_rng());
        self.agent.update(arm_id, outcome)?;
        self.record.push(outcome);

        debug!(trial, arm_id, outcome, "Trial done");
        Ok(())
    }

    pub fn report(&self) -> SimulationReport {
        let total_reward = self.record.total_reward();
        let win_rate = if self.record.is_empty() {
            0.0
        } else {
            total_reward / self.record.len() as f64
        };

        SimulationReport {
            run_id: self.id,
            agent: self.agent.name().to_string(),
            trials: self.record.len(),
            total_reward,
            win_rate,
            best_expected_reward: self
                .sources
                .iter()
                .map(RewardSource::expected_reward)
                .fold(f64::NEG_INFINITY, f64::max),
            arms: self.agent.stats().arms,
        }
    }

    pub fn into_parts(self) -> (P, TrialRecord) {
        (self.agent, self.record)
    }
}
