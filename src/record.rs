use serde::Serialize;

/// Append-only outcomes of a learning loop, in trial order.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TrialRecord {
    outcomes: Vec<f64>,
}

impl TrialRecord {
    pub fn with_capacity(trials: usize) -> Self {
        Self {
            outcomes: Vec::with_capacity(trials),
        }
    }

    pub(crate) fn push(&mut self, outcome: f64) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[f64] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn total_reward(&self) -> f64 {
        self.outcomes.iter().sum()
    }

    pub fn cumulative_rewards(&self) -> Vec<f64> {
        self.outcomes
            .iter()
            .scan(0.0, |total, &outcome| {
                *total += outcome;
                Some(*total)
            })
            .collect()
    }

    /// Cumulative reward divided by the number of trials so far.
    pub fn win_rates(&self) -> Vec<f64> {
        self.cumulative_rewards()
            .into_iter()
            .enumerate()
            .map(|(trial, total)| total / (trial + 1) as f64)
            .collect()
    }
}
