use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArmStats {
    pub pulls: u64,
    pub estimate: f64,
}

/// Running-mean arm shared by the greedy family of policies.
///
/// `prior_count` pseudo-observations of value `estimate` are folded into the
/// mean before any real pull, which is how optimistic initialisation keeps an
/// inflated value alive for a while.
#[derive(Clone, Debug)]
pub(super) struct MeanArm {
    pub(super) estimate: f64,
    pub(super) pulls: u64,
    prior_count: u64,
}

impl MeanArm {
    pub(super) fn new(initial_estimate: f64, prior_count: u64) -> Self {
        Self {
            estimate: initial_estimate,
            pulls: 0,
            prior_count,
        }
    }

    pub(super) fn update(&mut self, reward: f64) {
        self.pulls += 1;
        let count = (self.pulls + self.prior_count) as f64;
        self.estimate += (reward - self.estimate) / count;
    }

    pub(super) fn stats(&self) -> ArmStats {
        ArmStats {
            pulls: self.pulls,
            estimate: self.estimate,
        }
    }
}
