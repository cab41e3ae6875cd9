pub mod arm;
pub mod epsilon_greedy;
pub mod optimistic;
mod policy;
pub mod random;
mod rng;
pub mod thompson_sampling;
pub mod ucb;

pub use arm::ArmStats;
pub use epsilon_greedy::EpsilonGreedy;
pub use optimistic::OptimisticGreedy;
pub use policy::{AgentPolicy, PolicyStats, PolicyType};
pub use random::RandomPolicy;
pub use rng::MaybeSeededRng;
pub use thompson_sampling::{BetaThompsonSampling, GaussianThompsonSampling};
pub use ucb::Ucb;
