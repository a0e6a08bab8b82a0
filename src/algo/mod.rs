mod learner;
pub mod linear;
pub mod q_table;

pub use learner::{QLearner, QLearningConfig, ValueFunction};
pub use linear::{ApproximateQAgent, LinearQ};
pub use q_table::{QLearningAgent, QTable};
