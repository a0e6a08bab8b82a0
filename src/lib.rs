/// Q-learning agents: tabular and linear function approximation
pub mod algo;

/// The interface an episode driver uses to talk to a learner
pub mod agent;

/// Episode loop and training/evaluation bookkeeping
pub mod driver;

/// Data structures
pub mod ds;

/// Environment
pub mod env;

/// Exploration policies
pub mod exploration;

/// Feature extractors for linear function approximation
pub mod features;

mod util;
