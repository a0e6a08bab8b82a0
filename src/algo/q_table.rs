use crate::{
    ds::DefaultMap,
    env::{Hashable, LegalActions},
};

use super::{QLearner, QLearningConfig, ValueFunction};

/// A Q-table: one independent estimate per `(state, action)` pair
///
/// Grows with every distinct pair that is observed and is never pruned.
#[derive(Debug, Clone)]
pub struct QTable<S: Hashable, A: Hashable> {
    table: DefaultMap<(S, A)>,
}

impl<S: Hashable, A: Hashable> QTable<S, A> {
    pub fn new() -> Self {
        Self {
            table: DefaultMap::new(),
        }
    }

    pub fn table(&self) -> &DefaultMap<(S, A)> {
        &self.table
    }
}

impl<S: Hashable, A: Hashable> Default for QTable<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Hashable, A: Hashable> ValueFunction<S, A> for QTable<S, A> {
    fn q_value(&self, state: &S, action: &A) -> f64 {
        self.table.get(&(state.clone(), action.clone()))
    }

    fn update(&mut self, state: &S, action: &A, step: f64) {
        self.table.add((state.clone(), action.clone()), step);
    }
}

/// A simple Q-learning agent that utilizes a Q-table to learn its environment
///
/// ### Generics
/// - `S`, `A` - The state and action types; both are used as table keys
/// - `L` - The [`LegalActions`] oracle
pub type QLearningAgent<S, A, L> = QLearner<S, A, L, QTable<S, A>>;

impl<S, A, L> QLearner<S, A, L, QTable<S, A>>
where
    S: Hashable,
    A: Hashable,
    L: LegalActions<S, A>,
{
    /// Initialize a new `QLearningAgent` with an empty table
    pub fn new(oracle: L, config: QLearningConfig) -> Self {
        Self::with_values(oracle, QTable::new(), config)
    }

    pub fn q_table(&self) -> &DefaultMap<(S, A)> {
        self.values().table()
    }
}
