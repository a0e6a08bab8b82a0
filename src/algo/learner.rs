use std::marker::PhantomData;

use log::{info, trace};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{
    agent::Agent,
    debug_assert_interval,
    env::{Exp, LegalActions},
    exploration::{Choice, EpsilonGreedy},
};

/// An estimate of Q(s, a) that can be nudged toward a target
///
/// This is the seam between the tabular and the approximate learner: selection
/// and the temporal-difference error are shared, only the representation differs.
pub trait ValueFunction<S, A> {
    /// Current estimate for the pair, `0.0` if nothing was ever learned about it
    fn q_value(&self, state: &S, action: &A) -> f64;

    /// Apply an already scaled correction `step = α · δ`, δ being the TD error, for the pair
    fn update(&mut self, state: &S, action: &A, step: f64);

    /// Called once when the driver's training budget is exhausted
    fn training_complete(&self) {}
}

/// Configuration for a [`QLearner`]
///
/// All three values must lie in `[0,1]` (`alpha` strictly above zero while
/// training). They are checked in debug builds only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QLearningConfig {
    /// Learning rate
    ///
    /// **Default**: `0.2`
    pub alpha: f64,
    /// Discount factor
    ///
    /// **Default**: `0.8`
    pub gamma: f64,
    /// Exploration probability
    ///
    /// **Default**: `0.05`
    pub epsilon: f64,
}

impl Default for QLearningConfig {
    fn default() -> Self {
        Self {
            alpha: 0.2,
            gamma: 0.8,
            epsilon: 0.05,
        }
    }
}

/// Off-policy TD control with epsilon greedy exploration
///
/// ### Generics
/// - `S`, `A` - The state and action types, opaque to the learner
/// - `L` - The [`LegalActions`] oracle; a state with no legal actions is terminal
/// - `V` - The [`ValueFunction`] holding what has been learned
///
/// Every random draw (explore or exploit, the exploratory action, and tie-breaks
/// between equally valued actions) comes from one generator owned by the learner.
pub struct QLearner<S, A, L, V> {
    oracle: L,
    values: V,
    exploration: EpsilonGreedy,
    alpha: f64,
    gamma: f64,
    rng: StdRng,
    phantom: PhantomData<fn(&S) -> A>,
}

impl<S, A, L, V> QLearner<S, A, L, V>
where
    A: Clone,
    L: LegalActions<S, A>,
    V: ValueFunction<S, A>,
{
    /// Initialize a learner around an existing value function
    pub fn with_values(oracle: L, values: V, config: QLearningConfig) -> Self {
        debug_assert_interval!(config.alpha, 0.0, 1.0);
        debug_assert_interval!(config.gamma, 0.0, 1.0);
        Self {
            oracle,
            values,
            exploration: EpsilonGreedy::new(config.epsilon),
            alpha: config.alpha,
            gamma: config.gamma,
            rng: StdRng::from_entropy(),
            phantom: PhantomData,
        }
    }

    /// Replace the random source with a seeded one
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn values(&self) -> &V {
        &self.values
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn epsilon(&self) -> f64 {
        self.exploration.epsilon()
    }

    pub fn set_alpha(&mut self, alpha: f64) {
        debug_assert_interval!(alpha, 0.0, 1.0);
        self.alpha = alpha;
    }

    pub fn set_gamma(&mut self, gamma: f64) {
        debug_assert_interval!(gamma, 0.0, 1.0);
        self.gamma = gamma;
    }

    pub fn set_epsilon(&mut self, epsilon: f64) {
        self.exploration.set_epsilon(epsilon);
    }

    /// Q(s, a), `0.0` for pairs never observed
    pub fn q_value(&self, state: &S, action: &A) -> f64 {
        self.values.q_value(state, action)
    }

    /// max<sub>a</sub> Q(s, a) over the legal actions, or exactly `0.0` for a terminal state
    pub fn value_of_state(&self, state: &S) -> f64 {
        let actions = self.oracle.legal_actions(state);
        if actions.is_empty() {
            return 0.0;
        }
        actions
            .iter()
            .map(|a| self.q_value(state, a))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Alias of [`value_of_state`](Self::value_of_state)
    pub fn value(&self, state: &S) -> f64 {
        self.value_of_state(state)
    }

    /// A greedy action, or `None` for a terminal state
    ///
    /// Ties are common (every unseen action is worth `0.0`) and are broken uniformly
    /// at random among the actions whose value equals the maximum exactly.
    pub fn best_action(&mut self, state: &S) -> Option<A> {
        let actions = self.oracle.legal_actions(state);
        let values = actions
            .iter()
            .map(|a| self.q_value(state, a))
            .collect::<Vec<_>>();
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let best = actions
            .into_iter()
            .zip(values)
            .filter(|&(_, v)| v == max)
            .map(|(a, _)| a)
            .collect::<Vec<_>>();
        best.choose(&mut self.rng).cloned()
    }

    /// Alias of [`best_action`](Self::best_action)
    pub fn policy(&mut self, state: &S) -> Option<A> {
        self.best_action(state)
    }

    /// The action to take at a decision point, or `None` for a terminal state
    ///
    /// With probability ε picks uniformly among all legal actions, greedy action
    /// included; otherwise defers to [`best_action`](Self::best_action).
    pub fn select_action(&mut self, state: &S) -> Option<A> {
        let actions = self.oracle.legal_actions(state);
        if actions.is_empty() {
            return None;
        }
        match self.exploration.choose(&mut self.rng) {
            Choice::Explore => actions.choose(&mut self.rng).cloned(),
            Choice::Exploit => self.best_action(state),
        }
    }

    /// Learn from one transition
    ///
    /// Moves Q(s, a) toward `r + γ · max_a' Q(s', a')` by a fraction α of the gap.
    /// The target always uses the greedy value of `s'`, whatever the next action
    /// actually taken turns out to be.
    pub fn observe(&mut self, experience: Exp<S, A>) {
        let Exp {
            state,
            action,
            next_state,
            reward,
        } = experience;

        let q_value = self.q_value(&state, &action);
        let target = reward + self.gamma * self.value_of_state(&next_state);
        let td_error = target - q_value;
        trace!("q = {q_value:.4}, target = {target:.4}, td error = {td_error:.4}");

        self.values.update(&state, &action, self.alpha * td_error);
    }

    /// End-of-training observation point; forwards to the value function
    pub fn training_complete(&mut self) {
        info!("Training complete (alpha = {}, gamma = {})", self.alpha, self.gamma);
        self.values.training_complete();
    }
}

impl<S, A, L, V> Agent<S, A> for QLearner<S, A, L, V>
where
    A: Clone,
    L: LegalActions<S, A>,
    V: ValueFunction<S, A>,
{
    fn act(&mut self, state: &S) -> Option<A> {
        self.select_action(state)
    }

    fn learn(&mut self, experience: Exp<S, A>) {
        self.observe(experience)
    }

    fn set_epsilon(&mut self, epsilon: f64) {
        QLearner::set_epsilon(self, epsilon)
    }

    fn set_alpha(&mut self, alpha: f64) {
        QLearner::set_alpha(self, alpha)
    }

    fn training_complete(&mut self) {
        QLearner::training_complete(self)
    }
}
