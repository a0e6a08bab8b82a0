use std::marker::PhantomData;

use log::debug;

use crate::{ds::DefaultMap, env::LegalActions, features::FeatureExtractor};

use super::{QLearner, QLearningConfig, ValueFunction};

/// Q(s, a) = Σ<sub>k</sub> w<sub>k</sub> · f<sub>k</sub>(s, a), linear in a weight vector over named features
///
/// The weights are shared by every state, so learning about one pair moves the
/// estimate of every other pair with overlapping features.
pub struct LinearQ<S, A, X: FeatureExtractor<S, A>> {
    extractor: X,
    weights: DefaultMap<X::Key>,
    phantom: PhantomData<fn(&S, &A)>,
}

impl<S, A, X: FeatureExtractor<S, A>> LinearQ<S, A, X> {
    /// All-zero weights over the features of `extractor`
    pub fn new(extractor: X) -> Self {
        Self {
            extractor,
            weights: DefaultMap::new(),
            phantom: PhantomData,
        }
    }

    pub fn weights(&self) -> &DefaultMap<X::Key> {
        &self.weights
    }

    pub fn extractor(&self) -> &X {
        &self.extractor
    }
}

impl<S, A, X: FeatureExtractor<S, A>> ValueFunction<S, A> for LinearQ<S, A, X> {
    fn q_value(&self, state: &S, action: &A) -> f64 {
        self.extractor.features(state, action).dot(&self.weights)
    }

    /// Gradient step on the squared TD error; only the pair's own features move
    fn update(&mut self, state: &S, action: &A, step: f64) {
        for (key, value) in self.extractor.features(state, action) {
            self.weights.add(key, step * value);
        }
    }

    fn training_complete(&self) {
        debug!("Learned {} feature weights", self.weights.len());
        let norm = self.weights.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        debug!("Weight vector norm: {norm:.4}");
    }
}

/// Approximate Q-learning agent over a linear function of extracted features
///
/// Selection is identical to [`QLearningAgent`](super::QLearningAgent); only the
/// value representation and its update differ.
///
/// ### Generics
/// - `S`, `A` - The state and action types, only ever passed to `L` and `X`
/// - `L` - The [`LegalActions`] oracle
/// - `X` - The [`FeatureExtractor`], chosen at construction
pub type ApproximateQAgent<S, A, L, X> = QLearner<S, A, L, LinearQ<S, A, X>>;

impl<S, A, L, X> QLearner<S, A, L, LinearQ<S, A, X>>
where
    A: Clone,
    L: LegalActions<S, A>,
    X: FeatureExtractor<S, A>,
{
    /// Initialize a new `ApproximateQAgent` with all-zero weights
    pub fn new(oracle: L, extractor: X, config: QLearningConfig) -> Self {
        Self::with_values(oracle, LinearQ::new(extractor), config)
    }

    pub fn weights(&self) -> &DefaultMap<X::Key> {
        self.values().weights()
    }
}
