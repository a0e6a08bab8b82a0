use rand::Rng;

use crate::debug_assert_interval;

/// Exploration policy result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Explore,
    Exploit,
}

/// Epsilon greedy exploration policy
///
/// Explores with probability `epsilon` and exploits otherwise. The caller owns the
/// random source so that every draw a learner makes comes from the same generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpsilonGreedy {
    epsilon: f64,
}

impl EpsilonGreedy {
    /// Initialize epsilon greedy policy with a fixed exploration probability
    ///
    /// `epsilon` must be in the interval `[0,1]`; this is only checked in debug builds.
    pub fn new(epsilon: f64) -> Self {
        debug_assert_interval!(epsilon, 0.0, 1.0);
        Self { epsilon }
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn set_epsilon(&mut self, epsilon: f64) {
        debug_assert_interval!(epsilon, 0.0, 1.0);
        self.epsilon = epsilon;
    }

    /// Flip the explore/exploit coin
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Choice {
        if rng.gen::<f64>() < self.epsilon {
            Choice::Explore
        } else {
            Choice::Exploit
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn epsilon_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        let never = EpsilonGreedy::new(0.0);
        let always = EpsilonGreedy::new(1.0);
        for _ in 0..1000 {
            assert_eq!(never.choose(&mut rng), Choice::Exploit, "Epsilon 0 exploits");
            assert_eq!(always.choose(&mut rng), Choice::Explore, "Epsilon 1 explores");
        }
    }

    #[test]
    fn epsilon_frequency() {
        let mut rng = StdRng::seed_from_u64(11);
        let policy = EpsilonGreedy::new(0.25);
        let explored = (0..10_000)
            .filter(|_| policy.choose(&mut rng) == Choice::Explore)
            .count();
        assert!(
            (2200..2800).contains(&explored),
            "Explores roughly a quarter of the time, got {explored}"
        );
    }
}
