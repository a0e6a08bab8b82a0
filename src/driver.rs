use log::{debug, info};

use crate::{agent::Agent, env::Exp};

/// An environment that can be played out episode by episode
///
/// Termination is not signalled here: an episode ends when the agent finds no
/// legal action in the current state.
pub trait Episodic {
    type State: Clone;
    type Action: Clone;

    /// Reset the environment to an initial state
    fn reset(&mut self) -> Self::State;

    /// Apply an action, producing the next state and the reward for the transition
    ///
    /// **Returns** `(next_state, reward)`
    fn step(&mut self, action: Self::Action) -> (Self::State, f64);
}

/// Configuration for the [`EpisodeDriver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    /// Number of episodes the agent learns in; later episodes only exploit
    ///
    /// **Default**: `100`
    pub num_training: u32,
    /// Cut an episode off after this many steps
    ///
    /// **Default**: `None`
    pub max_steps: Option<u32>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            num_training: 100,
            max_steps: None,
        }
    }
}

/// Plays episodes between an [`Agent`] and an [`Episodic`] environment
///
/// Owns the episode bookkeeping so the agent does not have to: how many episodes
/// have been played, the rewards earned while training and while testing, and the
/// switch to evaluation once the training budget is spent. At that point the agent
/// gets its [`training_complete`](Agent::training_complete) call and is set to
/// `epsilon = 0` and `alpha = 0`.
#[derive(Debug, Clone)]
pub struct EpisodeDriver {
    num_training: u32,
    max_steps: Option<u32>,
    episodes_so_far: u32,
    train_rewards: f64,
    test_rewards: f64,
}

impl EpisodeDriver {
    pub fn new(config: DriverConfig) -> Self {
        Self {
            num_training: config.num_training,
            max_steps: config.max_steps,
            episodes_so_far: 0,
            train_rewards: 0.0,
            test_rewards: 0.0,
        }
    }

    pub fn episodes_so_far(&self) -> u32 {
        self.episodes_so_far
    }

    pub fn is_in_training(&self) -> bool {
        self.episodes_so_far < self.num_training
    }

    pub fn is_in_testing(&self) -> bool {
        !self.is_in_training()
    }

    /// Total reward over all training episodes so far
    pub fn train_rewards(&self) -> f64 {
        self.train_rewards
    }

    /// Total reward over all testing episodes so far
    pub fn test_rewards(&self) -> f64 {
        self.test_rewards
    }

    /// Play one episode to completion and return its total reward
    pub fn run_episode<E, G>(&mut self, agent: &mut G, env: &mut E) -> f64
    where
        E: Episodic,
        G: Agent<E::State, E::Action>,
    {
        let training = self.is_in_training();
        if !training {
            agent.set_epsilon(0.0);
            agent.set_alpha(0.0);
        }

        let mut state = env.reset();
        let mut reward_sum = 0.0;
        let mut steps = 0;
        while let Some(action) = agent.act(&state) {
            if self.max_steps.is_some_and(|max| steps >= max) {
                debug!("Episode {} cut off after {steps} steps", self.episodes_so_far);
                break;
            }
            let (next_state, reward) = env.step(action.clone());
            reward_sum += reward;
            steps += 1;
            agent.learn(Exp {
                state,
                action,
                next_state: next_state.clone(),
                reward,
            });
            state = next_state;
        }

        if training {
            self.train_rewards += reward_sum;
        } else {
            self.test_rewards += reward_sum;
        }
        self.episodes_so_far += 1;
        debug!(
            "Episode {} finished: {steps} steps, reward {reward_sum}",
            self.episodes_so_far
        );

        if self.episodes_so_far == self.num_training {
            info!(
                "Training done after {} episodes, average reward {:.4}",
                self.num_training,
                self.train_rewards / self.num_training as f64
            );
            agent.training_complete();
            agent.set_epsilon(0.0);
            agent.set_alpha(0.0);
        }

        reward_sum
    }
}
