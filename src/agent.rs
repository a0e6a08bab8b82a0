use crate::env::Exp;

/// What an [`EpisodeDriver`](crate::driver::EpisodeDriver) needs from a learner
pub trait Agent<S, A> {
    /// Choose an action at a decision point, `None` if `state` is terminal
    fn act(&mut self, state: &S) -> Option<A>;

    /// Learn from a transition obtained by acting
    fn learn(&mut self, experience: Exp<S, A>);

    fn set_epsilon(&mut self, epsilon: f64);

    fn set_alpha(&mut self, alpha: f64);

    /// Called once, when the training budget is exhausted
    fn training_complete(&mut self) {}
}
