use std::hash::Hash;

/// A trait for state and action types that can be used as keys in a [`HashMap`](std::collections::HashMap)
pub trait Hashable: Clone + Eq + Hash {}

impl<T> Hashable for T where T: Clone + Eq + Hash {}

/// The one piece of an MDP a model-free learner is allowed to query: which actions
/// are legal in a given state
///
/// An empty result marks `state` as terminal. Learners ask on every call and never
/// cache the answer.
pub trait LegalActions<S, A> {
    fn legal_actions(&self, state: &S) -> Vec<A>;
}

impl<S, A, F> LegalActions<S, A> for F
where
    F: Fn(&S) -> Vec<A>,
{
    fn legal_actions(&self, state: &S) -> Vec<A> {
        self(state)
    }
}

/// Represents a single experience or transition in the environment
///
/// Consumed immediately by a learner's update, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Exp<S, A> {
    /// The state of the environment before taking the action
    pub state: S,
    /// The action taken in the given state
    pub action: A,
    /// The state of the environment after the action is taken
    pub next_state: S,
    /// The reward received after taking the action
    pub reward: f64,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A three state chain `A -> B -> C` with a single action `Go`; `C` is terminal
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Node {
        A,
        B,
        C,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Go;

    pub fn chain(state: &Node) -> Vec<Go> {
        match state {
            Node::A | Node::B => vec![Go],
            Node::C => vec![],
        }
    }

    #[test]
    fn closure_oracle() {
        let oracle = |s: &u8| if *s < 2 { vec!['l', 'r'] } else { vec![] };
        assert_eq!(oracle.legal_actions(&0), vec!['l', 'r'], "Open state");
        assert!(oracle.legal_actions(&2).is_empty(), "Terminal state");
        assert!(
            LegalActions::legal_actions(&chain, &Node::C).is_empty(),
            "Chain end is terminal"
        );
    }
}
