//! The [`SearchProblem`] trait is the only thing the generic search engines
//! know about the world. States are opaque tokens that can be compared and
//! hashed, and transitions are pure.

use ordered_float::OrderedFloat;
use std::{fmt::Debug, hash::Hash};

/// Costs are floats wrapped so that they can be used as priorities.
pub type Cost = OrderedFloat<f64>;

/// A single transition out of a state.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A> {
    /// The state reached by taking the action
    pub state: S,
    /// The action taken
    pub action: A,
    /// The non-negative cost of taking the action
    pub cost: Cost,
}

impl<S, A> Successor<S, A> {
    pub fn new(state: S, action: A, cost: impl Into<Cost>) -> Self {
        Self {
            state,
            action,
            cost: cost.into(),
        }
    }
}

pub trait SearchProblem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;

    /// The initial configuration of the problem.
    fn start_state(&self) -> Self::State;

    /// Whether the given state satisfies the termination condition.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// All transitions out of the given state. Must be a pure function of the
    /// state and every step cost must be non-negative.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// The total cost of following the given actions from the start state.
    /// For a valid path this is the sum of the step costs along it.
    fn path_cost(&self, actions: &[Self::Action]) -> Cost;
}
