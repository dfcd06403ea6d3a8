use crate::search::{Cost, SearchProblem};

pub type HeuristicValue = Cost;

/// An estimate of the remaining cost from a state to the nearest goal of a
/// problem. Heuristics must never be negative.
///
/// Any closure taking the state and the problem is a heuristic, so one-off
/// estimates do not need their own type.
pub trait Heuristic<P: SearchProblem> {
    /// Evaluate the given state with respect to the given problem.
    fn evaluate(&mut self, state: &P::State, problem: &P) -> HeuristicValue;
}

impl<P, F> Heuristic<P> for F
where
    P: SearchProblem,
    F: FnMut(&P::State, &P) -> HeuristicValue,
{
    fn evaluate(&mut self, state: &P::State, problem: &P) -> HeuristicValue {
        self(state, problem)
    }
}
