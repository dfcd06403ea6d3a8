//! A plan is a sequence of actions leading from the start state of a
//! [`SearchProblem`] to one of its goal states.

use crate::search::{Cost, SearchProblem};
use itertools::Itertools;
use std::fmt::{self, Display};
use std::ops::Deref;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan<A> {
    steps: Vec<A>,
}

impl<A> Plan<A> {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<A>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[A] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn into_actions(self) -> Vec<A> {
        self.steps
    }

    /// The cost of the plan as measured by the problem.
    pub fn cost<P>(&self, problem: &P) -> Cost
    where
        P: SearchProblem<Action = A>,
    {
        problem.path_cost(&self.steps)
    }
}

impl<A> IntoIterator for Plan<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<A> Deref for Plan<A> {
    type Target = [A];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

impl<A: Display> Display for Plan<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.steps.iter().join("\n"))
    }
}
