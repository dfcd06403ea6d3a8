use crate::search::{Plan, SearchProblem};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("action {action} at step {step} is not applicable in state {state}")]
    NotApplicable {
        step: usize,
        action: String,
        state: String,
    },
    #[error("plan does not reach a goal state, final state is {0}")]
    GoalNotReached(String),
}

/// Replay a plan from the start state of the problem, checking that every
/// action is applicable and that the plan ends in a goal state.
pub fn validate<P>(plan: &Plan<P::Action>, problem: &P) -> Result<(), ValidationError>
where
    P: SearchProblem,
    P::Action: PartialEq,
{
    let mut cur_state = problem.start_state();
    for (step, action) in plan.iter().enumerate() {
        let successor = problem
            .successors(&cur_state)
            .into_iter()
            .find(|successor| &successor.action == action);

        match successor {
            Some(successor) => cur_state = successor.state,
            None => {
                return Err(ValidationError::NotApplicable {
                    step,
                    action: format!("{:?}", action),
                    state: format!("{:?}", cur_state),
                })
            }
        }
    }

    if !problem.is_goal(&cur_state) {
        return Err(ValidationError::GoalNotReached(format!("{:?}", cur_state)));
    }

    Ok(())
}
