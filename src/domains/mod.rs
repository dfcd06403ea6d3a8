//! Concrete grid worlds for the search engines and the adversarial agents.

mod chase;
mod direction;
mod layout;
mod maze;
#[cfg(test)]
pub(crate) mod test_layouts;

pub use chase::{play, ChaseState, GameRecord, Outcome};
pub use direction::Direction;
pub use layout::{Layout, LayoutError};
pub use maze::{
    stay_east_cost, stay_west_cost, unit_cost, CostFn, EuclideanHeuristic, ManhattanHeuristic,
    MazeHeuristicName, MazeProblem,
};
