//! Path finding on a grid layout: reach the single resource from the start.

use crate::{
    adversarial::Position,
    domains::{Direction, Layout, LayoutError},
    search::{Cost, Heuristic, HeuristicValue, SearchProblem, Successor, ZeroHeuristic},
};
use ordered_float::OrderedFloat;

/// The cost of stepping onto a cell.
pub type CostFn = fn(Position) -> f64;

pub fn unit_cost(_position: Position) -> f64 {
    1.
}

/// Cells further east are cheaper, so cheapest paths hug the east side.
pub fn stay_east_cost(position: Position) -> f64 {
    0.5f64.powi(position.x)
}

/// Cells further west are cheaper, so cheapest paths hug the west side.
pub fn stay_west_cost(position: Position) -> f64 {
    2f64.powi(position.x)
}

#[derive(Debug, Clone)]
pub struct MazeProblem {
    layout: Layout,
    goal: Position,
    cost_fn: CostFn,
}

impl MazeProblem {
    /// The layout must contain exactly one resource, which is the goal.
    pub fn new(layout: Layout) -> Result<Self, LayoutError> {
        let goal = match layout.resources() {
            [goal] => *goal,
            resources => return Err(LayoutError::GoalCount(resources.len())),
        };
        Ok(Self {
            layout,
            goal,
            cost_fn: unit_cost,
        })
    }

    pub fn with_cost_fn(mut self, cost_fn: CostFn) -> Self {
        self.cost_fn = cost_fn;
        self
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }
}

impl SearchProblem for MazeProblem {
    type State = Position;
    type Action = Direction;

    fn start_state(&self) -> Position {
        self.layout.start()
    }

    fn is_goal(&self, state: &Position) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Position) -> Vec<Successor<Position, Direction>> {
        Direction::MOVES
            .iter()
            .filter_map(|&direction| {
                let next = direction.apply(*state);
                (!self.layout.is_wall(next))
                    .then(|| Successor::new(next, direction, (self.cost_fn)(next)))
            })
            .collect()
    }

    /// Walking into a wall makes the whole sequence infinitely expensive.
    fn path_cost(&self, actions: &[Direction]) -> Cost {
        let mut position = self.layout.start();
        let mut total = 0.;
        for action in actions {
            position = action.apply(position);
            if self.layout.is_wall(position) {
                return OrderedFloat(f64::INFINITY);
            }
            total += (self.cost_fn)(position);
        }
        OrderedFloat(total)
    }
}

/// Admissible for unit costs.
#[derive(Clone, Debug, Default)]
pub struct ManhattanHeuristic {}

impl Heuristic<MazeProblem> for ManhattanHeuristic {
    fn evaluate(&mut self, state: &Position, problem: &MazeProblem) -> HeuristicValue {
        OrderedFloat(f64::from(state.manhattan_distance(&problem.goal())))
    }
}

/// Admissible for unit costs, but weaker than [`ManhattanHeuristic`].
#[derive(Clone, Debug, Default)]
pub struct EuclideanHeuristic {}

impl Heuristic<MazeProblem> for EuclideanHeuristic {
    fn evaluate(&mut self, state: &Position, problem: &MazeProblem) -> HeuristicValue {
        OrderedFloat(state.euclidean_distance(&problem.goal()))
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum MazeHeuristicName {
    #[clap(name = "zero", help = "The zero heuristic.")]
    Zero,
    #[clap(help = "Manhattan distance to the goal.")]
    Manhattan,
    #[clap(help = "Straight line distance to the goal.")]
    Euclidean,
}

impl MazeHeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic<MazeProblem>> {
        match self {
            MazeHeuristicName::Zero => Box::new(ZeroHeuristic::new()),
            MazeHeuristicName::Manhattan => Box::new(ManhattanHeuristic::default()),
            MazeHeuristicName::Euclidean => Box::new(EuclideanHeuristic::default()),
        }
    }
}
