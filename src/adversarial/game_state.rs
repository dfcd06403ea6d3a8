//! The contract a turn-based multi-agent game has to satisfy to be searched.

use std::fmt::{self, Debug, Display};

/// Agent `0` is the maximising protagonist, every other agent is an opponent.
/// Agents move in index order, one full round of moves is one ply.
pub trait GameState: Sized {
    type Action: Clone + Debug + PartialEq;

    /// The actions available to the given agent. No actions means the state is
    /// terminal for that agent.
    fn legal_actions(&self, agent_index: usize) -> Vec<Self::Action>;

    /// The state after the given agent plays the given action.
    fn successor(&self, agent_index: usize, action: &Self::Action) -> Self;

    /// Total number of agents, including the protagonist.
    fn num_agents(&self) -> usize;

    /// The game's own valuation of the state from the protagonist's point of
    /// view.
    fn score(&self) -> f64;
}

/// A cell on a two-dimensional grid, `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn manhattan_distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn euclidean_distance(&self, other: &Position) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Positional features of a grid game, used by evaluators that look beyond
/// the built-in score.
pub trait SpatialState {
    /// Where the protagonist is.
    fn agent_position(&self) -> Position;

    /// The resources the protagonist still wants to collect.
    fn resource_positions(&self) -> Vec<Position>;

    /// Where the opponents are.
    fn threat_positions(&self) -> Vec<Position>;
}
