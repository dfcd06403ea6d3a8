use crate::adversarial::{GameState, Position, SpatialState};
use crate::search::{Cost, SearchProblem, Successor};
use ordered_float::OrderedFloat;
use rand::Rng;

/// An explicit weighted digraph. States are node names and the action taking
/// an edge is named after its target.
#[derive(Debug, Clone)]
pub struct GraphProblem {
    start: &'static str,
    goals: Vec<&'static str>,
    edges: Vec<(&'static str, &'static str, f64)>,
}

impl GraphProblem {
    pub fn new(
        start: &'static str,
        goals: &[&'static str],
        edges: &[(&'static str, &'static str, f64)],
    ) -> Self {
        Self {
            start,
            goals: goals.to_vec(),
            edges: edges.to_vec(),
        }
    }
}

impl SearchProblem for GraphProblem {
    type State = &'static str;
    type Action = &'static str;

    fn start_state(&self) -> Self::State {
        self.start
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>> {
        self.edges
            .iter()
            .filter(|(from, _, _)| from == state)
            .map(|&(_, to, cost)| Successor::new(to, to, cost))
            .collect()
    }

    fn path_cost(&self, actions: &[Self::Action]) -> Cost {
        let mut current = self.start;
        let mut total = 0.;
        for action in actions {
            match self
                .edges
                .iter()
                .find(|(from, to, _)| *from == current && to == action)
            {
                Some(&(_, to, cost)) => {
                    total += cost;
                    current = to;
                }
                None => return OrderedFloat(f64::INFINITY),
            }
        }
        OrderedFloat(total)
    }
}

/// Two routes of two steps into G, the one through B is cheaper.
pub fn diamond_graph() -> GraphProblem {
    GraphProblem::new(
        "S",
        &["G"],
        &[("S", "A", 1.), ("S", "B", 1.), ("A", "G", 5.), ("B", "G", 1.)],
    )
}

/// A direct but expensive edge into G, listed after a cheap detour.
pub fn dfs_trap_graph() -> GraphProblem {
    GraphProblem::new(
        "S",
        &["G"],
        &[("S", "A", 1.), ("S", "G", 10.), ("A", "G", 1.)],
    )
}

/// A is first reached expensively, then cheaply through B.
pub fn decrease_key_graph() -> GraphProblem {
    GraphProblem::new(
        "S",
        &["G"],
        &[("S", "A", 5.), ("S", "B", 1.), ("B", "A", 1.), ("A", "G", 1.)],
    )
}

/// B is pushed twice, and the expensive copy is popped after B is expanded.
pub fn stale_entry_graph() -> GraphProblem {
    GraphProblem::new(
        "S",
        &["G"],
        &[("S", "A", 1.), ("S", "B", 4.), ("A", "B", 1.), ("B", "G", 5.)],
    )
}

/// Unit costs, G is three steps away through X and two through B.
pub fn two_route_graph() -> GraphProblem {
    GraphProblem::new(
        "S",
        &["G"],
        &[
            ("S", "X", 1.),
            ("X", "Y", 1.),
            ("Y", "G", 1.),
            ("S", "B", 1.),
            ("B", "G", 1.),
        ],
    )
}

pub fn cyclic_graph() -> GraphProblem {
    GraphProblem::new(
        "S",
        &["G"],
        &[("S", "A", 1.), ("A", "S", 1.), ("A", "G", 1.)],
    )
}

pub fn unreachable_goal_graph() -> GraphProblem {
    GraphProblem::new(
        "S",
        &["Z"],
        &[("S", "A", 1.), ("A", "S", 1.), ("A", "B", 2.), ("Z", "S", 1.)],
    )
}

pub fn start_is_goal_graph() -> GraphProblem {
    GraphProblem::new("S", &["S"], &[("S", "A", 1.)])
}

/// A hand-built game tree. Internal nodes also carry a value, which is what
/// the evaluator sees when the depth limit cuts the tree there.
#[derive(Debug, Clone, PartialEq)]
pub struct GameTree {
    pub value: f64,
    pub children: Vec<GameTree>,
}

pub fn leaf(value: f64) -> GameTree {
    GameTree {
        value,
        children: vec![],
    }
}

pub fn branch(children: Vec<GameTree>) -> GameTree {
    GameTree {
        value: 0.,
        children,
    }
}

/// A tree of exactly `height` levels below the root, every internal node
/// having between one and `max_branching` children.
pub fn random_tree<R: Rng>(rng: &mut R, max_branching: usize, height: usize) -> GameTree {
    let value = f64::from(rng.gen_range(-20..=20));
    if height == 0 {
        return leaf(value);
    }
    let branching = rng.gen_range(1..=max_branching);
    GameTree {
        value,
        children: (0..branching)
            .map(|_| random_tree(rng, max_branching, height - 1))
            .collect(),
    }
}

/// Plays a [`GameTree`]. Every agent picks a child by index.
#[derive(Debug, Clone)]
pub struct TreeGame {
    tree: GameTree,
    num_agents: usize,
}

impl TreeGame {
    pub fn new(tree: GameTree, num_agents: usize) -> Self {
        Self { tree, num_agents }
    }
}

impl GameState for TreeGame {
    type Action = usize;

    fn legal_actions(&self, _agent_index: usize) -> Vec<usize> {
        (0..self.tree.children.len()).collect()
    }

    fn successor(&self, _agent_index: usize, action: &usize) -> Self {
        Self {
            tree: self.tree.children[*action].clone(),
            num_agents: self.num_agents,
        }
    }

    fn num_agents(&self) -> usize {
        self.num_agents
    }

    fn score(&self) -> f64 {
        self.tree.value
    }
}

/// Fixed positional features for evaluator tests.
#[derive(Debug, Clone)]
pub struct SpatialFixture {
    pub score: f64,
    pub agent: Position,
    pub resources: Vec<Position>,
    pub threats: Vec<Position>,
}

impl GameState for SpatialFixture {
    type Action = ();

    fn legal_actions(&self, _agent_index: usize) -> Vec<()> {
        vec![]
    }

    fn successor(&self, _agent_index: usize, _action: &()) -> Self {
        self.clone()
    }

    fn num_agents(&self) -> usize {
        1 + self.threats.len()
    }

    fn score(&self) -> f64 {
        self.score
    }
}

impl SpatialState for SpatialFixture {
    fn agent_position(&self) -> Position {
        self.agent
    }

    fn resource_positions(&self) -> Vec<Position> {
        self.resources.clone()
    }

    fn threat_positions(&self) -> Vec<Position> {
        self.threats.clone()
    }
}

/// A one-dimensional world where the protagonist steps left or right or
/// stands still, collecting resources. Threats never move.
#[derive(Debug, Clone)]
pub struct CorridorGame {
    agent: i32,
    resources: Vec<i32>,
    threats: Vec<i32>,
}

impl CorridorGame {
    pub fn new(agent: i32, resources: Vec<i32>, threats: Vec<i32>) -> Self {
        Self {
            agent,
            resources,
            threats,
        }
    }
}

impl GameState for CorridorGame {
    type Action = i32;

    fn legal_actions(&self, agent_index: usize) -> Vec<i32> {
        if agent_index == 0 {
            vec![-1, 0, 1]
        } else {
            vec![0]
        }
    }

    fn successor(&self, agent_index: usize, action: &i32) -> Self {
        let mut next = self.clone();
        if agent_index == 0 {
            next.agent += action;
            next.resources.retain(|&resource| resource != next.agent);
        }
        next
    }

    fn num_agents(&self) -> usize {
        1 + self.threats.len()
    }

    fn score(&self) -> f64 {
        -(self.resources.len() as f64)
    }
}

impl SpatialState for CorridorGame {
    fn agent_position(&self) -> Position {
        Position::new(self.agent, 0)
    }

    fn resource_positions(&self) -> Vec<Position> {
        self.resources.iter().map(|&x| Position::new(x, 0)).collect()
    }

    fn threat_positions(&self) -> Vec<Position> {
        self.threats.iter().map(|&x| Position::new(x, 0)).collect()
    }
}
