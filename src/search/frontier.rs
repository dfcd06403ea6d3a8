//! Frontiers hold the nodes that have been discovered but not yet expanded.
//! Each search engine owns exactly one of these, the discipline of which
//! decides the expansion order.

use crate::search::Cost;
use priority_queue::PriorityQueue;
use std::{
    cmp::Reverse,
    collections::{HashMap, VecDeque},
    hash::Hash,
};

/// A node of the search tree, i.e. a state together with the actions that
/// reached it from the start state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode<S, A> {
    pub state: S,
    pub actions: Vec<A>,
}

impl<S, A: Clone> SearchNode<S, A> {
    pub fn root(state: S) -> Self {
        Self {
            state,
            actions: vec![],
        }
    }

    /// The node reached by taking `action` from this node into `state`.
    pub fn child(&self, state: S, action: A) -> Self {
        let mut actions = Vec::with_capacity(self.actions.len() + 1);
        actions.extend_from_slice(&self.actions);
        actions.push(action);
        Self { state, actions }
    }
}

/// Last in, first out. The same state may be on the stack several times.
#[derive(Debug)]
pub struct StackFrontier<S, A> {
    nodes: Vec<SearchNode<S, A>>,
}

impl<S, A> StackFrontier<S, A> {
    pub fn new() -> Self {
        Self { nodes: vec![] }
    }

    pub fn push(&mut self, node: SearchNode<S, A>) {
        self.nodes.push(node);
    }

    pub fn pop(&mut self) -> Option<SearchNode<S, A>> {
        self.nodes.pop()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S, A> Default for StackFrontier<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

/// First in, first out, with a membership query over the enqueued states.
#[derive(Debug)]
pub struct QueueFrontier<S: Hash + Eq, A> {
    nodes: VecDeque<SearchNode<S, A>>,
    /// Number of enqueued nodes per state
    enqueued: HashMap<S, usize>,
}

impl<S: Hash + Eq + Clone, A> QueueFrontier<S, A> {
    pub fn new() -> Self {
        Self {
            nodes: VecDeque::new(),
            enqueued: HashMap::new(),
        }
    }

    pub fn push(&mut self, node: SearchNode<S, A>) {
        *self.enqueued.entry(node.state.clone()).or_insert(0) += 1;
        self.nodes.push_back(node);
    }

    pub fn pop(&mut self) -> Option<SearchNode<S, A>> {
        let node = self.nodes.pop_front()?;
        if let Some(count) = self.enqueued.get_mut(&node.state) {
            *count -= 1;
            if *count == 0 {
                self.enqueued.remove(&node.state);
            }
        }
        Some(node)
    }

    pub fn contains(&self, state: &S) -> bool {
        self.enqueued.contains_key(state)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S: Hash + Eq + Clone, A> Default for QueueFrontier<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cheapest path cost first. Every state is represented at most once, and the
/// path to an enqueued state can be replaced by a strictly cheaper one in
/// place.
#[derive(Debug)]
pub struct CostFrontier<S: Hash + Eq, A> {
    queue: PriorityQueue<S, Reverse<Cost>>,
    paths: HashMap<S, Vec<A>>,
}

impl<S: Hash + Eq + Clone, A> CostFrontier<S, A> {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            paths: HashMap::new(),
        }
    }

    /// Push a node whose state is not yet enqueued.
    pub fn push(&mut self, node: SearchNode<S, A>, cost: Cost) {
        debug_assert!(
            !self.contains(&node.state),
            "State is already in the frontier, use decrease_key instead"
        );
        self.queue.push(node.state.clone(), Reverse(cost));
        self.paths.insert(node.state, node.actions);
    }

    /// Replace the path to an enqueued state if the new one is strictly
    /// cheaper. Returns whether the replacement happened.
    pub fn decrease_key(&mut self, node: SearchNode<S, A>, cost: Cost) -> bool {
        match self.cost_of(&node.state) {
            Some(current) if cost < current => {
                self.queue.change_priority(&node.state, Reverse(cost));
                self.paths.insert(node.state, node.actions);
                true
            }
            _ => false,
        }
    }

    pub fn pop(&mut self) -> Option<(SearchNode<S, A>, Cost)> {
        let (state, Reverse(cost)) = self.queue.pop()?;
        let actions = self
            .paths
            .remove(&state)
            .expect("Every enqueued state has a path");
        Some((SearchNode { state, actions }, cost))
    }

    pub fn cost_of(&self, state: &S) -> Option<Cost> {
        self.queue.get_priority(state).map(|Reverse(cost)| *cost)
    }

    pub fn contains(&self, state: &S) -> bool {
        self.paths.contains_key(state)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<S: Hash + Eq + Clone, A> Default for CostFrontier<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cheapest `g + h` first. There is no decrease-key, a state pushed twice is
/// simply in the frontier twice, so the consumer has to skip stale entries.
#[derive(Debug)]
pub struct HeuristicFrontier<S, A> {
    queue: PriorityQueue<usize, Reverse<Cost>>,
    nodes: HashMap<usize, SearchNode<S, A>>,
    next_entry: usize,
}

impl<S, A> HeuristicFrontier<S, A> {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            nodes: HashMap::new(),
            next_entry: 0,
        }
    }

    pub fn push(&mut self, node: SearchNode<S, A>, f_value: Cost) {
        let entry = self.next_entry;
        self.next_entry += 1;
        self.queue.push(entry, Reverse(f_value));
        self.nodes.insert(entry, node);
    }

    pub fn pop(&mut self) -> Option<(SearchNode<S, A>, Cost)> {
        let (entry, Reverse(f_value)) = self.queue.pop()?;
        let node = self
            .nodes
            .remove(&entry)
            .expect("Every queue entry has a node");
        Some((node, f_value))
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<S, A> Default for HeuristicFrontier<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
