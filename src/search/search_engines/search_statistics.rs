use crate::search::HeuristicValue;
use ordered_float::Float;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: usize,
    /// Number of successors generated, pushed or not
    generated_nodes: usize,
    /// Number of nodes pushed onto the frontier
    pushed_nodes: usize,
    /// Number of enqueued nodes whose path was replaced by a cheaper one
    decreased_keys: usize,
    /// Number of popped nodes discarded because their state was explored
    stale_pops: usize,
    /// Number of heuristic evaluations
    evaluated_nodes: usize,
    /// Best heuristic value found so far
    best_heuristic_value: HeuristicValue,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        debug!("starting search");
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            pushed_nodes: 0,
            decreased_keys: 0,
            stale_pops: 0,
            evaluated_nodes: 0,
            best_heuristic_value: HeuristicValue::infinity(),
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn register_heuristic_value(&mut self, heuristic_value: HeuristicValue) {
        self.evaluated_nodes += 1;
        if heuristic_value < self.best_heuristic_value {
            self.best_heuristic_value = heuristic_value;
            debug!(best_heuristic_value = self.best_heuristic_value.into_inner());
        }
        self.log_if_needed();
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes;
    }

    pub fn increment_pushed_nodes(&mut self) {
        self.pushed_nodes += 1;
    }

    pub fn increment_decreased_keys(&mut self) {
        self.decreased_keys += 1;
    }

    pub fn increment_stale_pops(&mut self) {
        self.stale_pops += 1;
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn pushed_nodes(&self) -> usize {
        self.pushed_nodes
    }

    pub fn decreased_keys(&self) -> usize {
        self.decreased_keys
    }

    pub fn stale_pops(&self) -> usize {
        self.stale_pops
    }

    pub fn evaluated_nodes(&self) -> usize {
        self.evaluated_nodes
    }

    pub fn search_duration(&self) -> Duration {
        self.search_start_time.elapsed()
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            pushed_nodes = self.pushed_nodes,
            decreased_keys = self.decreased_keys,
            stale_pops = self.stale_pops,
            evaluated_nodes = self.evaluated_nodes,
            best_heuristic_value = self.best_heuristic_value.into_inner(),
        );
    }

    pub fn finalise_search(&self) {
        debug!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}
