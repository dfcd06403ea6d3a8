use crate::search::search_engines::SearchResult;
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

const LOG_INTERVAL: Duration = Duration::from_secs(10);

/// Limits on a single search. Searches are unbounded unless a caller opts in
/// to one of these.
#[derive(Debug)]
pub struct TerminationCondition {
    time_limit: Option<Duration>,
    node_limit: Option<usize>,
    memory_limit_mb: Option<usize>,
    start_time: Instant,
    /// Highest physical memory usage seen by any sample so far
    peak_memory_usage_mb: Option<usize>,
    last_log_time: Instant,
}

impl Default for TerminationCondition {
    fn default() -> Self {
        Self::unlimited()
    }
}

impl TerminationCondition {
    pub fn new(
        time_limit: Option<Duration>,
        node_limit: Option<usize>,
        memory_limit_mb: Option<usize>,
    ) -> Self {
        info!(
            time_limit = time_limit.map(|limit| limit.as_secs_f64()),
            node_limit,
            memory_limit_mb,
        );
        Self {
            time_limit,
            node_limit,
            memory_limit_mb,
            start_time: Instant::now(),
            peak_memory_usage_mb: None,
            last_log_time: Instant::now(),
        }
    }

    pub fn unlimited() -> Self {
        Self::new(None, None, None)
    }

    /// Sample the current physical memory usage and fold it into the peak.
    fn sample_memory_usage(&mut self) -> Option<usize> {
        let usage_mb = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(usage_mb);
        usage_mb
    }

    pub fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > LOG_INTERVAL {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn log(&mut self) {
        let memory_usage_mb = self.sample_memory_usage();
        info!(
            memory_usage_mb,
            time_elapsed = self.start_time.elapsed().as_secs_f64(),
        );
    }

    pub fn finalise(&mut self) {
        info!(
            peak_recorded_memory_usage_mb = self.peak_memory_usage_mb,
            total_time_used = self.start_time.elapsed().as_secs_f64(),
        );
    }

    /// Checked once per expansion, with the number of nodes expanded so far.
    /// Memory is only sampled when a memory limit is set.
    pub fn should_terminate<A>(&mut self, expanded_nodes: usize) -> Option<SearchResult<A>> {
        if self.node_limit.is_some_and(|limit| expanded_nodes >= limit) {
            return Some(SearchResult::NodeLimitExceeded);
        }
        if self
            .time_limit
            .is_some_and(|limit| self.start_time.elapsed() > limit)
        {
            return Some(SearchResult::TimeLimitExceeded);
        }
        if let Some(memory_limit_mb) = self.memory_limit_mb {
            if self
                .sample_memory_usage()
                .is_some_and(|usage_mb| usage_mb > memory_limit_mb)
            {
                return Some(SearchResult::MemoryLimitExceeded);
            }
        }
        None
    }
}
