use std::time::{Duration, Instant};

use super::constants::CLOCK_SAMPLE_INTERVAL;
use crate::board::error::SearchError;

/// Per-search node counter and deadline.
///
/// The wall clock is read once every [`CLOCK_SAMPLE_INTERVAL`] nodes; the
/// node limit, when set, is checked on every node.
#[derive(Debug, Clone)]
pub struct SearchClock {
    start_time: Instant,
    deadline: Option<Instant>,
    node_limit: u64,
    nodes: u64,
}

impl SearchClock {
    /// `node_limit` of 0 means unlimited.
    #[must_use]
    pub fn new(time_limit: Option<Duration>, node_limit: u64) -> Self {
        let start_time = Instant::now();
        SearchClock {
            start_time,
            deadline: time_limit.map(|limit| start_time + limit),
            node_limit,
            nodes: 0,
        }
    }

    /// Count one node.
    ///
    /// # Errors
    /// [`SearchError::Timeout`] once the node limit is exceeded or, on a
    /// sampling node, the deadline has passed.
    #[inline]
    pub fn tick(&mut self) -> Result<(), SearchError> {
        self.nodes += 1;
        if self.node_limit > 0 && self.nodes > self.node_limit {
            return Err(SearchError::Timeout);
        }
        if self.nodes % CLOCK_SAMPLE_INTERVAL == 0 && self.past_deadline() {
            return Err(SearchError::Timeout);
        }
        Ok(())
    }

    /// Whether a new iteration may start.
    #[must_use]
    pub fn expired(&self) -> bool {
        (self.node_limit > 0 && self.nodes >= self.node_limit) || self.past_deadline()
    }

    fn past_deadline(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}
