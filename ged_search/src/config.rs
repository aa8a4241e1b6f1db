//! Configuration for the edit distance search.
//!
//! The defaults run the search to completion without progress output, which
//! is what callers want for small schema graphs. Larger inputs can bound the
//! wall-clock time and keep the best mapping found so far.
//!
//! Quick examples
//!
//! Unbounded search (default):
//! ```
//! use ged_search::SearchConfig;
//! let cfg = SearchConfig::default();
//! assert!(cfg.time_limit.is_none());
//! ```
//!
//! Stop after two seconds and log progress every 10 000 pops:
//! ```
//! use std::time::Duration;
//! use ged_search::SearchConfig;
//! let cfg = SearchConfig::builder()
//!     .time_limit(Duration::from_secs(2))
//!     .progress_interval(10_000)
//!     .build();
//! assert_eq!(cfg.progress_interval, Some(10_000));
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Global search configuration.
///
/// - time_limit:
///     - None => run until the queue is empty; the result is exhaustive.
///     - Some(d) => checked every time a node is popped. On expiry the best
///       full mapping so far is returned with `exhaustive = false`.
/// - progress_interval:
///     - Some(n) => emit a `debug!` progress event every `n` pops.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Wall-clock budget for one search.
    pub time_limit: Option<Duration>,
    /// Pops between two progress events.
    pub progress_interval: Option<u64>,
}

impl SearchConfig {
    #[must_use]
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }

    /// True once `elapsed` has used up the time limit.
    #[must_use]
    pub fn deadline_passed(&self, elapsed: Duration) -> bool {
        self.time_limit.is_some_and(|limit| elapsed >= limit)
    }

    /// True if the `popped`-th pop should report progress.
    #[must_use]
    pub fn reports_progress_at(&self, popped: u64) -> bool {
        self.progress_interval
            .is_some_and(|every| every > 0 && popped % every == 0)
    }
}

#[derive(Clone, Debug, Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    #[must_use]
    pub const fn time_limit(mut self, limit: Duration) -> Self {
        self.config.time_limit = Some(limit);
        self
    }

    #[must_use]
    pub const fn progress_interval(mut self, every: u64) -> Self {
        self.config.progress_interval = Some(every);
        self
    }

    #[must_use]
    pub const fn build(self) -> SearchConfig {
        self.config
    }
}
