//! Page manager statistics tracking.

use std::fmt;

/// Outcome counters tallied by the page manager.
///
/// Every increment also bumps `total_requests`. [`reset`](Self::reset)
/// zeroes the four outcome counters but leaves `total_requests` running,
/// so it counts every request since construction.
///
/// # Example
/// ```
/// use pagesim::PageStatistics;
///
/// let mut stats = PageStatistics::new();
/// stats.increment_page_hit();
/// stats.increment_first_load();
/// assert_eq!(stats.snapshot().total_requests, 2);
///
/// stats.reset();
/// assert_eq!(stats.snapshot().page_hits, 0);
/// assert_eq!(stats.snapshot().total_requests, 2);
/// ```
#[derive(Debug, Default)]
pub struct PageStatistics {
    /// Accesses to a page resident in neither tier.
    first_loads: u64,

    /// Accesses to a page already in physical memory.
    page_hits: u64,

    /// Accesses to a page that had to come back from swap.
    page_faults: u64,

    /// Jobs aborted because both tiers were full.
    aborted_jobs: u64,

    /// Every counted request, across resets.
    total_requests: u64,
}

impl PageStatistics {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a page loaded for the first time.
    pub fn increment_first_load(&mut self) {
        self.first_loads += 1;
        self.total_requests += 1;
    }

    /// Record an access served from physical memory.
    pub fn increment_page_hit(&mut self) {
        self.page_hits += 1;
        self.total_requests += 1;
    }

    /// Record an access served from swap.
    pub fn increment_page_fault(&mut self) {
        self.page_faults += 1;
        self.total_requests += 1;
    }

    /// Record a job aborted for lack of memory.
    pub fn increment_aborted_jobs(&mut self) {
        self.aborted_jobs += 1;
        self.total_requests += 1;
    }

    /// Get a copy of the current counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            first_loads: self.first_loads,
            page_hits: self.page_hits,
            page_faults: self.page_faults,
            aborted_jobs: self.aborted_jobs,
            total_requests: self.total_requests,
        }
    }

    /// Zero the outcome counters. `total_requests` is kept.
    pub fn reset(&mut self) {
        self.first_loads = 0;
        self.page_hits = 0;
        self.page_faults = 0;
        self.aborted_jobs = 0;
    }
}

/// A point-in-time copy of [`PageStatistics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub first_loads: u64,
    pub page_hits: u64,
    pub page_faults: u64,
    pub aborted_jobs: u64,
    pub total_requests: u64,
}

impl StatsSnapshot {
    /// Fraction of placed accesses that were hits (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let placed = self.first_loads + self.page_hits + self.page_faults;
        if placed == 0 {
            0.0
        } else {
            self.page_hits as f64 / placed as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "First Load: {} Page Hits: {} Page Faults: {} Aborted Jobs: {}",
            self.first_loads, self.page_hits, self.page_faults, self.aborted_jobs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = PageStatistics::new();
        assert_eq!(stats.snapshot(), StatsSnapshot::default());
        assert_eq!(stats.snapshot().hit_rate(), 0.0);
    }

    #[test]
    fn test_each_increment_counts_a_request() {
        let mut stats = PageStatistics::new();
        stats.increment_first_load();
        stats.increment_page_hit();
        stats.increment_page_hit();
        stats.increment_page_fault();
        stats.increment_aborted_jobs();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.first_loads, 1);
        assert_eq!(snapshot.page_hits, 2);
        assert_eq!(snapshot.page_faults, 1);
        assert_eq!(snapshot.aborted_jobs, 1);
        assert_eq!(snapshot.total_requests, 5);
    }

    #[test]
    fn test_hit_rate() {
        let mut stats = PageStatistics::new();
        for _ in 0..3 {
            stats.increment_page_hit();
        }
        stats.increment_first_load();

        assert_eq!(stats.snapshot().hit_rate(), 0.75);
    }

    #[test]
    fn test_reset_keeps_total_requests() {
        let mut stats = PageStatistics::new();
        stats.increment_first_load();
        stats.increment_page_fault();
        stats.increment_aborted_jobs();

        stats.reset();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.first_loads, 0);
        assert_eq!(snapshot.page_faults, 0);
        assert_eq!(snapshot.aborted_jobs, 0);
        assert_eq!(snapshot.total_requests, 3);
    }

    #[test]
    fn test_stats_display() {
        let mut stats = PageStatistics::new();
        stats.increment_first_load();
        stats.increment_page_hit();

        let display = format!("{}", stats.snapshot());
        assert!(display.contains("First Load: 1"));
        assert!(display.contains("Page Hits: 1"));
        assert!(display.contains("Aborted Jobs: 0"));
    }
}
