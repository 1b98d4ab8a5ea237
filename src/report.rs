//! Read-only simulation report.
//!
//! The engine never formats anything itself; this module turns its
//! public state into the text the `pagesim` binary prints.

use std::fmt;

use crate::memory::{Page, PageManager, StatsSnapshot};

const BORDER_WIDTH: usize = 80;
const STATS_BORDER_WIDTH: usize = 15;
const LABEL_WIDTH: usize = 15;

/// Everything worth printing after a run, copied out of a [`PageManager`].
///
/// # Example
/// ```
/// use pagesim::{Job, PageManager, SimulationReport};
///
/// let mut manager = PageManager::new(2, 2);
/// manager.queue_job(Job::new(1, 1));
/// manager.process().unwrap();
///
/// let report = SimulationReport::from_manager(&manager);
/// assert!(report.to_string().contains("First Load     : 1"));
/// ```
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub job_count: usize,
    pub transaction_count: usize,
    pub stats: StatsSnapshot,
    pub physical: Vec<Page>,
    pub swap: Vec<Page>,
}

impl SimulationReport {
    /// Capture the counts, counters and tier contents of `manager`.
    pub fn from_manager(manager: &PageManager) -> Self {
        Self {
            job_count: manager.job_count(),
            transaction_count: manager.transaction_count(),
            stats: manager.stats(),
            physical: manager.physical_pages().copied().collect(),
            swap: manager.swap_pages().copied().collect(),
        }
    }
}

/// Write `title` centred between two rules of `frame` characters.
fn framed_header(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    width: usize,
    frame: char,
) -> fmt::Result {
    let border = frame.to_string().repeat(width);
    writeln!(f, "{}", border)?;
    writeln!(f, "{:^width$}", title, width = width)?;
    writeln!(f, "{}", border)
}

fn write_tier(f: &mut fmt::Formatter<'_>, title: &str, pages: &[Page]) -> fmt::Result {
    framed_header(f, title, BORDER_WIDTH, '=')?;
    for page in pages {
        writeln!(f, "{}", page)?;
    }
    writeln!(f, "END")
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        framed_header(f, "Page Replacement Simulation [LRU]", BORDER_WIDTH, '=')?;
        writeln!(
            f,
            "Jobs: {}  Transactions: {}",
            self.job_count, self.transaction_count
        )?;

        framed_header(f, "Statistics", STATS_BORDER_WIDTH, '*')?;
        let rows = [
            ("First Load", self.stats.first_loads),
            ("Page Hits", self.stats.page_hits),
            ("Page Faults", self.stats.page_faults),
            ("Aborted Jobs", self.stats.aborted_jobs),
        ];
        for (label, value) in rows {
            writeln!(f, "{:<width$}: {}", label, value, width = LABEL_WIDTH)?;
        }

        write_tier(f, "Physical Memory", &self.physical)?;
        write_tier(f, "Swap Memory", &self.swap)
    }
}
