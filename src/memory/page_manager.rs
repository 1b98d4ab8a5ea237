//! Page Manager - the two-tier page replacement engine.
//!
//! The [`PageManager`] provides:
//! - A FIFO queue of job records
//! - Placement of each access into physical memory or swap
//! - Strict LRU demotion/promotion between the tiers
//! - Bulk release of a job's pages (terminator records and aborts)

use std::collections::{HashMap, HashSet, VecDeque};
use std::io::BufRead;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::common::config::INITIAL_TIMESTAMP;
use crate::common::{Error, Job, MemoryConfig, Result};
use crate::input;
use crate::list::BoundedList;
use crate::memory::{Page, PageStatistics, StatsSnapshot};

/// Which tier a page is resident in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Physical,
    Swap,
}

/// How a single access was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// Resident in neither tier; appended to physical memory.
    FirstLoad,
    /// Already in physical memory; moved to the back.
    Hit,
    /// Brought back from swap to the back of physical memory.
    Fault,
    /// Both tiers were full; the job was aborted.
    Aborted,
}

/// Simulates paging for a batch of jobs over two LRU tiers.
///
/// # Architecture
/// ```text
/// ┌─────────────────────────────────────────────────────────────┐
/// │                        PageManager                          │
/// │  ┌──────────────┐                                           │
/// │  │    queue     │  process()                                │
/// │  │VecDeque<Job> │──────────┐                                │
/// │  └──────────────┘          ▼                                │
/// │                     placement decision                      │
/// │                      │            ▲                         │
/// │            append/hit│            │fault (promote)          │
/// │                      ▼            │                         │
/// │  ┌───────────────────────┐  demote  ┌──────────────────────┐│
/// │  │ physical: BoundedList │ ───────▶ │ swap: BoundedList    ││
/// │  │ front=LRU   back=MRU  │          │ front=LRU  back=MRU  ││
/// │  └───────────────────────┘          └──────────────────────┘│
/// │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐       │
/// │  │  job_pages   │  │   aborted    │  │    stats     │       │
/// │  │ id → [Page]  │  │ HashSet<i32> │  │PageStatistics│       │
/// │  └──────────────┘  └──────────────┘  └──────────────┘       │
/// └─────────────────────────────────────────────────────────────┘
/// ```
///
/// # Invariants
/// - A logical page is resident in at most one tier.
/// - The front of each tier is its least recently touched page.
/// - Once a job is aborted, none of its pages is placed again.
///
/// # Usage
/// ```
/// use pagesim::{Job, PageManager};
///
/// let mut manager = PageManager::new(2, 1);
/// manager.queue_jobs([Job::new(1, 1), Job::new(2, 1), Job::new(3, 1)]);
/// manager.process().unwrap();
///
/// let swap: Vec<_> = manager.swap_pages().map(|p| p.job_id()).collect();
/// assert_eq!(swap, vec![1]);
/// ```
#[derive(Debug)]
pub struct PageManager {
    /// Fast tier.
    physical: BoundedList<Page>,

    /// Overflow tier.
    swap: BoundedList<Page>,

    /// Records waiting for `process`.
    queue: VecDeque<Job>,

    /// Every page ever allocated, per job id.
    job_pages: HashMap<i32, Vec<Page>>,

    /// Jobs that will never be placed again.
    aborted: HashSet<i32>,

    /// Next value of the logical clock.
    timestamp: u64,

    /// Outcome counters.
    stats: PageStatistics,

    /// Distinct non-terminator job ids queued.
    job_count: usize,

    /// Records queued, terminators included.
    transaction_count: usize,

    config: MemoryConfig,
}

impl PageManager {
    /// Create a page manager with the given tier capacities.
    ///
    /// A capacity of zero disables that tier.
    pub fn new(physical_capacity: usize, swap_capacity: usize) -> Self {
        Self::with_config(MemoryConfig::new(physical_capacity, swap_capacity))
    }

    /// Create a page manager from a [`MemoryConfig`].
    pub fn with_config(config: MemoryConfig) -> Self {
        Self {
            physical: BoundedList::new(config.physical_capacity),
            swap: BoundedList::new(config.swap_capacity),
            queue: VecDeque::new(),
            job_pages: HashMap::with_capacity(config.total_capacity()),
            aborted: HashSet::new(),
            timestamp: INITIAL_TIMESTAMP,
            stats: PageStatistics::new(),
            job_count: 0,
            transaction_count: 0,
            config,
        }
    }

    // ========================================================================
    // Public API: Queueing
    // ========================================================================

    /// Add a record to the back of the queue.
    ///
    /// The first record seen for a job id registers an empty page list.
    pub fn queue_job(&mut self, job: Job) {
        self.queue.push_back(job);
        self.transaction_count += 1;

        if job.is_terminator() || self.job_pages.contains_key(&job.job_id) {
            return;
        }

        self.job_pages.insert(job.job_id, Vec::new());
        self.job_count += 1;
    }

    /// Queue every record from `jobs` in order.
    pub fn queue_jobs<I: IntoIterator<Item = Job>>(&mut self, jobs: I) {
        for job in jobs {
            self.queue_job(job);
        }
    }

    /// Parse records from `reader` and queue them.
    ///
    /// Records are added to whatever is already queued, and the job and
    /// transaction counts keep accumulating. Nothing is queued unless every line parses. Returns the number of
    /// records queued.
    ///
    /// # Errors
    /// - `Error::MalformedRecord` for an unparsable line
    /// - `Error::Io` if reading fails
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let jobs = input::read_jobs(reader)?;
        let count = jobs.len();
        self.queue_jobs(jobs);
        Ok(count)
    }

    /// Parse records from the file at `path` and queue them.
    ///
    /// # Errors
    /// - `Error::Io` if the file cannot be opened or read
    /// - `Error::MalformedRecord` for an unparsable line
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let jobs = input::read_jobs_from_file(path)?;
        let count = jobs.len();
        self.queue_jobs(jobs);
        Ok(count)
    }

    // ========================================================================
    // Public API: Processing
    // ========================================================================

    /// Drain the queue in FIFO order, placing every access.
    ///
    /// Records of aborted jobs are skipped. A terminator releases every
    /// page recorded for its job.
    ///
    /// # Errors
    /// - `Error::CapacityExceeded` if a page cannot be placed at all, which
    ///   only happens when physical memory has capacity zero
    pub fn process(&mut self) -> Result<()> {
        let pending = self.queue.len();

        while let Some(job) = self.queue.pop_front() {
            if self.aborted.contains(&job.job_id) {
                continue;
            }

            if job.is_terminator() {
                self.unload_memory(job.job_id);
                continue;
            }

            self.ensure_placeable(&job)?;
            let page = Page::new(job, self.next_timestamp());
            self.job_pages.entry(job.job_id).or_default().push(page);
            let placement = self.load_page(page)?;
            debug!(job = %job, ?placement, "Page placed");
        }

        info!(
            records = pending,
            stats = %self.stats.snapshot(),
            "Job queue processed"
        );
        Ok(())
    }

    /// Remove every page recorded for `job_id` from whichever tier holds it.
    pub fn unload_memory(&mut self, job_id: i32) {
        let Some(pages) = self.job_pages.get(&job_id) else {
            return;
        };

        let mut released = 0usize;
        for page in pages {
            if self.physical.remove_by_value(page).is_some() {
                released += 1;
            }
            if self.swap.remove_by_value(page).is_some() {
                released += 1;
            }
        }

        debug!(job_id, released, "Unloaded job memory");
    }

    /// Return to the freshly constructed state, keeping the capacities.
    ///
    /// The statistics' `total_requests` keeps counting across resets.
    pub fn reset(&mut self) {
        self.swap.clear();
        self.physical.clear();
        self.queue.clear();
        self.job_pages.clear();
        self.aborted.clear();
        self.stats.reset();
        self.timestamp = INITIAL_TIMESTAMP;
        self.job_count = 0;
        self.transaction_count = 0;
    }

    // ========================================================================
    // Public API: Stats and info
    // ========================================================================

    /// Get a snapshot of the outcome counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Get the tier capacities.
    pub fn config(&self) -> MemoryConfig {
        self.config
    }

    /// Get the number of distinct jobs queued.
    pub fn job_count(&self) -> usize {
        self.job_count
    }

    /// Get the number of records queued, terminators included.
    pub fn transaction_count(&self) -> usize {
        self.transaction_count
    }

    /// Number of records waiting for `process`.
    pub fn pending_jobs(&self) -> usize {
        self.queue.len()
    }

    /// Both tiers full: the next first load aborts its job.
    pub fn is_memory_full(&self) -> bool {
        self.physical.is_full() && self.swap.is_full()
    }

    /// Check if physical memory has no free slot.
    pub fn is_physical_full(&self) -> bool {
        self.physical.is_full()
    }

    /// Check if swap memory has no free slot.
    pub fn is_swap_full(&self) -> bool {
        self.swap.is_full()
    }

    /// Check if `job_id` was aborted for lack of memory.
    pub fn is_aborted(&self, job_id: i32) -> bool {
        self.aborted.contains(&job_id)
    }

    /// Tier currently holding the logical page `job`.
    pub fn locate(&self, job: &Job) -> Option<Tier> {
        if self.physical.contains_key(job) {
            Some(Tier::Physical)
        } else if self.swap.contains_key(job) {
            Some(Tier::Swap)
        } else {
            None
        }
    }

    /// Physical memory from least to most recently used.
    pub fn physical_pages(&self) -> impl Iterator<Item = &Page> + '_ {
        self.physical.iter()
    }

    /// Swap memory from least to most recently used.
    pub fn swap_pages(&self) -> impl Iterator<Item = &Page> + '_ {
        self.swap.iter()
    }

    /// Every page allocated for `job_id`, in access order.
    pub fn job_pages(&self, job_id: i32) -> Option<&[Page]> {
        self.job_pages.get(&job_id).map(Vec::as_slice)
    }

    // ========================================================================
    // Internal: Placement decision
    // ========================================================================

    /// Fail before any state changes if a first load for `job` has no tier
    /// to land in.
    fn ensure_placeable(&self, job: &Job) -> Result<()> {
        let first_load = self.locate(job).is_none() && !self.is_memory_full();
        if first_load && self.physical.capacity() == 0 {
            return Err(Error::CapacityExceeded { capacity: 0 });
        }
        Ok(())
    }

    fn next_timestamp(&mut self) -> u64 {
        let timestamp = self.timestamp;
        self.timestamp += 1;
        timestamp
    }

    /// Route one access to the right tier.
    ///
    /// Only a page resident in neither tier needs a free slot somewhere, so
    /// only a first load can abort its job. A fault trades places with
    /// physical memory's LRU page and fits even when both tiers are full.
    fn load_page(&mut self, page: Page) -> Result<Placement> {
        let job = page.job();
        match self.locate(&job) {
            None if self.is_memory_full() => {
                self.abort(page);
                Ok(Placement::Aborted)
            }
            None => {
                self.stats.increment_first_load();
                if self.physical.is_full() {
                    self.demote()?;
                }
                self.physical.append(page)?;
                Ok(Placement::FirstLoad)
            }
            Some(Tier::Physical) => {
                self.stats.increment_page_hit();
                if let Some(id) = self.physical.find_key(&job) {
                    if let Some(resident) = self.physical.get_mut(id) {
                        resident.touch(page.timestamp());
                    }
                    self.physical.move_to_back(id);
                }
                Ok(Placement::Hit)
            }
            Some(Tier::Swap) => {
                self.stats.increment_page_fault();
                self.promote(page)?;
                Ok(Placement::Fault)
            }
        }
    }

    /// Move physical memory's LRU page to the back of swap.
    fn demote(&mut self) -> Result<()> {
        if self.swap.is_full() {
            return Err(Error::CapacityExceeded {
                capacity: self.swap.capacity(),
            });
        }

        if let Some(victim) = self.physical.pop_front() {
            debug!(job = %victim.job(), "Demoting page to swap");
            self.swap.append(victim)?;
        }
        Ok(())
    }

    /// Move `page` from swap to the back of physical memory, demoting
    /// physical memory's LRU page into the slot it leaves behind.
    fn promote(&mut self, page: Page) -> Result<()> {
        let Some(mut resident) = self.swap.remove_by_value(&page) else {
            return Ok(());
        };
        debug!(job = %resident.job(), "Promoting page from swap");

        if self.physical.is_full() {
            self.demote()?;
        }
        resident.touch(page.timestamp());
        self.physical.append(resident)?;
        Ok(())
    }

    fn abort(&mut self, page: Page) {
        let job_id = page.job_id();
        warn!(
            job_id,
            page_id = page.job().page_id,
            "Out of memory, aborting job"
        );

        self.aborted.insert(job_id);
        self.unload_memory(job_id);
        self.stats.increment_aborted_jobs();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jobs_in(pages: impl Iterator<Item = Job>) -> Vec<(i32, i32)> {
        pages.map(|job| (job.job_id, job.page_id)).collect()
    }

    fn physical(manager: &PageManager) -> Vec<(i32, i32)> {
        jobs_in(manager.physical_pages().map(Page::job))
    }

    fn swap(manager: &PageManager) -> Vec<(i32, i32)> {
        jobs_in(manager.swap_pages().map(Page::job))
    }

    #[test]
    fn test_queue_job_counts() {
        let mut manager = PageManager::new(2, 2);
        manager.queue_job(Job::new(1, 1));
        manager.queue_job(Job::new(1, 2));
        manager.queue_job(Job::new(2, 1));
        manager.queue_job(Job::terminator(3));

        assert_eq!(manager.job_count(), 2);
        assert_eq!(manager.transaction_count(), 4);
        assert_eq!(manager.pending_jobs(), 4);
        assert_eq!(manager.job_pages(1).map(<[Page]>::len), Some(0));
        assert!(manager.job_pages(3).is_none());
    }

    #[test]
    fn test_first_load() {
        let mut manager = PageManager::new(2, 2);
        manager.queue_job(Job::new(1, 1));
        manager.process().unwrap();

        assert_eq!(physical(&manager), vec![(1, 1)]);
        assert_eq!(manager.stats().first_loads, 1);
        assert_eq!(manager.locate(&Job::new(1, 1)), Some(Tier::Physical));
        assert_eq!(manager.pending_jobs(), 0);
    }

    #[test]
    fn test_hit_moves_to_back_and_touches() {
        let mut manager = PageManager::new(3, 1);
        manager.queue_jobs([Job::new(1, 1), Job::new(2, 1), Job::new(1, 1)]);
        manager.process().unwrap();

        assert_eq!(physical(&manager), vec![(2, 1), (1, 1)]);
        assert_eq!(manager.stats().page_hits, 1);

        let back = manager.physical_pages().last().unwrap();
        assert_eq!(back.timestamp(), 2);
    }

    #[test]
    fn test_demote_lru_on_full_physical() {
        let mut manager = PageManager::new(2, 2);
        manager.queue_jobs([Job::new(1, 1), Job::new(1, 2), Job::new(1, 3)]);
        manager.process().unwrap();

        assert_eq!(physical(&manager), vec![(1, 2), (1, 3)]);
        assert_eq!(swap(&manager), vec![(1, 1)]);
    }

    #[test]
    fn test_fault_with_room_in_physical() {
        let mut manager = PageManager::new(2, 2);
        manager.queue_jobs([Job::new(1, 1), Job::new(1, 2), Job::new(1, 3)]);
        manager.process().unwrap();

        // Free a physical slot, then touch the swapped page
        manager.physical.remove_by_value(&Page::new(Job::new(1, 2), 0));
        manager.queue_job(Job::new(1, 1));
        manager.process().unwrap();

        assert_eq!(physical(&manager), vec![(1, 3), (1, 1)]);
        assert!(swap(&manager).is_empty());
        assert_eq!(manager.stats().page_faults, 1);
    }

    #[test]
    fn test_load_page_placements() {
        let mut manager = PageManager::new(1, 1);
        let page = |job_id: i32, timestamp: u64| Page::new(Job::new(job_id, 1), timestamp);

        assert_eq!(manager.load_page(page(1, 0)).unwrap(), Placement::FirstLoad);
        assert_eq!(manager.load_page(page(1, 1)).unwrap(), Placement::Hit);
        assert_eq!(manager.load_page(page(2, 2)).unwrap(), Placement::FirstLoad);
        assert!(manager.is_memory_full());

        // A fault swaps places with physical memory's LRU page
        assert_eq!(manager.load_page(page(1, 3)).unwrap(), Placement::Fault);
        assert_eq!(physical(&manager), vec![(1, 1)]);
        assert_eq!(swap(&manager), vec![(2, 1)]);

        // A hit needs no free slot either
        assert_eq!(manager.load_page(page(1, 4)).unwrap(), Placement::Hit);

        // A brand new page has nowhere to go
        assert_eq!(manager.load_page(page(3, 5)).unwrap(), Placement::Aborted);
        assert!(manager.is_aborted(3));
        assert!(!manager.is_aborted(1));
    }

    #[test]
    fn test_terminator_for_unknown_job_is_noop() {
        let mut manager = PageManager::new(1, 1);
        manager.queue_jobs([Job::new(1, 1), Job::terminator(9)]);
        manager.process().unwrap();

        assert_eq!(physical(&manager), vec![(1, 1)]);
    }

    #[test]
    fn test_process_twice_does_not_replay() {
        let mut manager = PageManager::new(2, 2);
        manager.queue_job(Job::new(1, 1));
        manager.process().unwrap();
        manager.process().unwrap();

        assert_eq!(manager.stats().first_loads, 1);
        assert_eq!(manager.stats().total_requests, 1);
    }

    #[test]
    fn test_abort_when_both_tiers_full() {
        let mut manager = PageManager::new(1, 1);
        manager.queue_jobs([
            Job::new(1, 1),
            Job::new(2, 1),
            Job::new(3, 1),
            Job::new(3, 2),
        ]);
        manager.process().unwrap();

        assert!(manager.is_aborted(3));
        assert_eq!(manager.stats().aborted_jobs, 1);
        assert_eq!(physical(&manager), vec![(2, 1)]);
        assert_eq!(swap(&manager), vec![(1, 1)]);
    }

    #[test]
    fn test_abort_evicts_pages_already_loaded() {
        let mut manager = PageManager::new(1, 1);
        manager.queue_jobs([Job::new(1, 1), Job::new(1, 2), Job::new(1, 3)]);
        manager.process().unwrap();

        assert!(manager.is_aborted(1));
        assert!(physical(&manager).is_empty());
        assert!(swap(&manager).is_empty());
        assert_eq!(manager.stats().first_loads, 2);
        assert_eq!(manager.stats().aborted_jobs, 1);
    }

    #[test]
    fn test_zero_capacity_tiers_abort_everything() {
        let mut manager = PageManager::new(0, 0);
        manager.queue_jobs([Job::new(1, 1), Job::new(2, 1)]);
        manager.process().unwrap();

        assert_eq!(manager.stats().aborted_jobs, 2);
        assert!(manager.is_memory_full());
    }

    #[test]
    fn test_zero_capacity_physical_surfaces_error() {
        let mut manager = PageManager::new(0, 2);
        manager.queue_job(Job::new(1, 1));

        let result = manager.process();
        assert!(matches!(result, Err(Error::CapacityExceeded { capacity: 0 })));
        assert!(swap(&manager).is_empty());
    }

    #[test]
    fn test_failed_placement_leaves_state_untouched() {
        let mut manager = PageManager::new(0, 2);
        manager.queue_jobs([Job::new(1, 1), Job::new(2, 1)]);

        assert!(manager.process().is_err());
        assert_eq!(manager.stats(), StatsSnapshot::default());
        assert_eq!(manager.job_pages(1).map(<[Page]>::len), Some(0));
        assert_eq!(manager.pending_jobs(), 1);
        assert_eq!(manager.physical_pages().count(), 0);
        assert_eq!(manager.swap_pages().count(), 0);
    }

    #[test]
    fn test_zero_capacity_swap() {
        let mut manager = PageManager::new(2, 0);
        manager.queue_jobs([Job::new(1, 1), Job::new(1, 2), Job::new(2, 1)]);
        manager.process().unwrap();

        // Physical fills, then the next first load finds both tiers full
        assert_eq!(manager.stats().first_loads, 2);
        assert!(manager.is_aborted(2));
        assert_eq!(physical(&manager), vec![(1, 1), (1, 2)]);
    }

    #[test]
    fn test_timestamps_are_per_access() {
        let mut manager = PageManager::new(4, 4);
        manager.queue_jobs([Job::new(1, 1), Job::terminator(1), Job::new(1, 1)]);
        manager.process().unwrap();

        let stamps: Vec<u64> = manager
            .job_pages(1)
            .unwrap()
            .iter()
            .map(Page::timestamp)
            .collect();
        assert_eq!(stamps, vec![0, 1]);
    }
}
