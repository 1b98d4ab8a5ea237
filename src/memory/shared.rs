//! Thread-safe wrapper around [`PageManager`].

use parking_lot::Mutex;

use crate::common::{Job, Result};
use crate::memory::{PageManager, StatsSnapshot};

/// A [`PageManager`] that can be shared between threads.
///
/// The whole manager is one serialization domain: every call holds the
/// lock for the full logical operation, so a `process` never interleaves
/// with another `process`, a queue or a reset.
///
/// # Thread Safety
/// - `inner`: `Mutex` - placement mutates both tiers and the lookup maps
///   in several steps
///
/// # Usage
/// ```
/// use std::sync::Arc;
/// use pagesim::{Job, SharedPageManager};
///
/// let manager = Arc::new(SharedPageManager::new(4, 4));
/// manager.queue_job(Job::new(1, 1));
/// manager.process().unwrap();
/// assert_eq!(manager.stats().first_loads, 1);
/// ```
#[derive(Debug)]
pub struct SharedPageManager {
    inner: Mutex<PageManager>,
}

impl SharedPageManager {
    /// Create a shared page manager with the given tier capacities.
    pub fn new(physical_capacity: usize, swap_capacity: usize) -> Self {
        Self::from_manager(PageManager::new(physical_capacity, swap_capacity))
    }

    /// Wrap an existing page manager.
    pub fn from_manager(manager: PageManager) -> Self {
        Self {
            inner: Mutex::new(manager),
        }
    }

    /// See [`PageManager::queue_job`].
    pub fn queue_job(&self, job: Job) {
        self.inner.lock().queue_job(job);
    }

    /// Queue a batch without letting other callers interleave records.
    pub fn queue_jobs<I: IntoIterator<Item = Job>>(&self, jobs: I) {
        self.inner.lock().queue_jobs(jobs);
    }

    /// See [`PageManager::process`].
    ///
    /// # Errors
    /// - `Error::CapacityExceeded` if a page cannot be placed at all
    pub fn process(&self) -> Result<()> {
        self.inner.lock().process()
    }

    /// See [`PageManager::unload_memory`].
    pub fn unload_memory(&self, job_id: i32) {
        self.inner.lock().unload_memory(job_id);
    }

    /// See [`PageManager::reset`].
    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// Get a snapshot of the outcome counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.inner.lock().stats()
    }

    /// Run `f` with exclusive access to the manager.
    pub fn with<R>(&self, f: impl FnOnce(&mut PageManager) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Consume the wrapper and return the manager.
    pub fn into_inner(self) -> PageManager {
        self.inner.into_inner()
    }
}
