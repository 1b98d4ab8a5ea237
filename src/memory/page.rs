//! Page access record.

use std::fmt;

use crate::common::Job;
use crate::list::Keyed;

/// One access to a logical page, stamped with the logical clock.
///
/// A fresh `Page` is created for every queued access. Its identity is its
/// [`Job`]: two pages with the same job are the same logical page no
/// matter their timestamps, which is what tier lookups key on.
///
/// # Example
/// ```
/// use pagesim::{Job, Page};
/// use pagesim::list::Keyed;
///
/// let a = Page::new(Job::new(1, 1), 0);
/// let b = Page::new(Job::new(1, 1), 5);
/// assert_eq!(a.key(), b.key());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Page {
    job: Job,
    timestamp: u64,
}

impl Page {
    /// Create a page for `job`, last touched at `timestamp`.
    pub fn new(job: Job, timestamp: u64) -> Self {
        Self { job, timestamp }
    }

    /// Logical page this record stands for.
    #[inline]
    pub fn job(&self) -> Job {
        self.job
    }

    /// Job that owns the page.
    #[inline]
    pub fn job_id(&self) -> i32 {
        self.job.job_id
    }

    /// Logical time of the last touch.
    #[inline]
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Record a touch at `timestamp`.
    pub fn touch(&mut self, timestamp: u64) {
        self.timestamp = timestamp;
    }
}

impl Keyed for Page {
    type Key = Job;

    #[inline]
    fn key(&self) -> Job {
        self.job
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#: {}, Page: {} (t={})",
            self.job.job_id, self.job.page_id, self.timestamp
        )
    }
}
