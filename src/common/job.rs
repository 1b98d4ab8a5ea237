//! Job record type.

use std::fmt;

use crate::common::config::TERMINATOR;

/// One record of the job stream: "job `job_id` touches page `page_id`".
///
/// Equality and hashing cover both fields, so a `Job` doubles as the
/// identity of a logical page.
///
/// # Example
/// ```
/// use pagesim::Job;
///
/// let job = Job::new(1, 4);
/// assert!(!job.is_terminator());
/// assert!(Job::terminator(1).is_terminator());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Job {
    pub job_id: i32,
    pub page_id: i32,
}

impl Job {
    /// Create a new Job record.
    #[inline]
    pub fn new(job_id: i32, page_id: i32) -> Self {
        Job { job_id, page_id }
    }

    /// Create the record that releases all memory held by `job_id`.
    #[inline]
    pub fn terminator(job_id: i32) -> Self {
        Job::new(job_id, TERMINATOR)
    }

    /// Check if this record is a terminator rather than a page access.
    #[inline]
    pub fn is_terminator(&self) -> bool {
        self.page_id == TERMINATOR
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_terminator() {
            write!(f, "Job(#{}, TERMINATOR)", self.job_id)
        } else {
            write!(f, "Job(#{}, page {})", self.job_id, self.page_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_job_equality() {
        assert_eq!(Job::new(1, 2), Job::new(1, 2));
        assert_ne!(Job::new(1, 2), Job::new(1, 3));
        assert_ne!(Job::new(1, 2), Job::new(2, 2));
    }

    #[test]
    fn test_job_hash_uses_both_fields() {
        let mut set = HashSet::new();
        set.insert(Job::new(1, 2));
        set.insert(Job::new(1, 2));
        set.insert(Job::new(2, 1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_terminator() {
        let job = Job::terminator(7);
        assert_eq!(job.job_id, 7);
        assert_eq!(job.page_id, TERMINATOR);
        assert!(job.is_terminator());
        assert!(!Job::new(7, 0).is_terminator());
    }

    #[test]
    fn test_job_display() {
        assert_eq!(format!("{}", Job::new(3, 9)), "Job(#3, page 9)");
        assert_eq!(format!("{}", Job::terminator(3)), "Job(#3, TERMINATOR)");
    }
}
