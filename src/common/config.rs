//! Configuration constants for pagesim.

/// Reserved page id meaning "release all memory held by this job".
///
/// A record `(job_id, TERMINATOR)` never becomes a page access.
pub const TERMINATOR: i32 = -999;

/// Default number of pages the physical tier can hold.
pub const DEFAULT_PHYSICAL_CAPACITY: usize = 10;

/// Default number of pages the swap tier can hold.
pub const DEFAULT_SWAP_CAPACITY: usize = 15;

/// Value of the logical clock before the first access is stamped.
pub const INITIAL_TIMESTAMP: u64 = 0;

/// Tier sizes for a [`PageManager`](crate::PageManager).
///
/// A capacity of zero disables that tier.
///
/// # Example
/// ```
/// use pagesim::MemoryConfig;
///
/// let config = MemoryConfig::new(2, 1);
/// assert_eq!(config.total_capacity(), 3);
/// assert_eq!(MemoryConfig::default().physical_capacity, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryConfig {
    /// Capacity of the fast tier.
    pub physical_capacity: usize,

    /// Capacity of the overflow tier.
    pub swap_capacity: usize,
}

impl MemoryConfig {
    /// Create a config with explicit tier capacities.
    pub fn new(physical_capacity: usize, swap_capacity: usize) -> Self {
        Self {
            physical_capacity,
            swap_capacity,
        }
    }

    /// Number of pages both tiers can hold together.
    pub fn total_capacity(&self) -> usize {
        self.physical_capacity + self.swap_capacity
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PHYSICAL_CAPACITY, DEFAULT_SWAP_CAPACITY)
    }
}
