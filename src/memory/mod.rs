//! Two-tier page replacement.
//!
//! Physical memory is the fast tier, swap the overflow tier. Both are
//! [`BoundedList`](crate::list::BoundedList)s kept in LRU order.
//!
//! # Components
//! - [`PageManager`] - The placement engine
//! - [`SharedPageManager`] - Mutex-guarded engine for concurrent callers
//! - [`Page`] - One stamped page access
//! - [`PageStatistics`] - Outcome counters

mod page;
mod page_manager;
mod shared;
mod stats;

pub use page::Page;
pub use page_manager::{PageManager, Tier};
pub use shared::SharedPageManager;
pub use stats::{PageStatistics, StatsSnapshot};
