//! pagesim - A two-tier LRU page replacement simulator.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Input (input/)  +  Reporting (report)            │   │
//! │  │     "job,page" records in → framed text report out      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Page Replacement (memory/)                    │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  first load | hit | fault (promote) | abort     │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │      PageManager + Page + PageStatistics                 │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Bounded LRU List (list/)                       │   │
//! │  │     arena of nodes + key → NodeId lookup                 │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Job, Error, config)
//! - [`list`] - The fixed-capacity LRU list both tiers are built on
//! - [`memory`] - The page manager and its statistics
//! - [`input`] - Job record parsing
//! - [`report`] - Read-only textual report
//!
//! # Quick Start
//! ```
//! use pagesim::{Job, PageManager};
//!
//! let mut manager = PageManager::new(2, 1);
//! manager.queue_jobs([Job::new(1, 1), Job::new(2, 1), Job::new(3, 1)]);
//! manager.queue_job(Job::new(1, 1));
//! manager.process().unwrap();
//!
//! let stats = manager.stats();
//! assert_eq!(stats.first_loads, 3);
//! assert_eq!(stats.page_faults, 1);
//! ```

pub mod common;
pub mod input;
pub mod list;
pub mod memory;
pub mod report;

// Re-export commonly used items at crate root for convenience
pub use common::config::TERMINATOR;
pub use common::{Error, Job, MemoryConfig, Result};

pub use memory::{Page, PageManager, PageStatistics, SharedPageManager, StatsSnapshot, Tier};
pub use report::SimulationReport;
