//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and [`MemoryConfig`]
//! - Error types
//! - The [`Job`] record

pub mod config;
pub mod error;
mod job;

pub use config::MemoryConfig;
pub use error::{Error, Result};
pub use job::Job;
