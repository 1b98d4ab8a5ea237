//! Job record input.
//!
//! Turns `job_id,page_id` text into [`Job`](crate::Job) records:
//! - [`read_jobs`] - From any buffered reader
//! - [`read_jobs_from_file`] - From a file path
//! - [`parse_record`] - One line at a time

mod job_reader;

pub use job_reader::{parse_record, read_jobs, read_jobs_from_file};
