//! Job record parsing.
//!
//! Records are `job_id,page_id` lines. A page id of
//! [`TERMINATOR`](crate::common::config::TERMINATOR) marks the end of a job.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::common::{Error, Job, Result};

/// Parse one line. Whitespace-only lines yield `None`.
///
/// `line_number` is 1-based and only used for error reporting.
///
/// # Errors
/// - `Error::MalformedRecord` if the line is not two comma-separated integers
pub fn parse_record(line: &str, line_number: usize) -> Result<Option<Job>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 2 {
        return Err(Error::MalformedRecord {
            line: line_number,
            reason: format!("expected 2 fields, found {}", fields.len()),
        });
    }

    let job_id = parse_field(fields[0], "job id", line_number)?;
    let page_id = parse_field(fields[1], "page id", line_number)?;

    Ok(Some(Job::new(job_id, page_id)))
}

fn parse_field(field: &str, name: &str, line_number: usize) -> Result<i32> {
    field.parse::<i32>().map_err(|e| Error::MalformedRecord {
        line: line_number,
        reason: format!("invalid {} {:?}: {}", name, field, e),
    })
}

/// Read every record from `reader`.
///
/// The whole read fails on the first malformed line; no partial batch is
/// returned.
///
/// # Errors
/// - `Error::MalformedRecord` for an unparsable line
/// - `Error::Io` if reading fails
pub fn read_jobs<R: BufRead>(reader: R) -> Result<Vec<Job>> {
    let mut jobs = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(job) = parse_record(&line, index + 1)? {
            jobs.push(job);
        }
    }

    Ok(jobs)
}

/// Read every record from the file at `path`.
///
/// # Errors
/// - `Error::Io` if the file cannot be opened or read
/// - `Error::MalformedRecord` for an unparsable line
pub fn read_jobs_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Job>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let jobs = read_jobs(BufReader::new(file))?;

    info!(path = %path.display(), records = jobs.len(), "Job records loaded");
    Ok(jobs)
}
