// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! TSV loading for the film ratings dataset.
//!
//! Expected format: UTF-8, a header row (required, ignored), then one
//! record per line with exactly three tab-separated columns:
//!
//! ```text
//! tconst  averageRating  numVotes
//! tt0000001   5.6   1645
//! ```
//!
//! Parsing is strict: the first malformed line aborts the load. Field
//! constraints beyond syntax (id width, vote floor) are enforced by the
//! record codec when the row is written to the store.

use crate::error::{RateError, RateResult};
use crate::store::{Record, RecordPtr, VirtualDisk};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// Rating format: digits with at most one decimal place.
///
/// The dataset stores averages to a single decimal; anything finer would
/// silently lose precision in the scaled-integer encoding.
static RATING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d)?$").unwrap());

/// Parse TSV content into records.
///
/// ## Input
/// - `content`: full file contents, header row included
///
/// ## Output
/// - `Ok(Vec<Record>)`: parsed rows in file order, header excluded
/// - `Err(RateError::ParseError)`: malformed line (1-based line number)
///
/// ## Error Conditions
/// - Missing header (empty input)
/// - Column count other than 3
/// - Rating not matching `digits[.digit]`
/// - Votes not an unsigned 32-bit integer
pub fn parse_tsv(content: &str) -> RateResult<Vec<Record>> {
    let mut lines = content.lines().enumerate();

    if lines.next().is_none() {
        return Err(RateError::ParseError {
            line: 0,
            reason: "missing header row".to_string(),
        });
    }

    let mut records = Vec::new();
    for (index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_row(line, index + 1)?);
    }

    Ok(records)
}

/// Parse a single data row.
pub fn parse_row(line: &str, line_num: usize) -> RateResult<Record> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != 3 {
        return Err(RateError::ParseError {
            line: line_num,
            reason: format!("expected 3 tab-separated columns, got {}", fields.len()),
        });
    }

    let id = fields[0].trim();
    let rating_raw = fields[1].trim();
    let votes_raw = fields[2].trim();

    if !RATING_PATTERN.is_match(rating_raw) {
        return Err(RateError::ParseError {
            line: line_num,
            reason: format!(
                "rating '{}' is not a number with at most one decimal place",
                rating_raw
            ),
        });
    }
    let rating: f32 = rating_raw.parse().map_err(|_| RateError::ParseError {
        line: line_num,
        reason: format!("rating '{}' does not parse", rating_raw),
    })?;

    let votes: u32 = votes_raw.parse().map_err(|_| RateError::ParseError {
        line: line_num,
        reason: format!("votes '{}' is not an unsigned 32-bit integer", votes_raw),
    })?;

    Ok(Record::new(id, rating, votes))
}

/// Read and parse a TSV file.
pub fn load_file(path: &Path) -> RateResult<Vec<Record>> {
    let content = std::fs::read_to_string(path).map_err(|e| RateError::IoError {
        operation: format!("read data file '{}'", path.display()),
        reason: e.to_string(),
    })?;
    parse_tsv(&content)
}

/// Load a TSV file straight into the store.
///
/// ## Output
/// - `Ok(Vec<RecordPtr>)`: one pointer per row, in file order
/// - `Err(...)`: first I/O, parse, validation, or capacity failure
pub fn load_records(disk: &mut VirtualDisk, path: &Path) -> RateResult<Vec<RecordPtr>> {
    let records = load_file(path)?;
    let mut ptrs = Vec::with_capacity(records.len());
    for record in &records {
        ptrs.push(disk.write_record(record)?);
    }
    Ok(ptrs)
}
