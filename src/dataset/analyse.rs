// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Dataset field profiling.
//!
//! Computes the observed extrema of each record field. Useful before a
//! load to confirm the dataset fits the fixed schema: id width, rating
//! range, vote floor.

use crate::store::Record;
use serde::Serialize;

/// Observed field ranges of a parsed dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetProfile {
    /// Rows profiled.
    pub rows: usize,

    /// Shortest id, in bytes.
    pub id_len_min: usize,

    /// Longest id, in bytes.
    pub id_len_max: usize,

    /// Smallest rating.
    pub rating_min: f32,

    /// Largest rating.
    pub rating_max: f32,

    /// Smallest vote count.
    pub votes_min: u32,

    /// Largest vote count.
    pub votes_max: u32,
}

/// Profile a parsed dataset.
///
/// Returns `None` for an empty dataset: extrema of nothing are undefined.
pub fn profile(records: &[Record]) -> Option<DatasetProfile> {
    let first = records.first()?;

    let mut profile = DatasetProfile {
        rows: records.len(),
        id_len_min: first.id.len(),
        id_len_max: first.id.len(),
        rating_min: first.rating,
        rating_max: first.rating,
        votes_min: first.votes,
        votes_max: first.votes,
    };

    for record in &records[1..] {
        profile.id_len_min = profile.id_len_min.min(record.id.len());
        profile.id_len_max = profile.id_len_max.max(record.id.len());
        profile.rating_min = profile.rating_min.min(record.rating);
        profile.rating_max = profile.rating_max.max(record.rating);
        profile.votes_min = profile.votes_min.min(record.votes);
        profile.votes_max = profile.votes_max.max(record.votes);
    }

    Some(profile)
}
