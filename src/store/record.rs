// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Fixed-width record codec for film rating rows.
//!
//! Every record packs into exactly 16 bytes so that block capacity is a
//! simple division and record pointers stay byte-granular.
//!
//! ## Record Layout
//! ```text
//! Offset | Size | Field
//! -------|------|------------------------------------------
//! 0      | 10   | id (left-justified ASCII, NUL padded)
//! 10     | 2    | rating x 10 (u16 big-endian)
//! 12     | 4    | votes (u32 big-endian, always > 0)
//! ```
//!
//! The rating is stored as a scaled integer: one decimal place survives the
//! round trip, which is all the source dataset carries.

use crate::error::{RateError, RateResult};
use serde::{Deserialize, Serialize};

/// Width of the id field in bytes.
pub const ID_SIZE: usize = 10;

/// Width of the scaled rating field in bytes.
pub const RATING_SIZE: usize = 2;

/// Width of the votes field in bytes.
pub const VOTES_SIZE: usize = 4;

/// Total packed record width in bytes.
pub const RECORD_SIZE: usize = ID_SIZE + RATING_SIZE + VOTES_SIZE;

/// One film rating row.
///
/// ## Field Constraints
/// - `id`: at most 10 bytes of ASCII
/// - `rating`: within `[0.0, 6553.5]` (scaled into a u16)
/// - `votes`: strictly greater than zero (zero is the index's never-valid key)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Film identifier (e.g. `tt0000001`).
    pub id: String,

    /// Average rating with one decimal place.
    pub rating: f32,

    /// Vote count; the secondary index key.
    pub votes: u32,
}

impl Record {
    /// Create a record from its three fields.
    pub fn new(id: impl Into<String>, rating: f32, votes: u32) -> Self {
        Self {
            id: id.into(),
            rating,
            votes,
        }
    }

    /// Serialise the record into its 16-byte packed form.
    ///
    /// ## Output
    /// - `Ok([u8; 16])`: packed bytes, big-endian numeric fields
    /// - `Err(RateError::ValidationError)`: a field violates the schema
    ///
    /// ## Error Conditions
    /// - `id` longer than 10 bytes
    /// - `rating` outside `[0.0, 6553.5]` (including NaN)
    /// - `votes` equal to zero
    ///
    /// ## Example
    /// ```rust
    /// use ratebase::store::Record;
    ///
    /// let record = Record::new("tt0000001", 5.6, 1645);
    /// let bytes = record.encode()?;
    /// assert_eq!(Record::decode(&bytes)?, record);
    /// # Ok::<(), ratebase::RateError>(())
    /// ```
    pub fn encode(&self) -> RateResult<[u8; RECORD_SIZE]> {
        if self.id.len() > ID_SIZE {
            return Err(RateError::ValidationError {
                field: "id".to_string(),
                reason: format!("longer than {} bytes", ID_SIZE),
                value: Some(self.id.clone()),
            });
        }

        if !(0.0..=6553.5).contains(&self.rating) {
            return Err(RateError::ValidationError {
                field: "rating".to_string(),
                reason: "outside the representable range [0.0, 6553.5]".to_string(),
                value: Some(self.rating.to_string()),
            });
        }

        if self.votes == 0 {
            return Err(RateError::ValidationError {
                field: "votes".to_string(),
                reason: "must be greater than zero".to_string(),
                value: Some("0".to_string()),
            });
        }

        let mut bytes = [0u8; RECORD_SIZE];

        // Offset 0: id, left-justified, NUL padded
        bytes[..self.id.len()].copy_from_slice(self.id.as_bytes());

        // Offset 10: rating scaled by 10 (big-endian)
        let scaled = (self.rating * 10.0).round() as u16;
        bytes[ID_SIZE..ID_SIZE + RATING_SIZE].copy_from_slice(&scaled.to_be_bytes());

        // Offset 12: votes (big-endian)
        bytes[ID_SIZE + RATING_SIZE..].copy_from_slice(&self.votes.to_be_bytes());

        Ok(bytes)
    }

    /// Deserialise a record from its 16-byte packed form.
    ///
    /// Trailing NUL padding is stripped from the id; the rating is recovered
    /// as `scaled / 10.0`.
    ///
    /// ## Error Conditions
    /// - Buffer shorter than 16 bytes
    pub fn decode(bytes: &[u8]) -> RateResult<Self> {
        if bytes.len() < RECORD_SIZE {
            return Err(RateError::ValidationError {
                field: "record".to_string(),
                reason: format!(
                    "buffer holds {} bytes, a packed record needs {}",
                    bytes.len(),
                    RECORD_SIZE
                ),
                value: None,
            });
        }

        let id = String::from_utf8_lossy(&bytes[..ID_SIZE])
            .trim_end_matches('\0')
            .to_string();

        let mut scaled = [0u8; RATING_SIZE];
        scaled.copy_from_slice(&bytes[ID_SIZE..ID_SIZE + RATING_SIZE]);
        let rating = u16::from_be_bytes(scaled) as f32 / 10.0;

        let mut votes = [0u8; VOTES_SIZE];
        votes.copy_from_slice(&bytes[ID_SIZE + RATING_SIZE..RECORD_SIZE]);
        let votes = u32::from_be_bytes(votes);

        Ok(Self { id, rating, votes })
    }
}
