// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Error types for ratebase operations.
//!
//! Provides structured error handling with detailed context for debugging.

use std::fmt;

/// Standard Result type for all ratebase operations.
pub type RateResult<T> = Result<T, RateError>;

/// Error types for ratebase operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RateError {
    /// I/O error during file operations.
    IoError { operation: String, reason: String },

    /// Malformed TSV input.
    ParseError { line: usize, reason: String },

    /// Record field violates the fixed schema.
    ValidationError {
        field: String,
        reason: String,
        value: Option<String>,
    },

    /// Disk capacity exhausted, no further block can be allocated.
    OutOfSpace {
        max_blocks: usize,
        block_size: usize,
    },

    /// Pointer does not resolve through the lookup table.
    InvalidPointer { block: u32, slot: u16 },

    /// Delete on a key the index does not contain.
    KeyNotFound { key: u32 },

    /// Detected breach of a structural invariant.
    InvariantViolation { reason: String },
}

impl fmt::Display for RateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError { operation, reason } => {
                write!(f, "I/O error during '{}': {}", operation, reason)
            }
            Self::ParseError { line, reason } => {
                write!(f, "Parse error at line {}: {}", line, reason)
            }
            Self::ValidationError {
                field,
                reason,
                value,
            } => {
                if let Some(val) = value {
                    write!(
                        f,
                        "Validation error in field '{}': {} (value: '{}')",
                        field, reason, val
                    )
                } else {
                    write!(f, "Validation error in field '{}': {}", field, reason)
                }
            }
            Self::OutOfSpace {
                max_blocks,
                block_size,
            } => {
                write!(
                    f,
                    "Disk capacity exhausted: all {} blocks of {} bytes are in use",
                    max_blocks, block_size
                )
            }
            Self::InvalidPointer { block, slot } => {
                write!(
                    f,
                    "Record pointer (block {}, slot {}) is unknown to the store",
                    block, slot
                )
            }
            Self::KeyNotFound { key } => {
                write!(f, "Key {} not found in index", key)
            }
            Self::InvariantViolation { reason } => {
                write!(f, "Invariant violation: {}", reason)
            }
        }
    }
}

impl std::error::Error for RateError {}

// Convenience conversion from std::io::Error
impl From<std::io::Error> for RateError {
    fn from(err: std::io::Error) -> Self {
        RateError::IoError {
            operation: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}
