// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Experiment configuration.
//!
//! A small TOML file carries the storage geometry so experiment runs are
//! reproducible without retyping flags:
//!
//! ```toml
//! data = "data/data.tsv"
//! block_size = 500
//! capacity_mb = 100
//! ```
//!
//! Precedence: CLI flags override the config file, which overrides the
//! defaults below.

use crate::error::{RateError, RateResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default block size in bytes.
pub const DEFAULT_BLOCK_SIZE: usize = 500;

/// Default disk capacity in megabytes.
pub const DEFAULT_CAPACITY_MB: usize = 100;

/// Storage geometry and data location for an experiment run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path to the ratings TSV.
    pub data: PathBuf,

    /// Block size in bytes; also determines the tree order.
    pub block_size: usize,

    /// Disk capacity in megabytes (decimal).
    pub capacity_mb: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: PathBuf::from("data/data.tsv"),
            block_size: DEFAULT_BLOCK_SIZE,
            capacity_mb: DEFAULT_CAPACITY_MB,
        }
    }
}

impl Config {
    /// Parse a config from TOML text.
    ///
    /// Unknown keys are rejected; missing keys fall back to defaults.
    pub fn from_toml(content: &str) -> RateResult<Self> {
        let config: Config = toml::from_str(content).map_err(|e| RateError::ParseError {
            line: 0,
            reason: format!("TOML parse error: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> RateResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RateError::IoError {
            operation: format!("read config file '{}'", path.display()),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Load the given config file, or fall back to defaults without one.
    pub fn load_or_default(path: Option<&Path>) -> RateResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> RateResult<()> {
        if self.block_size == 0 {
            return Err(RateError::ValidationError {
                field: "block_size".to_string(),
                reason: "must be greater than zero".to_string(),
                value: Some(self.block_size.to_string()),
            });
        }
        if self.capacity_mb == 0 {
            return Err(RateError::ValidationError {
                field: "capacity_mb".to_string(),
                reason: "must be greater than zero".to_string(),
                value: Some(self.capacity_mb.to_string()),
            });
        }
        Ok(())
    }
}
