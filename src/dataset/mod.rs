// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Dataset handling: TSV loading and field profiling.

pub mod analyse;
pub mod loader;

#[cfg(test)]
mod analyse_test;
#[cfg(test)]
mod loader_test;

// Re-export public API
pub use analyse::{profile, DatasetProfile};
pub use loader::{load_file, load_records, parse_row, parse_tsv};
