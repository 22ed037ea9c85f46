// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Stats command: load the dataset and report disk usage.

use anyhow::{Context, Result};
use ratebase::dataset;
use ratebase::store::VirtualDisk;
use std::path::Path;

pub fn execute(data: &Path, block_size: usize, capacity_mb: usize, format: &str) -> Result<()> {
    let mut disk = VirtualDisk::new(capacity_mb, block_size)
        .with_context(|| "failed to create virtual disk")?;
    let loaded = dataset::load_records(&mut disk, data)?.len();

    let stats = disk.stats();
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        _ => {
            println!("Disk statistics:");
            println!("  Records loaded: {}", loaded);
            println!("  Max blocks:     {}", stats.max_blocks);
            println!("  Used blocks:    {}", stats.used_blocks);
            println!(
                "  Size:           {}b ({:.2}MB)",
                stats.bytes_used,
                stats.bytes_used as f64 / 1_000_000.0
            );
            println!("  Usage:          {:.2}%", stats.percent_used);
        }
    }

    Ok(())
}
