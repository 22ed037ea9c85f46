// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Analyse command: profile the dataset's field ranges.

use anyhow::Result;
use ratebase::dataset;
use std::path::Path;

pub fn execute(data: &Path, format: &str) -> Result<()> {
    let records = dataset::load_file(data)?;

    let Some(profile) = dataset::profile(&records) else {
        println!("Dataset is empty");
        return Ok(());
    };

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        _ => {
            println!("Dataset profile:");
            println!("  Rows:           {}", profile.rows);
            println!(
                "  Id length:      {} - {} bytes",
                profile.id_len_min, profile.id_len_max
            );
            println!(
                "  Rating:         {} - {}",
                profile.rating_min, profile.rating_max
            );
            println!(
                "  Votes:          {} - {}",
                profile.votes_min, profile.votes_max
            );
        }
    }

    Ok(())
}
