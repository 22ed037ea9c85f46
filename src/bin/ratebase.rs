// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! ratebase CLI
//!
//! Command-line driver for the block store and B+ tree experiments.

use clap::{Parser, Subcommand};
use ratebase::config::{DEFAULT_BLOCK_SIZE, DEFAULT_CAPACITY_MB};
use std::path::PathBuf;

mod commands;

use commands::{analyse, run, stats};

#[derive(Parser)]
#[command(name = "ratebase")]
#[command(version)]
#[command(about = "Block store + B+ tree experiments over film ratings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the dataset and run the five standard experiments
    Run {
        /// Path to the ratings TSV (falls back to the config file)
        data: Option<PathBuf>,

        /// Block size in bytes; also sets the tree order
        #[arg(short, long)]
        block_size: Option<usize>,

        /// Disk capacity in megabytes
        #[arg(short, long)]
        capacity_mb: Option<usize>,

        /// TOML file with the storage geometry
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Load the dataset and report disk statistics
    Stats {
        /// Path to the ratings TSV
        data: PathBuf,

        /// Block size in bytes
        #[arg(short, long, default_value_t = DEFAULT_BLOCK_SIZE)]
        block_size: usize,

        /// Disk capacity in megabytes
        #[arg(short, long, default_value_t = DEFAULT_CAPACITY_MB)]
        capacity_mb: usize,

        /// Output format: table|json
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Profile the dataset's field ranges
    Analyse {
        /// Path to the ratings TSV
        data: PathBuf,

        /// Output format: table|json
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            data,
            block_size,
            capacity_mb,
            config,
        } => run::execute(data.as_deref(), block_size, capacity_mb, config.as_deref())?,

        Commands::Stats {
            data,
            block_size,
            capacity_mb,
            format,
        } => stats::execute(&data, block_size, capacity_mb, &format)?,

        Commands::Analyse { data, format } => analyse::execute(&data, &format)?,
    }

    Ok(())
}
