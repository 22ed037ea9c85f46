// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Run command: the five standard experiments.
//!
//! 1. Disk statistics after loading the dataset
//! 2. Index shape: height, node count, n, root and first child contents
//! 3. Point search for votes = 500, with access reporting
//! 4. Range search for votes in [30000, 40000], same reporting
//! 5. Delete votes = 1000, then reprint the index shape

use anyhow::{Context, Result};
use chrono::Local;
use indicatif::ProgressBar;
use ratebase::config::Config;
use ratebase::dataset;
use ratebase::error::RateError;
use ratebase::index::{BPlusTree, NodeAccessLog, Order, ACCESS_SAMPLE};
use ratebase::store::{RecordPtr, VirtualDisk};
use std::path::Path;

const POINT_KEY: u32 = 500;
const RANGE_LOW: u32 = 30_000;
const RANGE_HIGH: u32 = 40_000;
const DELETE_KEY: u32 = 1_000;

pub fn execute(
    data: Option<&Path>,
    block_size: Option<usize>,
    capacity_mb: Option<usize>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let data = data.unwrap_or(&config.data);
    let block_size = block_size.unwrap_or(config.block_size);
    let capacity_mb = capacity_mb.unwrap_or(config.capacity_mb);

    println!(
        "ratebase experiment run - {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!("Data:       {}", data.display());
    println!("Block size: {}b", block_size);
    println!("Capacity:   {}MB", capacity_mb);

    println!("\nLoading records from tsv...");
    let mut disk = VirtualDisk::new(capacity_mb, block_size)
        .with_context(|| "failed to create virtual disk")?;
    let records = dataset::load_file(data)?;
    println!("Records loaded: {}", records.len());

    let order = Order::from_block_size(block_size)?;
    let mut tree = BPlusTree::new(order);

    println!("Constructing tree, this can take a moment...");
    let bar = ProgressBar::new(records.len() as u64);
    for record in &records {
        let ptr = disk.write_record(record)?;
        tree.insert(record.votes, ptr);
        bar.inc(1);
    }
    bar.finish_and_clear();

    // Experiment 1
    let stats = disk.stats();
    println!("\n=== Experiment 1: disk statistics ===");
    println!("Max blocks:  {}", stats.max_blocks);
    println!("Used blocks: {}", stats.used_blocks);
    println!(
        "Size:        {}b ({:.2}MB)",
        stats.bytes_used,
        stats.bytes_used as f64 / 1_000_000.0
    );
    println!("Usage:       {:.2}%", stats.percent_used);

    // Experiment 2
    println!("\n=== Experiment 2: index shape ===");
    println!("Parameter n: {}", tree.order().max_keys());
    print_tree_shape(&tree);

    // Experiment 3
    println!("\n=== Experiment 3: search votes = {} ===", POINT_KEY);
    let (ptrs, log) = tree.search(POINT_KEY);
    report_traversal(&log);
    report_data_access(&disk, &ptrs)?;

    // Experiment 4
    println!(
        "\n=== Experiment 4: search votes in [{}, {}] ===",
        RANGE_LOW, RANGE_HIGH
    );
    let (ptrs, log) = tree.search_range(RANGE_LOW, RANGE_HIGH);
    report_traversal(&log);
    report_data_access(&disk, &ptrs)?;

    // Experiment 5
    println!("\n=== Experiment 5: delete votes = {} ===", DELETE_KEY);
    match tree.delete(DELETE_KEY) {
        Ok(()) => println!("Key {} deleted with its whole duplicate chain", DELETE_KEY),
        Err(RateError::KeyNotFound { key }) => {
            println!("Key {} not present, nothing deleted", key)
        }
        Err(e) => return Err(e.into()),
    }
    print_tree_shape(&tree);

    Ok(())
}

fn print_tree_shape(tree: &BPlusTree) {
    println!("Tree height:     {}", tree.height());
    println!("Number of nodes: {}", tree.total_nodes());
    println!("\nContent of root node:");
    println!("{:?}", tree.root_keys());
    println!("\nContent of 1st child node:");
    match tree.first_child_keys() {
        Some(keys) => println!("{:?}", keys),
        None => println!("There are no child nodes"),
    }
}

fn report_traversal(log: &NodeAccessLog) {
    println!(
        "Index node contents while traversing (up to first {}):",
        ACCESS_SAMPLE
    );
    for keys in &log.sampled_keys {
        println!("  {:?}", keys);
    }
    println!("Total index nodes accessed: {}", log.nodes_visited);
}

fn report_data_access(disk: &VirtualDisk, ptrs: &[RecordPtr]) -> Result<()> {
    if ptrs.is_empty() {
        println!("No records found");
        return Ok(());
    }

    let summary = disk.summarise_access(ptrs)?;
    println!("Records found: {}", ptrs.len());
    println!(
        "Number of data blocks accessed: {}",
        summary.distinct_blocks.len()
    );

    for &block_index in summary.distinct_blocks.iter().take(5) {
        println!("\nContent of block #{}:", block_index);
        for (_, record) in disk.block_records(block_index)? {
            println!("  {}\t{:.1}\t{}", record.id, record.rating, record.votes);
        }
    }

    println!("\nAverage of averageRating: {:.4}", summary.mean_rating);
    Ok(())
}
