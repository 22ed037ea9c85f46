// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Tests for the block store.

#[cfg(test)]
mod tests {
    use crate::error::RateError;
    use crate::store::disk::{RecordPtr, VirtualDisk};
    use crate::store::record::Record;

    fn record(n: u32) -> Record {
        Record::new(format!("tt{:07}", n), (n % 100) as f32 / 10.0, n)
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let mut disk = VirtualDisk::with_capacity_bytes(10_000, 100).unwrap();
        let r = record(42);
        let ptr = disk.write_record(&r).unwrap();
        assert_eq!(disk.read(ptr).unwrap(), r);
    }

    #[test]
    fn test_pointer_stability_under_later_writes() {
        let mut disk = VirtualDisk::with_capacity_bytes(100_000, 100).unwrap();

        let originals: Vec<Record> = (1..=100).map(record).collect();
        let ptrs: Vec<RecordPtr> = originals
            .iter()
            .map(|r| disk.write_record(r).unwrap())
            .collect();

        // Every earlier pointer still resolves to its original record.
        for (ptr, original) in ptrs.iter().zip(&originals) {
            assert_eq!(&disk.read(*ptr).unwrap(), original);
        }
    }

    #[test]
    fn test_tail_block_rollover() {
        // 100-byte blocks hold 6 records; the 7th write allocates block 1.
        let mut disk = VirtualDisk::with_capacity_bytes(1000, 100).unwrap();
        for n in 1..=7 {
            disk.write_record(&record(n)).unwrap();
        }

        let stats = disk.stats();
        assert_eq!(stats.used_blocks, 2);

        let blocks: Vec<u16> = disk.iter_blocks().map(|(_, b)| b.num_records()).collect();
        assert_eq!(blocks, vec![6, 1]);
    }

    #[test]
    fn test_out_of_space_on_exhausted_budget() {
        // floor(1000 / 100) = 10 blocks x 6 records = 60 records total.
        let mut disk = VirtualDisk::with_capacity_bytes(1000, 100).unwrap();
        for n in 1..=60 {
            disk.write_record(&record(n)).unwrap();
        }

        match disk.write_record(&record(61)) {
            Err(RateError::OutOfSpace {
                max_blocks,
                block_size,
            }) => {
                assert_eq!(max_blocks, 10);
                assert_eq!(block_size, 100);
            }
            other => panic!("expected OutOfSpace, got {:?}", other),
        }
    }

    #[test]
    fn test_read_unknown_pointer() {
        let disk = VirtualDisk::with_capacity_bytes(1000, 100).unwrap();
        let bogus = RecordPtr::new(3, 1);
        match disk.read(bogus) {
            Err(RateError::InvalidPointer { block, slot }) => {
                assert_eq!((block, slot), (3, 1));
            }
            other => panic!("expected InvalidPointer, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_undersized_block() {
        assert!(VirtualDisk::with_capacity_bytes(1000, 8).is_err());
    }

    #[test]
    fn test_stats_formula() {
        // block_size 200 holds 12 records; 60_000 records need
        // ceil(60_000 / 12) = 5_000 blocks of 200 bytes.
        let mut disk = VirtualDisk::new(100, 200).unwrap();
        for n in 1..=60_000 {
            disk.write_record(&record(n)).unwrap();
        }

        let stats = disk.stats();
        assert_eq!(stats.max_blocks, 500_000);
        assert_eq!(stats.used_blocks, 5_000);
        assert_eq!(stats.bytes_used, 1_000_000);
        assert!((stats.percent_used - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_block_records_returns_slot_pointers() {
        let mut disk = VirtualDisk::with_capacity_bytes(1000, 100).unwrap();
        let ptrs: Vec<RecordPtr> = (1..=4).map(|n| disk.write_record(&record(n)).unwrap()).collect();

        let contents = disk.block_records(0).unwrap();
        assert_eq!(contents.len(), 4);
        for (i, (ptr, rec)) in contents.iter().enumerate() {
            assert_eq!(*ptr, ptrs[i]);
            assert_eq!(rec.votes, (i + 1) as u32);
        }
    }

    #[test]
    fn test_access_summary() {
        let mut disk = VirtualDisk::with_capacity_bytes(1000, 100).unwrap();

        // Fill block 0, spill into block 1.
        let mut ptrs = Vec::new();
        for n in 1..=8 {
            ptrs.push(
                disk.write_record(&Record::new(format!("tt{:07}", n), 5.0, n))
                    .unwrap(),
            );
        }

        // Touch block 1 first, then block 0 twice.
        let summary = disk
            .summarise_access(&[ptrs[7], ptrs[0], ptrs[1]])
            .unwrap();
        assert_eq!(summary.distinct_blocks, vec![1, 0]);
        assert!((summary.mean_rating - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_access_summary_empty() {
        let disk = VirtualDisk::with_capacity_bytes(1000, 100).unwrap();
        let summary = disk.summarise_access(&[]).unwrap();
        assert!(summary.distinct_blocks.is_empty());
        assert_eq!(summary.mean_rating, 0.0);
    }
}
