// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Tests for TSV loading.

#[cfg(test)]
mod tests {
    use crate::dataset::loader::{load_records, parse_row, parse_tsv};
    use crate::error::RateError;
    use crate::store::VirtualDisk;
    use std::io::Write;

    const SAMPLE: &str = "tconst\taverageRating\tnumVotes\n\
                          tt0000001\t5.6\t1645\n\
                          tt0000002\t6.1\t198\n\
                          tt0000003\t6.5\t1342\n";

    #[test]
    fn test_parse_tsv_skips_header() {
        let records = parse_tsv(SAMPLE).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].id, "tt0000001");
        assert_eq!(records[0].rating, 5.6);
        assert_eq!(records[0].votes, 1645);
        assert_eq!(records[2].votes, 1342);
    }

    #[test]
    fn test_parse_tsv_skips_blank_lines() {
        let content = "tconst\taverageRating\tnumVotes\n\ntt0000001\t5.6\t1645\n\n";
        assert_eq!(parse_tsv(content).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_tsv_empty_input() {
        match parse_tsv("") {
            Err(RateError::ParseError { line, .. }) => assert_eq!(line, 0),
            other => panic!("expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_row_column_count() {
        match parse_row("tt0000001\t5.6", 7) {
            Err(RateError::ParseError { line, reason }) => {
                assert_eq!(line, 7);
                assert!(reason.contains("3 tab-separated columns"));
            }
            other => panic!("expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_row_rating_format() {
        // Two decimal places would lose precision in the scaled encoding.
        assert!(parse_row("tt0000001\t5.65\t100", 2).is_err());
        assert!(parse_row("tt0000001\t-1.0\t100", 2).is_err());
        assert!(parse_row("tt0000001\tbad\t100", 2).is_err());

        // Whole numbers and one decimal place are fine.
        assert!(parse_row("tt0000001\t5\t100", 2).is_ok());
        assert!(parse_row("tt0000001\t5.6\t100", 2).is_ok());
    }

    #[test]
    fn test_parse_row_votes_format() {
        assert!(parse_row("tt0000001\t5.6\t-3", 2).is_err());
        assert!(parse_row("tt0000001\t5.6\t4294967296", 2).is_err());
        assert!(parse_row("tt0000001\t5.6\t4294967295", 2).is_ok());
    }

    #[test]
    fn test_load_records_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let mut disk = VirtualDisk::with_capacity_bytes(10_000, 200).unwrap();
        let ptrs = load_records(&mut disk, file.path()).unwrap();

        assert_eq!(ptrs.len(), 3);
        assert_eq!(disk.record_count(), 3);
        assert_eq!(disk.read(ptrs[1]).unwrap().id, "tt0000002");
    }

    #[test]
    fn test_load_records_missing_file() {
        let mut disk = VirtualDisk::with_capacity_bytes(10_000, 200).unwrap();
        match load_records(&mut disk, std::path::Path::new("/no/such/file.tsv")) {
            Err(RateError::IoError { operation, .. }) => {
                assert!(operation.contains("file.tsv"));
            }
            other => panic!("expected IoError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_records_aborts_on_bad_row() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let content = "tconst\taverageRating\tnumVotes\n\
                       tt0000001\t5.6\t1645\n\
                       tt0000002\tsix\t198\n";
        file.write_all(content.as_bytes()).unwrap();

        let mut disk = VirtualDisk::with_capacity_bytes(10_000, 200).unwrap();
        match load_records(&mut disk, file.path()) {
            Err(RateError::ParseError { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected ParseError, got {:?}", other),
        }
    }
}
