// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Tests for dataset profiling.

#[cfg(test)]
mod tests {
    use crate::dataset::analyse::profile;
    use crate::store::Record;

    #[test]
    fn test_profile_empty() {
        assert!(profile(&[]).is_none());
    }

    #[test]
    fn test_profile_single_record() {
        let records = vec![Record::new("tt0000001", 5.6, 1645)];
        let p = profile(&records).unwrap();
        assert_eq!(p.rows, 1);
        assert_eq!((p.id_len_min, p.id_len_max), (9, 9));
        assert_eq!((p.rating_min, p.rating_max), (5.6, 5.6));
        assert_eq!((p.votes_min, p.votes_max), (1645, 1645));
    }

    #[test]
    fn test_profile_extrema() {
        let records = vec![
            Record::new("tt0000001", 5.6, 1645),
            Record::new("tt10000001", 1.2, 5),
            Record::new("tt99", 9.9, 2_000_000),
        ];
        let p = profile(&records).unwrap();
        assert_eq!(p.rows, 3);
        assert_eq!(p.id_len_min, 4);
        assert_eq!(p.id_len_max, 10);
        assert_eq!(p.rating_min, 1.2);
        assert_eq!(p.rating_max, 9.9);
        assert_eq!(p.votes_min, 5);
        assert_eq!(p.votes_max, 2_000_000);
    }
}
