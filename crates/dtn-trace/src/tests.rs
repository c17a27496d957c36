//! Unit tests for the trace reader.

use std::io::Cursor;

use dtn_core::Position;

use crate::{TraceError, TraceReader};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn reader(contents: &'static str) -> TraceReader<Cursor<&'static str>> {
    TraceReader::from_reader(Cursor::new(contents)).unwrap()
}

fn moves_of(batch: &crate::MovementBatch) -> Vec<(&str, f64, f64)> {
    batch
        .moves
        .iter()
        .map(|(host, pos)| (host.as_str(), pos.x, pos.y))
        .collect()
}

// ── Batch grouping ────────────────────────────────────────────────────────────

#[cfg(test)]
mod grouping {
    use super::*;

    const BASIC: &str = "\
0 10 0 100 0 100 0 0
0 1 10 20
0 2 30 40
1 1 15 25
";

    #[test]
    fn groups_equal_time_lines_into_one_batch() {
        let mut r = reader(BASIC);

        let b1 = r.next_batch().unwrap();
        assert_eq!(b1.time, 0.0);
        assert_eq!(moves_of(&b1), vec![("1", 10.0, 20.0), ("2", 30.0, 40.0)]);

        let b2 = r.next_batch().unwrap();
        assert_eq!(b2.time, 1.0);
        assert_eq!(moves_of(&b2), vec![("1", 15.0, 25.0)]);
        assert_eq!(r.last_timestamp(), 1.0);

        // Clean end of stream: empty batches from here on, never an error.
        assert!(r.next_batch().unwrap().is_empty());
        assert!(r.next_batch().unwrap().is_empty());
        assert_eq!(r.last_timestamp(), 1.0);
    }

    #[test]
    fn last_timestamp_starts_unset() {
        let r = reader(BASIC);
        assert_eq!(r.last_timestamp(), -1.0);
    }

    #[test]
    fn single_record_body_yields_one_batch() {
        let mut r = reader("0 10 0 100 0 100 0 0\n4 7 1 2\n");
        let b = r.next_batch().unwrap();
        assert_eq!(b.time, 4.0);
        assert_eq!(moves_of(&b), vec![("7", 1.0, 2.0)]);
        assert!(r.next_batch().unwrap().is_empty());
    }

    #[test]
    fn header_only_file_is_immediately_empty() {
        let mut r = reader("0 10 0 100 0 100 0 0\n");
        assert!(r.next_batch().unwrap().is_empty());
        assert_eq!(r.last_timestamp(), -1.0);
    }

    #[test]
    fn comments_and_blank_lines_are_transparent() {
        let mut r = reader(
            "0 10 0 100 0 100 0 0

# recorded by gps unit 3
0 a 1 1

0 b 2 2
# midway comment

1 a 3 3
",
        );

        let b1 = r.next_batch().unwrap();
        assert_eq!(moves_of(&b1), vec![("a", 1.0, 1.0), ("b", 2.0, 2.0)]);

        let b2 = r.next_batch().unwrap();
        assert_eq!(moves_of(&b2), vec![("a", 3.0, 3.0)]);

        assert!(r.next_batch().unwrap().is_empty());
    }

    #[test]
    fn repeated_spaces_collapse() {
        let mut r = reader("0 10 0 100 0 100 0 0\n0  n1   10  20\n0 n2 30  40\n");
        let b = r.next_batch().unwrap();
        assert_eq!(moves_of(&b), vec![("n1", 10.0, 20.0), ("n2", 30.0, 40.0)]);
    }

    #[test]
    fn batch_boundaries_follow_time_changes() {
        let mut r = reader(
            "0 30 0 100 0 100 0 0\n\
             10 a 1 1\n\
             10 b 2 2\n\
             20 a 3 3\n\
             20 b 4 4\n\
             30 a 5 5\n",
        );
        assert_eq!(r.next_batch().unwrap().len(), 2);
        assert_eq!(r.last_timestamp(), 10.0);
        assert_eq!(r.next_batch().unwrap().len(), 2);
        assert_eq!(r.last_timestamp(), 20.0);
        assert_eq!(r.next_batch().unwrap().len(), 1);
        assert_eq!(r.last_timestamp(), 30.0);
        assert!(r.next_batch().unwrap().is_empty());
    }
}

// ── Normalization ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod normalization {
    use super::*;

    const OFFSET: &str = "\
5 10 2 50 3 60 0 0
5 1 2 3
6 1 12 13
";

    #[test]
    fn offsets_are_subtracted_by_default() {
        let mut r = reader(OFFSET);

        let b1 = r.next_batch().unwrap();
        assert_eq!(b1.time, 0.0);
        assert_eq!(b1.moves[0], ("1".to_string(), Position::new(0.0, 0.0)));

        let b2 = r.next_batch().unwrap();
        assert_eq!(b2.time, 1.0);
        assert_eq!(b2.moves[0], ("1".to_string(), Position::new(10.0, 10.0)));
        assert_eq!(r.last_timestamp(), 1.0);
    }

    #[test]
    fn raw_values_with_normalize_off() {
        let mut r = reader(OFFSET);
        r.set_normalize(false);

        let b1 = r.next_batch().unwrap();
        assert_eq!(b1.time, 5.0);
        assert_eq!(b1.moves[0], ("1".to_string(), Position::new(2.0, 3.0)));
        assert_eq!(r.last_timestamp(), 5.0);
    }

    #[test]
    fn header_accessors_expose_raw_offsets() {
        let r = reader(OFFSET);
        assert_eq!(r.min_time(), 5.0);
        assert_eq!(r.max_time(), 10.0);
        assert_eq!(r.min_x(), 2.0);
        assert_eq!(r.max_x(), 50.0);
        assert_eq!(r.min_y(), 3.0);
        assert_eq!(r.max_y(), 60.0);
    }
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod errors {
    use super::*;

    #[test]
    fn missing_header_is_config_error() {
        let result = TraceReader::from_reader(Cursor::new(""));
        assert!(matches!(result, Err(TraceError::Config(_))));
    }

    #[test]
    fn short_header_is_config_error() {
        let result = TraceReader::from_reader(Cursor::new("0 10 0 100\n"));
        assert!(matches!(result, Err(TraceError::Config(_))));
    }

    #[test]
    fn non_numeric_header_is_config_error() {
        let result = TraceReader::from_reader(Cursor::new("0 ten 0 100 0 100 0 0\n"));
        assert!(matches!(result, Err(TraceError::Config(_))));
    }

    #[test]
    fn non_numeric_field_is_parse_error() {
        let mut r = reader("0 10 0 100 0 100 0 0\n0 a 1 1\n1 a 2 2\n1 b x 2\n");
        // The first batch ends at the time change, before the bad line.
        assert_eq!(r.next_batch().unwrap().len(), 1);
        let err = r.next_batch().unwrap_err();
        assert!(matches!(err, TraceError::Parse(_)), "got {err:?}");
        assert!(err.to_string().contains("xPos"), "got {err}");
    }

    #[test]
    fn wrong_token_count_is_parse_error() {
        let mut r = reader("0 10 0 100 0 100 0 0\n0 a 1 1\n1 a 2 2\n1 b 2\n");
        assert_eq!(r.next_batch().unwrap().len(), 1);
        assert!(matches!(r.next_batch(), Err(TraceError::Parse(_))));
    }

    #[test]
    fn malformed_lookahead_fails_the_priming_batch() {
        // The bad line is the *second* data line: the first next_batch pulls
        // it while grouping and must abort without returning a partial batch.
        let mut r = reader("0 10 0 100 0 100 0 0\n0 a 1 1\n0 b bad 2\n");
        assert!(matches!(r.next_batch(), Err(TraceError::Parse(_))));
    }
}

// ── File handling ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod files {
    use std::io::Write;

    use super::*;

    #[test]
    fn open_missing_file_is_config_error() {
        let result = TraceReader::open("/nonexistent/movement.trace");
        assert!(matches!(result, Err(TraceError::Config(_))));
    }

    #[test]
    fn open_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "0 10 0 100 0 100 0 0\n0 1 10 20\n0 2 30 40\n1 1 15 25\n"
        )
        .unwrap();
        file.flush().unwrap();

        let mut r = TraceReader::open(file.path()).unwrap();
        assert_eq!(r.next_batch().unwrap().len(), 2);
        assert_eq!(r.next_batch().unwrap().len(), 1);
        assert!(r.next_batch().unwrap().is_empty());
    }
}
