//! Element Store
//!
//! Per-length, append-only arrays of fixed-width elements. Insertion
//! order is the index all keyspace arithmetic is built on.

use std::io::{self, BufRead};

use crate::types::ELEM_LEN_MAX;

// =============================================================================
// STORE
// =============================================================================

/// Elements bucketed by byte length.
///
/// Length `L` elements live in one flat allocation of `L`-byte entries,
/// so candidate assembly copies straight out of a contiguous lane.
/// Duplicates are preserved; elements are immutable once pushed.
#[derive(Debug, Clone)]
pub struct WordStore {
    /// `lanes[len]` holds the concatenated `len`-byte elements. Index 0
    /// stays empty.
    lanes: Vec<Vec<u8>>,
}

impl Default for WordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WordStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lanes: vec![Vec::new(); ELEM_LEN_MAX + 1],
        }
    }

    /// Number of stored elements of byte length `len`.
    #[must_use]
    pub fn count(&self, len: usize) -> usize {
        if len == 0 || len > ELEM_LEN_MAX {
            return 0;
        }
        self.lanes[len].len() / len
    }

    /// True when no element of any length is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lanes.iter().all(Vec::is_empty)
    }

    /// Element `idx` of byte length `len`.
    pub(crate) fn element(&self, len: usize, idx: usize) -> &[u8] {
        let off = idx * len;
        &self.lanes[len][off..off + len]
    }

    /// Append one element.
    ///
    /// Returns `false` when the length is outside `[1, ELEM_LEN_MAX]`
    /// and the element was discarded.
    pub fn push(&mut self, elem: &[u8]) -> bool {
        let len = elem.len();
        if len == 0 || len > ELEM_LEN_MAX {
            return false;
        }
        self.lanes[len].extend_from_slice(elem);
        true
    }

    /// Ingest newline-separated elements from a reader.
    ///
    /// Lines are raw bytes, not UTF-8. All trailing CR and LF bytes are
    /// stripped, in any order; lines whose stripped length falls outside
    /// `[1, ELEM_LEN_MAX]` are silently skipped. Returns the number of
    /// elements stored.
    ///
    /// # Errors
    /// Propagates reader failures.
    pub fn load<R: BufRead>(&mut self, mut reader: R) -> io::Result<u64> {
        let mut line = Vec::with_capacity(64);
        let mut stored = 0u64;

        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            while matches!(line.last(), Some(b'\n' | b'\r')) {
                line.pop();
            }
            if self.push(&line) {
                stored += 1;
            }
        }

        Ok(stored)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_load_strips_line_endings_and_filters() {
        let input: &[u8] = b"one\r\ntwo\nthisoneis17bytes.\n\r\n\nlast";

        let mut store = WordStore::new();
        let stored = store.load(input).unwrap();

        // "thisoneis17bytes." (17 bytes) and the blank lines are dropped.
        assert_eq!(stored, 3);
        assert_eq!(store.count(3), 2);
        assert_eq!(store.count(4), 1);
        assert_eq!(store.element(3, 0), b"one");
        assert_eq!(store.element(3, 1), b"two");
        assert_eq!(store.element(4, 0), b"last");
    }

    #[test]
    fn test_duplicates_keep_insertion_order() {
        let mut store = WordStore::new();
        assert!(store.push(b"aa"));
        assert!(store.push(b"aa"));
        assert!(store.push(b"ab"));

        assert_eq!(store.count(2), 3);
        assert_eq!(store.element(2, 1), b"aa");
        assert_eq!(store.element(2, 2), b"ab");
    }
}
