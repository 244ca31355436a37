//! Mixed-Radix Decoder
//!
//! Maps a keyspace offset within a chain onto per-part element indices
//! and maintains the candidate byte buffer incrementally. Part 0 is the
//! least significant digit: it varies fastest, and both the seek divmod
//! sequence and the incremental buffer rewrite depend on that.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::ToPrimitive;

use crate::chain::Chain;
use crate::store::WordStore;
use crate::types::{CHAIN_ELEMS_MAX, ELEM_LEN_MAX};

// =============================================================================
// POSITION DECODING
// =============================================================================

/// Decode `pos` into per-part element indices, little-endian over parts.
///
/// The radix of digit `i` is the element count of part `i`; `pos` must
/// be below the chain keyspace. Scratch slots past the chain width are
/// left untouched.
pub fn set_positions(
    chain: &Chain,
    store: &WordStore,
    pos: &BigUint,
    positions: &mut [usize; CHAIN_ELEMS_MAX],
) {
    let mut pos = pos.clone();

    for (slot, &part) in positions.iter_mut().zip(chain.parts()) {
        let radix = BigUint::from(store.count(usize::from(part)));
        let (quot, rem) = pos.div_rem(&radix);
        // The remainder is below a machine-word radix.
        *slot = rem.to_usize().unwrap_or(0);
        pos = quot;
    }
}

// =============================================================================
// CANDIDATE BUFFER
// =============================================================================

/// Candidate bytes under construction, trailing newline included, so one
/// buffered write emits the whole line.
#[derive(Debug)]
pub struct Candidate {
    buf: [u8; ELEM_LEN_MAX + 1],
    len: usize,
}

impl Candidate {
    /// Empty candidate of byte length `pw_len`, newline preset.
    pub fn new(pw_len: usize) -> Self {
        let mut buf = [0u8; ELEM_LEN_MAX + 1];
        buf[pw_len] = b'\n';
        Self {
            buf,
            len: pw_len + 1,
        }
    }

    /// The candidate plus its newline.
    pub fn bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Rewrite the whole buffer from the current positions.
    pub fn fill(
        &mut self,
        chain: &Chain,
        store: &WordStore,
        positions: &[usize; CHAIN_ELEMS_MAX],
    ) {
        let mut off = 0;
        for (idx, &part) in chain.parts().iter().enumerate() {
            let part = usize::from(part);
            self.buf[off..off + part].copy_from_slice(store.element(part, positions[idx]));
            off += part;
        }
    }

    /// Advance to the next candidate: bump part 0, carrying into later
    /// parts, rewriting only up to the first part that does not wrap.
    /// A full wrap leaves every position at zero.
    pub fn bump(
        &mut self,
        chain: &Chain,
        store: &WordStore,
        positions: &mut [usize; CHAIN_ELEMS_MAX],
    ) {
        let mut off = 0;
        for (idx, &part) in chain.parts().iter().enumerate() {
            let part = usize::from(part);

            positions[idx] += 1;
            if positions[idx] < store.count(part) {
                self.buf[off..off + part].copy_from_slice(store.element(part, positions[idx]));
                return;
            }

            positions[idx] = 0;
            self.buf[off..off + part].copy_from_slice(store.element(part, 0));
            off += part;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::chain;

    fn two_part_fixture() -> (WordStore, Chain) {
        let mut store = WordStore::new();
        store.push(b"a");
        store.push(b"b");
        store.push(b"x");
        store.push(b"yy");
        store.push(b"zz");

        // Length 3, parts (1, 2): radices (3, 2), keyspace 6.
        let chains = chain::generate(3, &store, 2, 2);
        let picked = chains
            .into_iter()
            .find(|c| c.parts() == [1, 2])
            .unwrap();
        (store, picked)
    }

    #[test]
    fn test_decode_matches_divmod() {
        let (store, chain) = two_part_fixture();
        let mut positions = [0usize; CHAIN_ELEMS_MAX];

        set_positions(&chain, &store, &BigUint::from(5u32), &mut positions);
        // 5 = 2 + 1 * 3: part 0 digit 2, part 1 digit 1.
        assert_eq!(positions[0], 2);
        assert_eq!(positions[1], 1);
    }

    #[test]
    fn test_bump_agrees_with_decode() {
        let (store, chain) = two_part_fixture();

        let mut bumped = [0usize; CHAIN_ELEMS_MAX];
        let mut candidate = Candidate::new(3);
        candidate.fill(&chain, &store, &bumped);

        for pos in 1u32..6 {
            candidate.bump(&chain, &store, &mut bumped);

            let mut decoded = [0usize; CHAIN_ELEMS_MAX];
            set_positions(&chain, &store, &BigUint::from(pos), &mut decoded);
            assert_eq!(bumped, decoded, "positions diverge at offset {pos}");

            let mut fresh = Candidate::new(3);
            fresh.fill(&chain, &store, &decoded);
            assert_eq!(candidate.bytes(), fresh.bytes(), "buffer diverges at offset {pos}");
        }

        // Final bump wraps the whole chain back to all zeros.
        candidate.bump(&chain, &store, &mut bumped);
        assert_eq!(bumped, [0usize; CHAIN_ELEMS_MAX]);
    }
}
