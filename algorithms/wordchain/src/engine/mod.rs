//! Generator Engine
//!
//! Owns the element store, the per-length chain buckets, and the global
//! cursors; drives seek and emission. All structure is fixed after
//! construction — the run only moves cursors.

mod schedule;
mod seek;

use std::io::Write;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::chain::{self, Chain};
use crate::distribution::length_weights;
use crate::store::WordStore;
use crate::types::{Config, ConfigError, Error, CHAIN_ELEMS_MAX, ELEM_LEN_MAX};

// =============================================================================
// BUCKETS
// =============================================================================

/// Per-length emission state: valid chains sorted ascending by keyspace,
/// the cursor of the chain currently emitting, and the decoder scratch
/// shared by all of the bucket's chains.
#[derive(Debug)]
struct Bucket {
    chains: Vec<Chain>,
    chains_pos: usize,
    cur_positions: [usize; CHAIN_ELEMS_MAX],
}

// =============================================================================
// GENERATOR
// =============================================================================

/// PRINCE candidate generator.
///
/// Built once from an element store and settings; [`Generator::run`]
/// then emits the configured keyspace window in a deterministic order.
/// The stream is a pure function of the store contents, their insertion
/// order, and the settings — two identical runs are byte-identical.
#[derive(Debug)]
pub struct Generator {
    store: WordStore,
    config: Config,
    /// Indexed by candidate length; empty outside `[pw_min, pw_max]`.
    buckets: Vec<Bucket>,
    /// Keyspace per candidate length.
    bucket_ks: Vec<BigUint>,
    /// Emission weight per candidate length.
    weights: Vec<u64>,
    /// Candidate lengths, heaviest weight first.
    order: Vec<usize>,
    /// Unclamped total keyspace.
    total_ks_cnt: BigUint,
}

impl Generator {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Build chains and keyspace for `store` under `config`.
    ///
    /// # Errors
    /// Rejects settings that fail [`Config::validate`].
    pub fn new(store: WordStore, config: Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut buckets = Vec::with_capacity(ELEM_LEN_MAX + 1);
        let mut bucket_ks = vec![BigUint::zero(); ELEM_LEN_MAX + 1];
        let mut total_ks_cnt = BigUint::zero();

        for pw_len in 0..=ELEM_LEN_MAX {
            let chains = if pw_len >= config.pw_min && pw_len <= config.pw_max {
                chain::generate(pw_len, &store, config.elem_cnt_min, config.elem_cnt_max)
            } else {
                Vec::new()
            };

            let ks = chains
                .iter()
                .fold(BigUint::zero(), |acc, c| acc + &c.ks_cnt);
            total_ks_cnt += &ks;
            bucket_ks[pw_len] = ks;

            buckets.push(Bucket {
                chains,
                chains_pos: 0,
                cur_positions: [0; CHAIN_ELEMS_MAX],
            });
        }

        let weights = length_weights(&store, config.wl_dist_len);

        // Heaviest length first; the stable sort keeps ties in ascending
        // length order.
        let mut order: Vec<usize> = (config.pw_min..=config.pw_max).collect();
        order.sort_by(|a, b| weights[*b].cmp(&weights[*a]));

        Ok(Self {
            store,
            config,
            buckets,
            bucket_ks,
            weights,
            order,
            total_ks_cnt,
        })
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Total number of candidates for this store and settings, before
    /// any skip/limit clamping.
    #[must_use]
    pub fn keyspace(&self) -> &BigUint {
        &self.total_ks_cnt
    }

    // =========================================================================
    // EMISSION
    // =========================================================================

    /// Emit every candidate in the configured window into `sink`, one
    /// per line, and flush.
    ///
    /// # Errors
    /// Rejects a skip/limit window that does not fit the keyspace;
    /// propagates sink failures.
    pub fn run<W: Write>(mut self, sink: &mut W) -> Result<(), Error> {
        let mut total_ks_cnt = self.total_ks_cnt.clone();
        let skip = self.config.skip.clone();

        if !skip.is_zero() && skip >= total_ks_cnt {
            return Err(ConfigError::SkipBeyondKeyspace.into());
        }
        if let Some(limit) = self.config.limit.clone() {
            if limit > total_ks_cnt {
                return Err(ConfigError::LimitBeyondKeyspace.into());
            }
            let window_end = &skip + &limit;
            if window_end > total_ks_cnt {
                return Err(ConfigError::WindowBeyondKeyspace.into());
            }
            total_ks_cnt = window_end;
        }

        let mut total_ks_pos = if skip.is_zero() {
            BigUint::zero()
        } else {
            self.seek(&skip)
        };

        self.emit(sink, &total_ks_cnt, &mut total_ks_pos, &skip)?;
        sink.flush().map_err(Error::Io)
    }
}
