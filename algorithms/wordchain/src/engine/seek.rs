//! Skip Fast-Forward
//!
//! Advancing candidate by candidate is hopeless for large skips, so the
//! seek engine jumps whole scheduler rounds at a time: divide what is
//! left to skip by the weight of one round, advance every still-active
//! length by its share, refund any bucket overflow, and repeat with the
//! shrunken round. The sub-round remainder is left to the scheduler's
//! emission gate.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::radix;

impl super::Generator {
    /// Fast-forward the per-length cursors to within one round of
    /// `skip`, then translate each length's offset into its bucket's
    /// chain cursor and decoder scratch. Returns the global position
    /// reached, always in `(skip - round_weight, skip]`.
    pub(super) fn seek(&mut self, skip: &BigUint) -> BigUint {
        let pw_min = self.config.pw_min;
        let pw_max = self.config.pw_max;

        let mut skip_left = skip.clone();
        let mut pw_ks_pos = vec![BigUint::zero(); pw_max + 1];

        // The first round counts every length in range; later rounds
        // drop the buckets that ran dry.
        let mut round_weight: u64 = (pw_min..=pw_max).map(|len| self.weights[len]).sum();

        loop {
            let main_loops = &skip_left / round_weight;
            if main_loops.is_zero() {
                break;
            }

            for pw_len in pw_min..=pw_max {
                if pw_ks_pos[pw_len] < self.bucket_ks[pw_len] {
                    let delta = &main_loops * self.weights[pw_len];
                    pw_ks_pos[pw_len] += &delta;
                    skip_left -= &delta;

                    // Overshot the bucket: hand the excess back so a
                    // later, lighter round redistributes it.
                    if pw_ks_pos[pw_len] > self.bucket_ks[pw_len] {
                        let excess = &pw_ks_pos[pw_len] - &self.bucket_ks[pw_len];
                        skip_left += excess;
                    }
                }
            }

            round_weight = (pw_min..=pw_max)
                .filter(|&len| pw_ks_pos[len] < self.bucket_ks[len])
                .map(|len| self.weights[len])
                .sum();
        }

        let total_ks_pos = skip - &skip_left;

        // Translate each length offset into (chains_pos, ks_pos,
        // positions) by walking the sorted chain list. An overshot
        // bucket walks off the end and is simply exhausted.
        for pw_len in pw_min..=pw_max {
            let bucket = &mut self.buckets[pw_len];
            let mut rem = pw_ks_pos[pw_len].clone();
            let mut pos = 0;

            while pos < bucket.chains.len() && rem >= bucket.chains[pos].ks_cnt {
                rem -= &bucket.chains[pos].ks_cnt;
                pos += 1;
            }
            bucket.chains_pos = pos;

            if pos < bucket.chains.len() {
                bucket.chains[pos].ks_pos = rem.clone();
                radix::set_positions(
                    &bucket.chains[pos],
                    &self.store,
                    &rem,
                    &mut bucket.cur_positions,
                );
            }
        }

        total_ks_pos
    }
}
