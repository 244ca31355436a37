//! Emission Scheduler
//!
//! One round visits every candidate length, heaviest first, taking up to
//! `weight[len]` candidates from the length's current chain before
//! moving on. The emission gate holds output back until the global
//! cursor passes the skip offset.

use std::io::Write;

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::radix::{self, Candidate};
use crate::types::{Error, CHAIN_ELEMS_MAX};

impl super::Generator {
    /// Run scheduler rounds until the window is exhausted.
    pub(super) fn emit<W: Write>(
        &mut self,
        sink: &mut W,
        total_ks_cnt: &BigUint,
        total_ks_pos: &mut BigUint,
        skip: &BigUint,
    ) -> Result<(), Error> {
        let order = self.order.clone();

        while *total_ks_pos < *total_ks_cnt {
            for &pw_len in &order {
                let quota = self.weights[pw_len];
                let mut outs_done = 0u64;

                let mut candidate = Candidate::new(pw_len);

                while outs_done < quota {
                    let bucket = &mut self.buckets[pw_len];
                    let chains_pos = bucket.chains_pos;
                    if chains_pos == bucket.chains.len() {
                        break;
                    }
                    let chain = &mut bucket.chains[chains_pos];

                    // Whichever runs out first: the chain, the window,
                    // or this round's quota. Bounded by the quota, so it
                    // fits a machine word.
                    let ks_left = &chain.ks_cnt - &chain.ks_pos;
                    let total_left = total_ks_cnt - &*total_ks_pos;
                    let quota_left = quota - outs_done;
                    let iter_steps = ks_left
                        .min(total_left)
                        .to_u64()
                        .map_or(quota_left, |v| v.min(quota_left));

                    if &*total_ks_pos + iter_steps > *skip {
                        let mut iter_pos = 0u64;

                        if *total_ks_pos < *skip {
                            // Entering the window mid-segment: decode the
                            // first emitted offset directly.
                            let enter = skip - &*total_ks_pos;
                            iter_pos = enter.to_u64().unwrap_or(0);
                            let first = &chain.ks_pos + &enter;
                            radix::set_positions(
                                chain,
                                &self.store,
                                &first,
                                &mut bucket.cur_positions,
                            );
                        }

                        candidate.fill(chain, &self.store, &bucket.cur_positions);

                        while iter_pos < iter_steps {
                            sink.write_all(candidate.bytes()).map_err(Error::Io)?;
                            candidate.bump(chain, &self.store, &mut bucket.cur_positions);
                            iter_pos += 1;
                        }
                    } else {
                        // Entirely below the skip offset: advance the
                        // decoder without emitting.
                        let ahead = &chain.ks_pos + iter_steps;
                        radix::set_positions(chain, &self.store, &ahead, &mut bucket.cur_positions);
                    }

                    outs_done += iter_steps;
                    *total_ks_pos += iter_steps;
                    chain.ks_pos += iter_steps;

                    if chain.ks_pos == chain.ks_cnt {
                        bucket.chains_pos += 1;
                        // The increments should have cycled the scratch
                        // to all zeros already, but just in case.
                        bucket.cur_positions = [0; CHAIN_ELEMS_MAX];
                    }

                    if *total_ks_pos == *total_ks_cnt {
                        break;
                    }
                }

                if *total_ks_pos == *total_ks_cnt {
                    break;
                }
            }
        }

        Ok(())
    }
}
