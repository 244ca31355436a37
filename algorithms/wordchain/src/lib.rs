//! # Wordchain
//!
//! Standalone password-candidate generator built on the PRINCE
//! (PRobability INfinite Chained Elements) algorithm: every candidate is
//! a chain of short wordlist elements, every chain keyspace is computed
//! exactly, and any window of the global emission order can be produced
//! without materializing its predecessors — which is what makes
//! distributed runs cheap to shard with skip/limit.

//! # Usage
//! ```rust
//! use wordchain::{Config, Generator, WordStore};
//!
//! let mut store = WordStore::new();
//! store.push(b"a");
//! store.push(b"b");
//!
//! let config = Config {
//!     pw_max: 2,
//!     elem_cnt_max: 2,
//!     ..Config::default()
//! };
//!
//! let generator = Generator::new(store, config)?;
//! assert_eq!(generator.keyspace(), &6u32.into());
//!
//! let mut out = Vec::new();
//! generator.run(&mut out)?;
//! assert_eq!(out, b"aa\nba\nab\nbb\na\nb\n");
//! # Ok::<(), wordchain::Error>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod chain;
mod distribution;
mod engine;
mod radix;
mod store;
mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use engine::Generator;
pub use store::WordStore;
pub use types::{Config, ConfigError, Error, CHAIN_ELEMS_MAX, ELEM_LEN_MAX};
