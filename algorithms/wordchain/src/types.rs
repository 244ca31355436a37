//! Shared types used across the wordchain library.

use core::fmt;
use std::error;
use std::io;

use num_bigint::BigUint;

// =============================================================================
// LIMITS
// =============================================================================

/// Longest element — and therefore longest candidate — in bytes.
pub const ELEM_LEN_MAX: usize = 16;

/// Most elements a single chain may concatenate.
pub const CHAIN_ELEMS_MAX: usize = 8;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Generator settings.
///
/// The defaults reproduce an unrestricted run: every candidate length up
/// to [`ELEM_LEN_MAX`], every chain width up to [`CHAIN_ELEMS_MAX`], the
/// built-in length distribution, no skip, no limit.
#[derive(Debug, Clone)]
pub struct Config {
    /// Minimum candidate length.
    pub pw_min: usize,
    /// Maximum candidate length.
    pub pw_max: usize,
    /// Minimum number of elements per chain.
    pub elem_cnt_min: usize,
    /// Maximum number of elements per chain.
    pub elem_cnt_max: usize,
    /// Weigh candidate lengths by stored element counts instead of the
    /// built-in distribution.
    pub wl_dist_len: bool,
    /// Keyspace offset of the first emitted candidate.
    pub skip: BigUint,
    /// Cap on the number of emitted candidates. `None` runs to
    /// exhaustion; `Some(0)` emits nothing.
    pub limit: Option<BigUint>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pw_min: 1,
            pw_max: ELEM_LEN_MAX,
            elem_cnt_min: 1,
            elem_cnt_max: CHAIN_ELEMS_MAX,
            wl_dist_len: false,
            skip: BigUint::default(),
            limit: None,
        }
    }
}

impl Config {
    /// Check the range settings against each other and the engine limits.
    ///
    /// Skip and limit are validated later, once the keyspace is known.
    ///
    /// # Errors
    /// Returns the first failing check as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pw_min == 0 {
            return Err(ConfigError::PwMinZero);
        }
        if self.pw_max == 0 {
            return Err(ConfigError::PwMaxZero);
        }
        if self.elem_cnt_min == 0 {
            return Err(ConfigError::ElemCntMinZero);
        }
        if self.elem_cnt_max == 0 {
            return Err(ConfigError::ElemCntMaxZero);
        }
        if self.pw_min > self.pw_max {
            return Err(ConfigError::PwMinAbovePwMax {
                pw_min: self.pw_min,
                pw_max: self.pw_max,
            });
        }
        if self.elem_cnt_min > self.elem_cnt_max {
            return Err(ConfigError::ElemCntMinAboveMax {
                elem_cnt_min: self.elem_cnt_min,
                elem_cnt_max: self.elem_cnt_max,
            });
        }
        if self.pw_max > ELEM_LEN_MAX {
            return Err(ConfigError::PwMaxTooLarge { pw_max: self.pw_max });
        }
        if self.elem_cnt_max > self.pw_max {
            return Err(ConfigError::ElemCntMaxAbovePwMax {
                elem_cnt_max: self.elem_cnt_max,
                pw_max: self.pw_max,
            });
        }
        if self.elem_cnt_max > CHAIN_ELEMS_MAX {
            return Err(ConfigError::ElemCntMaxTooLarge {
                elem_cnt_max: self.elem_cnt_max,
            });
        }
        Ok(())
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Rejected generator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `pw_min` is zero.
    PwMinZero,
    /// `pw_max` is zero.
    PwMaxZero,
    /// `elem_cnt_min` is zero.
    ElemCntMinZero,
    /// `elem_cnt_max` is zero.
    ElemCntMaxZero,
    /// `pw_min` exceeds `pw_max`.
    PwMinAbovePwMax {
        /// Configured minimum candidate length.
        pw_min: usize,
        /// Configured maximum candidate length.
        pw_max: usize,
    },
    /// `elem_cnt_min` exceeds `elem_cnt_max`.
    ElemCntMinAboveMax {
        /// Configured minimum chain width.
        elem_cnt_min: usize,
        /// Configured maximum chain width.
        elem_cnt_max: usize,
    },
    /// `pw_max` exceeds [`ELEM_LEN_MAX`].
    PwMaxTooLarge {
        /// Configured maximum candidate length.
        pw_max: usize,
    },
    /// `elem_cnt_max` exceeds `pw_max`.
    ElemCntMaxAbovePwMax {
        /// Configured maximum chain width.
        elem_cnt_max: usize,
        /// Configured maximum candidate length.
        pw_max: usize,
    },
    /// `elem_cnt_max` exceeds [`CHAIN_ELEMS_MAX`].
    ElemCntMaxTooLarge {
        /// Configured maximum chain width.
        elem_cnt_max: usize,
    },
    /// `skip` does not leave a single candidate to emit.
    SkipBeyondKeyspace,
    /// `limit` exceeds the total keyspace.
    LimitBeyondKeyspace,
    /// `skip + limit` exceeds the total keyspace.
    WindowBeyondKeyspace,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::PwMinZero => write!(f, "value of pw-min must be greater than 0"),
            Self::PwMaxZero => write!(f, "value of pw-max must be greater than 0"),
            Self::ElemCntMinZero => write!(f, "value of elem-cnt-min must be greater than 0"),
            Self::ElemCntMaxZero => write!(f, "value of elem-cnt-max must be greater than 0"),
            Self::PwMinAbovePwMax { pw_min, pw_max } => write!(
                f,
                "value of pw-min ({pw_min}) must be smaller or equal than value of pw-max ({pw_max})"
            ),
            Self::ElemCntMinAboveMax {
                elem_cnt_min,
                elem_cnt_max,
            } => write!(
                f,
                "value of elem-cnt-min ({elem_cnt_min}) must be smaller or equal than value of elem-cnt-max ({elem_cnt_max})"
            ),
            Self::PwMaxTooLarge { pw_max } => write!(
                f,
                "value of pw-max ({pw_max}) must be smaller or equal than {ELEM_LEN_MAX}"
            ),
            Self::ElemCntMaxAbovePwMax {
                elem_cnt_max,
                pw_max,
            } => write!(
                f,
                "value of elem-cnt-max ({elem_cnt_max}) must be smaller or equal than value of pw-max ({pw_max})"
            ),
            Self::ElemCntMaxTooLarge { elem_cnt_max } => write!(
                f,
                "value of elem-cnt-max ({elem_cnt_max}) must be smaller or equal than {CHAIN_ELEMS_MAX}"
            ),
            Self::SkipBeyondKeyspace => {
                write!(f, "value of skip must be smaller than the total keyspace")
            }
            Self::LimitBeyondKeyspace => {
                write!(f, "value of limit cannot be larger than the total keyspace")
            }
            Self::WindowBeyondKeyspace => write!(
                f,
                "value of skip + limit cannot be larger than the total keyspace"
            ),
        }
    }
}

impl error::Error for ConfigError {}

/// Any failure surfaced by a generator run.
#[derive(Debug)]
pub enum Error {
    /// Rejected settings.
    Config(ConfigError),
    /// Sink write failure.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => e.fmt(f),
            Self::Io(e) => write!(f, "write failed: {e}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
