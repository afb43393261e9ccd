//! Recoverable arena errors.
//!
//! Only environmental failures end up here. Misuse of the arena (scopes
//! closed out of order, bad alignment, teardown with open scopes) panics.

use std::error::Error;
use std::fmt;

/// Errors returned by allocation and block acquisition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
  /// The block provider could not supply a block.
  OutOfMemory {
    /// Block size that was requested, in bytes.
    requested: usize,
  },
  /// Size arithmetic for the request overflowed.
  CapacityOverflow {
    /// Requested allocation size, in bytes.
    requested: usize,
  },
  /// The block provider cannot honor the requested alignment.
  UnsupportedAlignment {
    /// Alignment that was requested.
    alignment: usize,
    /// Largest alignment the provider supports.
    limit: usize,
  },
  /// An `ArenaConfig` failed validation.
  InvalidConfig {
    /// What was wrong with it.
    reason: &'static str,
  },
}

impl fmt::Display for ArenaError {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match self {
      Self::OutOfMemory { requested } => {
        write!(f, "block provider out of memory: requested {requested} bytes")
      }
      Self::CapacityOverflow { requested } => {
        write!(f, "allocation of {requested} bytes overflows the address space")
      }
      Self::UnsupportedAlignment { alignment, limit } => {
        write!(
          f,
          "alignment {alignment} is not supported by the block provider (limit {limit})"
        )
      }
      Self::InvalidConfig { reason } => write!(f, "invalid arena config: {reason}"),
    }
  }
}

impl Error for ArenaError {}
