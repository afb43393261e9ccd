//! Arena configuration parameters.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::ArenaError;

static DEFAULT_MIN_BLOCK_SIZE: AtomicUsize = AtomicUsize::new(ArenaConfig::DEFAULT_MIN_BLOCK_SIZE);

/// Sets the process-wide floor for grown blocks.
///
/// Only arenas that have not resolved their minimum block size yet (those
/// built with `min_block_size == 0` that have never grown) pick this up.
///
/// # Panics
///
/// Panics if `bytes` is zero.
pub fn set_default_min_block_size(bytes: usize) {
  assert!(bytes > 0, "minimum block size must be non-zero");
  DEFAULT_MIN_BLOCK_SIZE.store(bytes, Ordering::Relaxed);
}

/// Current process-wide floor for grown blocks.
pub fn default_min_block_size() -> usize {
  DEFAULT_MIN_BLOCK_SIZE.load(Ordering::Relaxed)
}

/// Configuration for an [`Arena`](crate::Arena).
///
/// Validated at construction; copied into the arena afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
  /// Floor, in bytes, for the capacity of every newly grown block.
  ///
  /// Zero defers to [`default_min_block_size`], read the first time the
  /// arena needs to grow.
  pub min_block_size: usize,

  /// Minimum alignment of every block requested from the provider.
  ///
  /// Default: 16. Must be a power of two.
  pub block_align: usize,
}

impl ArenaConfig {
  /// Default floor for grown blocks: 64 KiB.
  pub const DEFAULT_MIN_BLOCK_SIZE: usize = 64 * 1024;

  /// Default block alignment, enough for any primitive type.
  pub const DEFAULT_BLOCK_ALIGN: usize = 16;

  /// Config that resolves the minimum block size lazily.
  pub const fn new() -> Self {
    Self {
      min_block_size: 0,
      block_align: Self::DEFAULT_BLOCK_ALIGN,
    }
  }

  /// Pins the minimum block size instead of using the process-wide default.
  pub const fn with_min_block_size(
    mut self,
    bytes: usize,
  ) -> Self {
    self.min_block_size = bytes;
    self
  }

  /// Overrides the alignment blocks are requested with.
  pub const fn with_block_align(
    mut self,
    align: usize,
  ) -> Self {
    self.block_align = align;
    self
  }

  /// Checks the config for values the arena cannot work with.
  pub fn validate(&self) -> Result<(), ArenaError> {
    if !self.block_align.is_power_of_two() {
      return Err(ArenaError::InvalidConfig {
        reason: "block_align must be a power of two",
      });
    }

    if self.min_block_size > isize::MAX as usize {
      return Err(ArenaError::InvalidConfig {
        reason: "min_block_size exceeds isize::MAX",
      });
    }

    Ok(())
  }
}

impl Default for ArenaConfig {
  fn default() -> Self {
    Self::new()
  }
}
