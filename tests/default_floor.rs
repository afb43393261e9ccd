//! The process-wide block floor is global state, so it gets a test binary of
//! its own.

use rarena::config::{default_min_block_size, set_default_min_block_size};
use rarena::{Arena, ArenaConfig, HeapProvider};

#[test]
fn default_floor_sizes_only_unresolved_arenas() {
  assert_eq!(default_min_block_size(), ArenaConfig::DEFAULT_MIN_BLOCK_SIZE);

  let mut grown = Arena::new();
  grown.allocate(1, 1).unwrap();
  assert_eq!(grown.capacity(), ArenaConfig::DEFAULT_MIN_BLOCK_SIZE);

  let mut pinned = Arena::with_provider(
    HeapProvider,
    ArenaConfig::new().with_min_block_size(128),
  )
  .unwrap();

  let untouched = Arena::new();

  set_default_min_block_size(4096);
  assert_eq!(default_min_block_size(), 4096);

  let mut lazy = Arena::new();
  lazy.allocate(1, 1).unwrap();
  assert_eq!(lazy.capacity(), 4096);
  assert_eq!(lazy.min_block_size(), 4096);

  let mut untouched = untouched;
  untouched.allocate(1, 1).unwrap();
  assert_eq!(untouched.capacity(), 4096);

  let remaining = grown.remaining();
  grown.allocate(remaining + 1, 1).unwrap();
  assert_eq!(grown.block_count(), 2);
  assert_eq!(grown.capacity(), ArenaConfig::DEFAULT_MIN_BLOCK_SIZE);
  assert_eq!(grown.min_block_size(), ArenaConfig::DEFAULT_MIN_BLOCK_SIZE);

  pinned.allocate(1, 1).unwrap();
  assert_eq!(pinned.capacity(), 128);

  set_default_min_block_size(ArenaConfig::DEFAULT_MIN_BLOCK_SIZE);
}
