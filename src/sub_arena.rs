use log::debug;

use crate::arena::Arena;
use crate::error::ArenaError;
use crate::provider::BlockProvider;

impl<P: BlockProvider + Clone> Arena<P> {
  /// Carves a child arena out of one `size`-byte allocation.
  ///
  /// The child starts with that allocation as its only block and grows
  /// through its own clone of the provider; the parent's chain is never
  /// touched again.
  ///
  /// # Safety
  ///
  /// The carved region belongs to the parent. The child must not allocate
  /// once the parent reclaims it (scope end, reset, clear or drop of the
  /// parent).
  pub unsafe fn create_sub_arena(
    &mut self,
    size: usize,
    alignment: usize,
  ) -> Result<Arena<P>, ArenaError> {
    let base = self.allocate(size, alignment)?;

    let child = unsafe {
      Arena::from_raw_parts_in(
        base,
        size,
        self.provider.clone(),
        self.config(),
      )
    };

    debug!("arena {}: carved sub-arena {} of {size} bytes at {base:?}", self.id, child.id);

    Ok(child)
  }
}

#[cfg(test)]
mod tests {
  use test_log::test;

  use crate::config::ArenaConfig;
  use crate::provider::HeapProvider;

  use super::*;

  #[test]
  fn sub_arena_lives_inside_parent() {
    let mut parent = Arena::with_capacity(1024).unwrap();
    let parent_base = parent.base().as_ptr() as usize;

    let mut child = unsafe { parent.create_sub_arena(256, 16).unwrap() };
    assert_eq!(child.block_count(), 1);
    assert_eq!(child.capacity(), 256);
    assert_eq!(child.position(), 0);
    assert_eq!(parent.position(), 256);

    let address = child.allocate(100, 8).unwrap().as_ptr() as usize;
    assert!(address >= parent_base && address + 100 <= parent_base + 1024);
  }

  #[test]
  fn sub_arena_grows_on_its_own() {
    let mut parent = Arena::with_capacity_in(
      512,
      HeapProvider,
      ArenaConfig::new().with_min_block_size(64),
    )
    .unwrap();

    let mut child = unsafe { parent.create_sub_arena(32, 8).unwrap() };
    child.allocate(32, 8).unwrap();
    child.allocate(1, 1).unwrap();

    assert_eq!(child.block_count(), 2);
    assert_eq!(child.min_block_size(), 64);
    assert_eq!(parent.block_count(), 1);

    drop(child);
    assert_eq!(parent.position(), 32);
  }

  #[test]
  fn sub_arena_failure_leaves_parent_untouched() {
    let mut parent = Arena::with_capacity(64).unwrap();
    let result = unsafe { parent.create_sub_arena(usize::MAX, 8) };

    assert!(matches!(result, Err(ArenaError::CapacityOverflow { .. })));
    assert_eq!(parent.position(), 0);
    assert_eq!(parent.block_count(), 1);
  }
}
