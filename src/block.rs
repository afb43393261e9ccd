use std::alloc::Layout;
use std::ptr::NonNull;

use crate::align::alignment_offset;
use crate::error::ArenaError;

/// One contiguous backing buffer and its bump cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Block {
  pub base: NonNull<u8>,
  pub capacity: usize,
  pub position: usize,
  /// Layout the block was acquired with. `None` when the memory belongs to
  /// someone else (caller buffer or parent arena).
  pub layout: Option<Layout>,
}

impl Block {
  pub const fn empty() -> Self {
    Self {
      base: NonNull::dangling(),
      capacity: 0,
      position: 0,
      layout: None,
    }
  }

  pub const fn new(
    base: NonNull<u8>,
    capacity: usize,
    layout: Option<Layout>,
  ) -> Self {
    Self {
      base,
      capacity,
      position: 0,
      layout,
    }
  }

  pub fn remaining(&self) -> usize {
    self.capacity - self.position
  }

  /// Bumps the cursor past `size` bytes aligned to `alignment`.
  ///
  /// `Ok(None)` means the block is too small; the cursor is untouched.
  pub fn bump(
    &mut self,
    size: usize,
    alignment: usize,
  ) -> Result<Option<NonNull<u8>>, ArenaError> {
    let cursor = (self.base.as_ptr() as usize).wrapping_add(self.position);
    let padding = alignment_offset(cursor, alignment);

    let overflow = ArenaError::CapacityOverflow { requested: size };
    let effective = size.checked_add(padding).ok_or(overflow.clone())?;
    let end = self.position.checked_add(effective).ok_or(overflow)?;

    if end > self.capacity {
      return Ok(None);
    }

    // SAFETY: `position + padding <= end <= capacity`, so the offset stays
    // inside (or one past the end of) the block.
    let address = unsafe { self.base.add(self.position + padding) };
    self.position = end;

    Ok(Some(address))
  }
}

/// Record of the block that was current before a growth.
///
/// Every block but the first in an arena's chain owns exactly one footer;
/// footers link back to older footers, so the chain pops in O(1).
#[derive(Debug)]
pub struct Footer {
  pub(crate) previous: Block,
  pub(crate) next: Option<Box<Footer>>,
}

impl Footer {
  /// Base of the block that was current before the growth.
  pub fn base(&self) -> NonNull<u8> {
    self.previous.base
  }

  /// Capacity of that block.
  pub fn capacity(&self) -> usize {
    self.previous.capacity
  }

  /// Cursor of that block at the moment of growth.
  pub fn position(&self) -> usize {
    self.previous.position
  }
}
