//! Backends that hand raw blocks to an arena.
//!
//! ```text
//!   Arena ──acquire(layout)──▶ BlockProvider ──▶ heap / mmap
//!         ◀──release(ptr)────
//! ```

use std::alloc::{self, Layout};
use std::ptr::NonNull;

use crate::error::ArenaError;

/// Source of raw memory blocks for an arena.
///
/// Providers are only called on growth and release, never on the bump
/// path.
pub trait BlockProvider {
  /// Acquires a block of `layout.size()` bytes aligned to `layout.align()`.
  ///
  /// `layout.size()` is never zero.
  fn acquire(
    &mut self,
    layout: Layout,
  ) -> Result<NonNull<u8>, ArenaError>;

  /// Returns a block to the provider.
  ///
  /// # Safety
  ///
  /// `base` must come from `acquire` on this provider (or a clone of it)
  /// with the same `layout`, and must not be used afterwards.
  unsafe fn release(
    &mut self,
    base: NonNull<u8>,
    layout: Layout,
  );
}

/// Blocks from the global allocator.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeapProvider;

impl BlockProvider for HeapProvider {
  fn acquire(
    &mut self,
    layout: Layout,
  ) -> Result<NonNull<u8>, ArenaError> {
    debug_assert!(layout.size() > 0);

    // SAFETY: the arena never requests zero-sized blocks.
    let address = unsafe { alloc::alloc(layout) };

    NonNull::new(address).ok_or(ArenaError::OutOfMemory {
      requested: layout.size(),
    })
  }

  unsafe fn release(
    &mut self,
    base: NonNull<u8>,
    layout: Layout,
  ) {
    // SAFETY: the caller hands back a block `acquire` produced with `layout`.
    unsafe { alloc::dealloc(base.as_ptr(), layout) }
  }
}

/// Blocks mapped straight from the OS with `mmap(2)`.
///
/// Lengths are rounded up to whole pages, so mapped blocks come back
/// zero-filled and page-aligned.
#[cfg(unix)]
#[derive(Clone, Copy, Debug)]
pub struct MmapProvider {
  page_size: usize,
}

#[cfg(unix)]
impl MmapProvider {
  pub fn new() -> Self {
    // SAFETY: sysconf only reads a system constant.
    let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    let page_size = if page_size > 0 { page_size as usize } else { 4096 };

    Self { page_size }
  }

  pub fn page_size(&self) -> usize {
    self.page_size
  }

  fn mapped_len(
    &self,
    size: usize,
  ) -> Option<usize> {
    size.checked_add(self.page_size - 1)?;
    Some(crate::align_up!(size, self.page_size))
  }
}

#[cfg(unix)]
impl Default for MmapProvider {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(unix)]
impl BlockProvider for MmapProvider {
  fn acquire(
    &mut self,
    layout: Layout,
  ) -> Result<NonNull<u8>, ArenaError> {
    if layout.align() > self.page_size {
      return Err(ArenaError::UnsupportedAlignment {
        alignment: layout.align(),
        limit: self.page_size,
      });
    }

    let len = self.mapped_len(layout.size()).ok_or(ArenaError::CapacityOverflow {
      requested: layout.size(),
    })?;

    // SAFETY: an anonymous private mapping at a kernel-chosen address
    // aliases no existing memory.
    let address = unsafe {
      libc::mmap(
        std::ptr::null_mut(),
        len,
        libc::PROT_READ | libc::PROT_WRITE,
        libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
        -1,
        0,
      )
    };

    if address == libc::MAP_FAILED {
      return Err(ArenaError::OutOfMemory { requested: len });
    }

    NonNull::new(address as *mut u8).ok_or(ArenaError::OutOfMemory { requested: len })
  }

  unsafe fn release(
    &mut self,
    base: NonNull<u8>,
    layout: Layout,
  ) {
    if let Some(len) = self.mapped_len(layout.size()) {
      // SAFETY: `base` and `len` describe a mapping made by `acquire`.
      let result = unsafe { libc::munmap(base.as_ptr().cast(), len) };
      debug_assert_eq!(result, 0, "munmap of an arena block failed");
    }
  }
}
