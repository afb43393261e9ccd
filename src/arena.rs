use std::alloc::Layout;
use std::mem;
use std::ptr::{self, NonNull};
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

use crate::align::effective_alignment;
use crate::block::{Block, Footer};
use crate::config::{self, ArenaConfig};
use crate::error::ArenaError;
use crate::provider::{BlockProvider, HeapProvider};

static NEXT_ARENA_ID: AtomicU64 = AtomicU64::new(1);

fn next_arena_id() -> u64 {
  NEXT_ARENA_ID.fetch_add(1, Ordering::Relaxed)
}

/// Region allocator over a chain of blocks.
///
/// Allocation bumps a cursor through the current block. When a request does
/// not fit, a new block of at least `min_block_size` bytes is acquired from
/// the provider and the old block is parked behind a [`Footer`]. Old blocks
/// never move, so earlier pointers stay valid until the memory is reclaimed
/// by [`end_scope`](Arena::end_scope), [`reset`](Arena::reset),
/// [`clear`](Arena::clear) or drop.
///
/// The arena is single-owner: every mutation takes `&mut self`.
pub struct Arena<P: BlockProvider = HeapProvider> {
  pub(crate) id: u64,
  pub(crate) block: Block,
  pub(crate) footer: Option<Box<Footer>>,
  pub(crate) block_count: usize,
  pub(crate) scope_count: usize,
  pub(crate) min_block_size: usize,
  pub(crate) block_align: usize,
  pub(crate) provider: P,
}

// SAFETY: the arena exclusively owns its provider-acquired blocks; borrowed
// regions (`from_raw_parts`, sub-arenas) carry that promise in their own
// safety contracts.
unsafe impl<P: BlockProvider + Send> Send for Arena<P> {}

impl Arena<HeapProvider> {
  /// Empty arena on the global allocator. The first allocation grows it.
  pub fn new() -> Self {
    Self::from_parts(Block::empty(), 0, ArenaConfig::default(), HeapProvider)
  }

  /// Arena on the global allocator with one block of `capacity` bytes.
  pub fn with_capacity(capacity: usize) -> Result<Self, ArenaError> {
    Self::with_capacity_in(capacity, HeapProvider, ArenaConfig::default())
  }

  /// Arena over memory the caller owns.
  ///
  /// # Safety
  ///
  /// `base` must be valid for reads and writes of `capacity` bytes for as
  /// long as the arena allocates from it, and nothing else may access that
  /// memory meanwhile. The arena never frees it.
  pub unsafe fn from_raw_parts(
    base: NonNull<u8>,
    capacity: usize,
  ) -> Self {
    unsafe { Self::from_raw_parts_in(base, capacity, HeapProvider, ArenaConfig::default()) }
  }
}

impl Default for Arena<HeapProvider> {
  fn default() -> Self {
    Self::new()
  }
}

impl<P: BlockProvider> Arena<P> {
  /// Empty arena with an injected provider.
  pub fn with_provider(
    provider: P,
    config: ArenaConfig,
  ) -> Result<Self, ArenaError> {
    config.validate()?;
    Ok(Self::from_parts(Block::empty(), 0, config, provider))
  }

  /// Arena whose first block of `capacity` bytes comes from `provider`.
  ///
  /// A zero capacity yields an empty arena.
  pub fn with_capacity_in(
    capacity: usize,
    mut provider: P,
    config: ArenaConfig,
  ) -> Result<Self, ArenaError> {
    config.validate()?;

    if capacity == 0 {
      return Ok(Self::from_parts(Block::empty(), 0, config, provider));
    }

    let layout = Layout::from_size_align(capacity, config.block_align)
      .map_err(|_| ArenaError::CapacityOverflow { requested: capacity })?;
    let base = provider.acquire(layout)?;

    debug!("arena: initial block of {capacity} bytes at {base:?}");

    Ok(Self::from_parts(Block::new(base, capacity, Some(layout)), 1, config, provider))
  }

  /// Arena over caller-owned memory, growing through `provider`.
  ///
  /// # Safety
  ///
  /// Same contract as [`Arena::from_raw_parts`].
  pub unsafe fn from_raw_parts_in(
    base: NonNull<u8>,
    capacity: usize,
    provider: P,
    config: ArenaConfig,
  ) -> Self {
    Self::from_parts(Block::new(base, capacity, None), 1, config, provider)
  }

  fn from_parts(
    block: Block,
    block_count: usize,
    config: ArenaConfig,
    provider: P,
  ) -> Self {
    Self {
      id: next_arena_id(),
      block,
      footer: None,
      block_count,
      scope_count: 0,
      min_block_size: config.min_block_size,
      block_align: config.block_align,
      provider,
    }
  }

  /// Allocates `size` bytes aligned to `alignment`.
  ///
  /// An `alignment` of zero means machine-word alignment. The memory is
  /// uninitialized.
  ///
  /// Zero-size requests never touch the arena: they return a dangling
  /// pointer whose address is the alignment itself, without moving the
  /// cursor or growing.
  ///
  /// # Panics
  ///
  /// Panics if `alignment` is neither zero nor a power of two.
  pub fn allocate(
    &mut self,
    size: usize,
    alignment: usize,
  ) -> Result<NonNull<u8>, ArenaError> {
    let alignment = effective_alignment(alignment);

    if size == 0 {
      // SAFETY: a power of two is never zero.
      return Ok(unsafe { NonNull::new_unchecked(ptr::without_provenance_mut(alignment)) });
    }

    if let Some(address) = self.block.bump(size, alignment)? {
      return Ok(address);
    }

    self.grow(size, alignment)?;

    match self.block.bump(size, alignment)? {
      Some(address) => Ok(address),
      None => panic!(
        "arena overflow after growth: {size} bytes (align {alignment}) \
         do not fit a fresh block of {}",
        self.block.capacity
      ),
    }
  }

  /// [`allocate`](Self::allocate) followed by zero-filling.
  pub fn allocate_zeroed(
    &mut self,
    size: usize,
    alignment: usize,
  ) -> Result<NonNull<u8>, ArenaError> {
    let address = self.allocate(size, alignment)?;

    // SAFETY: `address` points at `size` bytes this arena just handed out.
    unsafe { address.as_ptr().write_bytes(0, size) };

    Ok(address)
  }

  /// Allocates with a [`Layout`].
  pub fn allocate_layout(
    &mut self,
    layout: Layout,
  ) -> Result<NonNull<u8>, ArenaError> {
    self.allocate(layout.size(), layout.align())
  }

  /// Uninitialized storage for one `T`.
  pub fn push_struct<T>(&mut self) -> Result<NonNull<T>, ArenaError> {
    self.push_array::<T>(1)
  }

  /// Zeroed storage for one `T`.
  pub fn push_struct_zeroed<T>(&mut self) -> Result<NonNull<T>, ArenaError> {
    self.push_array_zeroed::<T>(1)
  }

  /// Uninitialized storage for `count` values of `T`.
  pub fn push_array<T>(
    &mut self,
    count: usize,
  ) -> Result<NonNull<T>, ArenaError> {
    let size = array_size::<T>(count)?;
    Ok(self.allocate(size, mem::align_of::<T>())?.cast())
  }

  /// Zeroed storage for `count` values of `T`.
  pub fn push_array_zeroed<T>(
    &mut self,
    count: usize,
  ) -> Result<NonNull<T>, ArenaError> {
    let size = array_size::<T>(count)?;
    Ok(self.allocate_zeroed(size, mem::align_of::<T>())?.cast())
  }

  /// Moves `value` into the arena.
  ///
  /// The arena never runs destructors, so a `T` that owns resources leaks
  /// them unless the caller drops it in place.
  pub fn push_value<T>(
    &mut self,
    value: T,
  ) -> Result<NonNull<T>, ArenaError> {
    let address = self.push_struct::<T>()?;

    // SAFETY: fresh, aligned, exclusively owned storage for one `T`.
    unsafe { address.as_ptr().write(value) };

    Ok(address)
  }

  /// Copies `values` into the arena.
  pub fn push_copy_slice<T: Copy>(
    &mut self,
    values: &[T],
  ) -> Result<NonNull<[T]>, ArenaError> {
    let address = self.push_array::<T>(values.len())?;

    // SAFETY: the destination was just allocated for `values.len()` items
    // and cannot overlap the source.
    unsafe { ptr::copy_nonoverlapping(values.as_ptr(), address.as_ptr(), values.len()) };

    Ok(NonNull::slice_from_raw_parts(address, values.len()))
  }

  fn grow(
    &mut self,
    size: usize,
    alignment: usize,
  ) -> Result<(), ArenaError> {
    if self.min_block_size == 0 {
      self.min_block_size = config::default_min_block_size();
    }

    let capacity = size.max(self.min_block_size);
    let layout = Layout::from_size_align(capacity, alignment.max(self.block_align))
      .map_err(|_| ArenaError::CapacityOverflow { requested: size })?;
    let base = self.provider.acquire(layout)?;

    let previous = mem::replace(&mut self.block, Block::new(base, capacity, Some(layout)));

    if self.block_count > 0 {
      self.footer = Some(Box::new(Footer {
        previous,
        next: self.footer.take(),
      }));
    }

    self.block_count += 1;

    debug!(
      "arena {}: grew to block #{} of {capacity} bytes at {base:?} for a {size} byte request",
      self.id, self.block_count
    );

    Ok(())
  }

  /// Releases the current block and makes the previous one current again.
  ///
  /// # Panics
  ///
  /// Panics if the arena holds no block.
  pub fn free_current_block(&mut self) {
    assert!(self.block_count > 0, "free_current_block on an arena with no blocks");

    let released = match self.footer.take() {
      Some(footer) => {
        let Footer { previous, next } = *footer;
        self.footer = next;
        mem::replace(&mut self.block, previous)
      }
      None => mem::replace(&mut self.block, Block::empty()),
    };

    self.block_count -= 1;

    if let Some(layout) = released.layout {
      // SAFETY: the block was acquired from this provider with `layout`,
      // and every pointer into it is invalidated by the caller's rewind.
      unsafe { self.provider.release(released.base, layout) };
    }

    debug!(
      "arena {}: released block of {} bytes at {:?}, {} left",
      self.id, released.capacity, released.base, self.block_count
    );
  }

  /// Tears the arena down, returning every block to the provider.
  ///
  /// The arena stays usable; the next allocation grows it again.
  ///
  /// # Panics
  ///
  /// Panics if a scope is still open.
  pub fn clear(&mut self) {
    assert_eq!(
      self.scope_count, 0,
      "arena cleared with {} open scope(s)",
      self.scope_count
    );

    self.release_all();
  }

  /// Drops every grown block and rewinds the first one to empty.
  ///
  /// # Panics
  ///
  /// Panics if a scope is still open.
  pub fn reset(&mut self) {
    assert_eq!(
      self.scope_count, 0,
      "arena reset with {} open scope(s)",
      self.scope_count
    );

    while self.block_count > 1 {
      self.free_current_block();
    }

    self.block.position = 0;
  }

  /// Moves the cursor of the current block back to `position`.
  ///
  /// # Panics
  ///
  /// Panics if `position` is past the cursor.
  pub fn set_position(
    &mut self,
    position: usize,
  ) {
    assert!(
      position <= self.block.position,
      "set_position({position}) beyond the cursor at {}",
      self.block.position
    );

    self.block.position = position;
  }

  fn release_all(&mut self) {
    while self.block_count > 0 {
      self.free_current_block();
    }
  }

  /// Base of the current block.
  pub fn base(&self) -> NonNull<u8> {
    self.block.base
  }

  /// Capacity of the current block in bytes.
  pub fn capacity(&self) -> usize {
    self.block.capacity
  }

  /// Bytes used in the current block, padding included.
  pub fn position(&self) -> usize {
    self.block.position
  }

  /// Bytes left in the current block.
  pub fn remaining(&self) -> usize {
    self.block.remaining()
  }

  pub fn block_count(&self) -> usize {
    self.block_count
  }

  pub fn scope_count(&self) -> usize {
    self.scope_count
  }

  /// Minimum grown block size, or zero if not resolved yet.
  pub fn min_block_size(&self) -> usize {
    self.min_block_size
  }

  /// Footer of the current block, describing the block before it.
  pub fn last_footer(&self) -> Option<&Footer> {
    self.footer.as_deref()
  }

  pub fn provider(&self) -> &P {
    &self.provider
  }

  pub(crate) fn config(&self) -> ArenaConfig {
    ArenaConfig {
      min_block_size: self.min_block_size,
      block_align: self.block_align,
    }
  }
}

impl<P: BlockProvider> Drop for Arena<P> {
  fn drop(&mut self) {
    if self.scope_count > 0 {
      log::warn!("arena {} dropped with {} open scope(s)", self.id, self.scope_count);
    }

    self.release_all();
  }
}

impl<P: BlockProvider> std::fmt::Debug for Arena<P> {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    f.debug_struct("Arena")
      .field("id", &self.id)
      .field("base", &self.block.base)
      .field("capacity", &self.block.capacity)
      .field("position", &self.block.position)
      .field("block_count", &self.block_count)
      .field("scope_count", &self.scope_count)
      .field("min_block_size", &self.min_block_size)
      .finish()
  }
}

fn array_size<T>(count: usize) -> Result<usize, ArenaError> {
  mem::size_of::<T>()
    .checked_mul(count)
    .ok_or(ArenaError::CapacityOverflow { requested: usize::MAX })
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;
  use std::rc::Rc;

  use test_log::test;

  use super::*;

  #[derive(Clone, Default)]
  struct Ledger {
    log: Rc<RefCell<Vec<(&'static str, usize)>>>,
  }

  impl BlockProvider for Ledger {
    fn acquire(
      &mut self,
      layout: Layout,
    ) -> Result<NonNull<u8>, ArenaError> {
      self.log.borrow_mut().push(("acquire", layout.size()));
      HeapProvider.acquire(layout)
    }

    unsafe fn release(
      &mut self,
      base: NonNull<u8>,
      layout: Layout,
    ) {
      self.log.borrow_mut().push(("release", layout.size()));
      unsafe { HeapProvider.release(base, layout) }
    }
  }

  struct Exhausted;

  impl BlockProvider for Exhausted {
    fn acquire(
      &mut self,
      layout: Layout,
    ) -> Result<NonNull<u8>, ArenaError> {
      Err(ArenaError::OutOfMemory {
        requested: layout.size(),
      })
    }

    unsafe fn release(
      &mut self,
      _: NonNull<u8>,
      _: Layout,
    ) {
      unreachable!("nothing was ever acquired");
    }
  }

  fn small_arena(ledger: &Ledger) -> Arena<Ledger> {
    Arena::with_provider(ledger.clone(), ArenaConfig::new().with_min_block_size(64)).unwrap()
  }

  #[test]
  fn test_alloc() {
    let mut arena = Arena::new();

    unsafe {
      let first = arena.push_struct::<u64>().unwrap();
      first.as_ptr().write(3);

      let count = 6;
      let second = arena.push_array::<u16>(count).unwrap();

      for i in 0..count {
        second.as_ptr().add(i).write((i + 1) as u16);
      }

      assert_eq!(*first.as_ptr(), 3);

      for i in 0..count {
        assert_eq!((i + 1) as u16, *second.as_ptr().add(i));
      }

      assert!(second.as_ptr() as usize > first.as_ptr() as usize);
    }
  }

  #[test]
  fn new_arena_is_empty_until_first_allocation() {
    let mut arena = Arena::new();
    assert_eq!(arena.block_count(), 0);
    assert_eq!(arena.capacity(), 0);
    assert_eq!(arena.min_block_size(), 0);

    arena.allocate(1, 1).unwrap();
    assert_eq!(arena.block_count(), 1);
    assert!(arena.min_block_size() > 0);
    assert!(arena.capacity() >= arena.min_block_size());
  }

  #[test]
  fn with_capacity_acquires_one_block() {
    let ledger = Ledger::default();
    let arena = Arena::with_capacity_in(128, ledger.clone(), ArenaConfig::default()).unwrap();

    assert_eq!(arena.block_count(), 1);
    assert_eq!(arena.capacity(), 128);
    assert!(arena.last_footer().is_none());
    assert_eq!(*ledger.log.borrow(), vec![("acquire", 128)]);

    drop(arena);
    assert_eq!(*ledger.log.borrow(), vec![("acquire", 128), ("release", 128)]);
  }

  #[test]
  fn growth_parks_old_block_in_footer() {
    let ledger = Ledger::default();
    let mut arena = small_arena(&ledger);

    arena.allocate(16, 8).unwrap();
    arena.allocate(16, 8).unwrap();
    let first_base = arena.base();

    arena.allocate(100, 8).unwrap();

    assert_eq!(arena.block_count(), 2);
    assert_eq!(arena.capacity(), 100);
    assert_eq!(arena.position(), 100);

    let footer = arena.last_footer().unwrap();
    assert_eq!(footer.base(), first_base);
    assert_eq!(footer.capacity(), 64);
    assert_eq!(footer.position(), 32);
  }

  #[test]
  fn free_current_block_restores_previous() {
    let ledger = Ledger::default();
    let mut arena = small_arena(&ledger);

    arena.allocate(40, 8).unwrap();
    let base = arena.base();
    arena.allocate(40, 8).unwrap();
    assert_eq!(arena.block_count(), 2);

    arena.free_current_block();

    assert_eq!(arena.block_count(), 1);
    assert_eq!(arena.base(), base);
    assert_eq!(arena.position(), 40);
    assert_eq!(arena.capacity(), 64);
  }

  #[test]
  fn clear_returns_every_block() {
    let ledger = Ledger::default();
    let mut arena = small_arena(&ledger);

    for _ in 0..5 {
      arena.allocate(60, 4).unwrap();
    }
    assert_eq!(arena.block_count(), 5);

    arena.clear();

    assert_eq!(arena.block_count(), 0);
    assert_eq!(arena.capacity(), 0);
    let log = ledger.log.borrow();
    assert_eq!(log.iter().filter(|(op, _)| *op == "acquire").count(), 5);
    assert_eq!(log.iter().filter(|(op, _)| *op == "release").count(), 5);
  }

  #[test]
  fn arena_is_reusable_after_clear() {
    let ledger = Ledger::default();
    let mut arena = small_arena(&ledger);

    arena.allocate(8, 8).unwrap();
    arena.clear();
    arena.allocate(8, 8).unwrap();

    assert_eq!(arena.block_count(), 1);
    assert_eq!(arena.position(), 8);
  }

  #[test]
  fn reset_keeps_first_block() {
    let ledger = Ledger::default();
    let mut arena = small_arena(&ledger);

    arena.allocate(50, 1).unwrap();
    let first = arena.base();
    arena.allocate(50, 1).unwrap();
    arena.allocate(50, 1).unwrap();

    arena.reset();

    assert_eq!(arena.block_count(), 1);
    assert_eq!(arena.base(), first);
    assert_eq!(arena.position(), 0);
  }

  #[test]
  fn zeroed_allocation_is_zeroed() {
    let mut arena = Arena::with_capacity(256).unwrap();

    let dirty = arena.allocate(64, 1).unwrap();
    unsafe { dirty.as_ptr().write_bytes(0xFF, 64) };
    arena.set_position(0);

    let clean = arena.push_array_zeroed::<u32>(16).unwrap();
    assert_eq!(clean.cast::<u8>(), dirty);

    let values = unsafe { std::slice::from_raw_parts(clean.as_ptr(), 16) };
    assert!(values.iter().all(|&v| v == 0));
  }

  #[test]
  fn push_value_and_slice() {
    let mut arena = Arena::new();

    let value = arena.push_value((7u8, 9u64)).unwrap();
    let slice = arena.push_copy_slice(&[1.0f32, 2.0, 3.0]).unwrap();

    unsafe {
      assert_eq!(*value.as_ptr(), (7, 9));
      assert_eq!(slice.as_ref(), &[1.0, 2.0, 3.0]);
    }
    assert_eq!(value.as_ptr() as usize % mem::align_of::<(u8, u64)>(), 0);
  }

  #[test]
  fn zero_alignment_is_word_alignment() {
    let mut arena = Arena::new();
    arena.allocate(1, 1).unwrap();

    let address = arena.allocate(8, 0).unwrap();
    assert_eq!(address.as_ptr() as usize % mem::size_of::<usize>(), 0);
  }

  #[test]
  fn large_alignment_is_honored_across_growth() {
    let ledger = Ledger::default();
    let mut arena = small_arena(&ledger);

    arena.allocate(3, 1).unwrap();
    let address = arena.allocate(32, 256).unwrap();

    assert_eq!(address.as_ptr() as usize % 256, 0);
  }

  #[test]
  fn provider_exhaustion_is_recoverable() {
    let mut arena = Arena::with_provider(
      Exhausted,
      ArenaConfig::new().with_min_block_size(64),
    )
    .unwrap();

    assert_eq!(arena.allocate(8, 8), Err(ArenaError::OutOfMemory { requested: 64 }));
    assert_eq!(arena.block_count(), 0);
    assert_eq!(arena.position(), 0);
  }

  #[test]
  fn array_size_overflow_is_reported() {
    let mut arena = Arena::new();
    assert!(matches!(
      arena.push_array::<u64>(usize::MAX),
      Err(ArenaError::CapacityOverflow { .. })
    ));
    assert_eq!(arena.block_count(), 0);
  }

  #[test]
  fn raw_parts_memory_is_not_released() {
    let ledger = Ledger::default();
    let mut buffer = [0u64; 4];
    let base = NonNull::new(buffer.as_mut_ptr() as *mut u8).unwrap();

    let mut arena = unsafe {
      Arena::from_raw_parts_in(base, 32, ledger.clone(), ArenaConfig::new().with_min_block_size(64))
    };
    assert_eq!(arena.allocate(32, 8).unwrap(), base);
    arena.allocate(1, 1).unwrap();
    arena.clear();

    assert_eq!(*ledger.log.borrow(), vec![("acquire", 64), ("release", 64)]);
  }

  #[test]
  #[should_panic(expected = "open scope")]
  fn clear_with_open_scope_panics() {
    let mut arena = Arena::new();
    let _scope = arena.begin_scope();
    arena.clear();
  }

  #[test]
  #[should_panic(expected = "no blocks")]
  fn free_on_empty_arena_panics() {
    Arena::new().free_current_block();
  }

  #[test]
  #[should_panic(expected = "beyond the cursor")]
  fn set_position_forward_panics() {
    let mut arena = Arena::new();
    arena.allocate(8, 8).unwrap();
    arena.set_position(9);
  }

  #[test]
  #[should_panic(expected = "not a power of two")]
  fn misaligned_request_panics() {
    let mut arena = Arena::new();
    let _ = arena.allocate(8, 3);
  }

  #[test]
  #[should_panic(expected = "open scope")]
  fn reset_with_open_scope_panics() {
    let mut arena = Arena::new();
    arena.allocate(8, 8).unwrap();
    let _scope = arena.begin_scope();
    arena.reset();
  }

  #[test]
  fn blocks_honor_configured_alignment() {
    let config = ArenaConfig::new().with_min_block_size(64).with_block_align(4096);

    let mut arena = Arena::with_capacity_in(100, HeapProvider, config).unwrap();
    assert_eq!(arena.base().as_ptr() as usize % 4096, 0);

    arena.allocate(100, 1).unwrap();
    arena.allocate(1, 1).unwrap();
    assert_eq!(arena.block_count(), 2);
    assert_eq!(arena.base().as_ptr() as usize % 4096, 0);
  }

  #[test]
  fn drop_with_open_scopes_releases_every_block() {
    let ledger = Ledger::default();

    {
      let mut arena = small_arena(&ledger);
      arena.allocate(40, 8).unwrap();
      let _outer = arena.begin_scope();
      arena.allocate(40, 8).unwrap();
      let _inner = arena.begin_scope();
      arena.allocate(40, 8).unwrap();
      assert_eq!(arena.block_count(), 3);
      assert_eq!(arena.scope_count(), 2);
    }

    let log = ledger.log.borrow();
    assert_eq!(log.iter().filter(|(op, _)| *op == "acquire").count(), 3);
    assert_eq!(log.iter().filter(|(op, _)| *op == "release").count(), 3);
  }

  #[test]
  fn zero_size_requests_never_touch_the_arena() {
    let ledger = Ledger::default();
    let mut arena = small_arena(&ledger);

    for alignment in [1usize, 8, 256] {
      let address = arena.allocate(0, alignment).unwrap();
      assert_eq!(address.as_ptr() as usize, alignment);
    }
    assert_eq!(arena.block_count(), 0);
    assert!(ledger.log.borrow().is_empty());

    arena.allocate(64, 8).unwrap();
    assert_eq!(arena.remaining(), 0);

    let address = arena.allocate(0, 1).unwrap();
    assert_eq!(address.as_ptr() as usize, 1);
    assert_eq!(arena.position(), 64);
    assert_eq!(arena.block_count(), 1);

    let empty = arena.push_array::<u64>(0).unwrap();
    assert_eq!(empty.as_ptr() as usize, mem::align_of::<u64>());
  }
}
