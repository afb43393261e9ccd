//! Temporary regions with last-opened-first-closed rollback.
//!
//! ```text
//!   begin_scope            grow            grow           end_scope
//!   ┌──────┬────┐     ┌───────────┐    ┌───────────┐
//!   │ used │    │ ◀── │  footer   │ ◀──│  footer   │   pops both blocks,
//!   └──────┴────┘     └───────────┘    └───────────┘   rewinds the cursor
//!          ▲ snapshot                                   back to the snapshot
//! ```

use std::ptr::NonNull;

use log::trace;

use crate::arena::Arena;
use crate::provider::BlockProvider;

/// Snapshot of an arena taken by [`Arena::begin_scope`].
///
/// Hand it back to [`Arena::end_scope`] to release everything allocated
/// since. Scopes are not `Clone`, so each one ends at most once.
#[must_use = "a scope that is never ended keeps the arena from being cleared"]
#[derive(Debug)]
pub struct Scope {
  arena: u64,
  base: NonNull<u8>,
  position: usize,
  block_count: usize,
  depth: usize,
}

impl Scope {
  /// Cursor of the arena when the scope was opened.
  pub fn position(&self) -> usize {
    self.position
  }

  /// Nesting depth of the scope, starting at one.
  pub fn depth(&self) -> usize {
    self.depth
  }
}

impl<P: BlockProvider> Arena<P> {
  /// Opens a temporary region. Allocates nothing.
  pub fn begin_scope(&mut self) -> Scope {
    self.scope_count += 1;

    trace!(
      "arena {}: scope {} opened at position {} of block #{}",
      self.id, self.scope_count, self.block.position, self.block_count
    );

    Scope {
      arena: self.id,
      base: self.block.base,
      position: self.block.position,
      block_count: self.block_count,
      depth: self.scope_count,
    }
  }

  /// Rolls the arena back to the state it had when `scope` was opened.
  ///
  /// Blocks grown while the scope was open go back to the provider, so the
  /// cost is one release per grown block.
  ///
  /// # Panics
  ///
  /// Panics if `scope` came from another arena, is not the innermost open
  /// scope, or if the arena was rewound below the scope's snapshot.
  pub fn end_scope(
    &mut self,
    scope: Scope,
  ) {
    assert_eq!(scope.arena, self.id, "scope ended on an arena that did not open it");
    assert!(self.scope_count > 0, "end_scope with no open scope");
    assert_eq!(
      scope.depth, self.scope_count,
      "scopes must end in reverse order of opening: ending scope {} while scope {} is open",
      scope.depth, self.scope_count
    );
    assert!(
      self.block_count >= scope.block_count,
      "arena lost blocks that predate the scope ({} < {})",
      self.block_count,
      scope.block_count
    );

    while self.block_count > scope.block_count {
      self.free_current_block();
    }

    assert_eq!(self.block.base, scope.base, "arena block chain diverged from scope snapshot");
    assert!(
      self.block.position >= scope.position,
      "arena position {} is below the scope's position {}; scopes closed out of order",
      self.block.position,
      scope.position
    );

    self.block.position = scope.position;
    self.scope_count -= 1;

    trace!(
      "arena {}: scope {} closed, back to position {} of block #{}",
      self.id, scope.depth, scope.position, self.block_count
    );
  }

  /// Runs `f` inside a scope and rolls the arena back afterwards.
  pub fn scoped<R>(
    &mut self,
    f: impl FnOnce(&mut Self) -> R,
  ) -> R {
    let scope = self.begin_scope();
    let result = f(self);
    self.end_scope(scope);
    result
  }

  /// Asserts that every scope has been ended.
  pub fn check_all_scopes_closed(&self) {
    assert_eq!(
      self.scope_count, 0,
      "{} scope(s) still open",
      self.scope_count
    );
  }
}
