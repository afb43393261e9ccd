//! # rarena - A Chained Region Allocator
//!
//! This crate provides a **region allocator** (arena): a bump allocator that
//! grows by chaining blocks and rolls back in bulk through nested scopes.
//!
//! ## Overview
//!
//! ```text
//!   One block:
//!
//!   ┌─────┬─────┬──┬─────┬──────────────────────────────────────┐
//!   │ A1  │ A2  │//│ A3  │              Free Space              │
//!   └─────┴─────┴──┴─────┴──────────────────────────────────────┘
//!   ▲                    ▲                                      ▲
//!   base              position                              capacity
//!                  (next alloc)
//!
//!   // = alignment padding. Allocation moves `position` forward: O(1).
//! ```
//!
//! When a request does not fit, a new block of at least `min_block_size`
//! bytes is acquired and the old one is parked behind a footer:
//!
//! ```text
//!   Block chain after two growths:
//!
//!   ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//!   │   block #1   │ ◀── │   block #2   │ ◀── │   block #3   │ ◀── Arena
//!   │              │     │ footer:      │     │ footer:      │
//!   │              │     │  #1 base,    │     │  #2 base,    │
//!   │              │     │  cap, pos    │     │  cap, pos    │
//!   └──────────────┘     └──────────────┘     └──────────────┘
//!
//!   Old blocks never move: earlier pointers stay valid.
//!   free_current_block() pops the top block and restores the footer.
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//!   rarena
//!   ├── align      - Alignment math (align_up!, alignment_offset)
//!   ├── arena      - Arena: bump allocation, growth, block release
//!   ├── block      - Block and Footer bookkeeping
//!   ├── config     - ArenaConfig and the process-wide block size floor
//!   ├── error      - ArenaError
//!   ├── provider   - BlockProvider, HeapProvider, MmapProvider
//!   ├── scope      - Scope: nested temporary regions
//!   └── sub_arena  - Child arenas carved from a parent allocation
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use rarena::Arena;
//!
//! let mut arena = Arena::new();
//!
//! let weights = arena.push_array_zeroed::<f32>(64).unwrap();
//!
//! let scope = arena.begin_scope();
//! let scratch = arena.push_array::<f32>(4096).unwrap();
//! unsafe { scratch.as_ptr().write(1.5) };
//! arena.end_scope(scope); // `scratch` is gone, `weights` is not
//!
//! unsafe { assert_eq!(*weights.as_ptr(), 0.0) };
//! arena.clear();
//! assert_eq!(arena.block_count(), 0);
//! ```
//!
//! ## Scopes
//!
//! A [`Scope`] snapshots the arena. Ending it pops every block grown since
//! and rewinds the cursor, in time proportional to the blocks released.
//! Scopes end in reverse order of opening; anything else panics.
//!
//! ## Errors
//!
//! Misuse panics: scopes out of order, clearing with open scopes,
//! non-power-of-two alignment. Running out of memory in the
//! [`BlockProvider`] is returned as [`ArenaError`].
//!
//! ## Limitations
//!
//! - **Single-threaded only**: no synchronization; one arena per thread
//! - **No individual free**: memory comes back by scope, reset or clear
//! - **No destructors**: values pushed into the arena are never dropped
//!
//! ## Safety
//!
//! Allocation is safe and returns `NonNull` pointers. Dereferencing them is
//! `unsafe`: a pointer is valid until the scope that was open when it was
//! handed out ends, or the arena is reset, cleared or dropped.

pub mod align;
mod arena;
mod block;
pub mod config;
mod error;
pub mod provider;
mod scope;
mod sub_arena;

pub use align::{alignment_offset, effective_alignment};
pub use arena::Arena;
pub use block::Footer;
pub use config::ArenaConfig;
pub use error::ArenaError;
#[cfg(unix)]
pub use provider::MmapProvider;
pub use provider::{BlockProvider, HeapProvider};
pub use scope::Scope;
