//! Fixed-capacity bump-pointer arena allocation.
//!
//! An [`Arena`] owns one contiguous region of uninitialized bytes and serves
//! allocations by advancing a cursor. There is no per-allocation metadata
//! and no individual free: the whole region is reclaimed at once by
//! [`Arena::reset`], making the arena a good fit for per-frame or
//! per-request scratch memory.
//!
//! # Architecture
//!
//! ```text
//! Arena
//! ├── base     (owned, 16-byte-aligned byte buffer, fixed size)
//! ├── capacity (total bytes, immutable after construction)
//! └── pos      (bump pointer: next free byte, reset to 0 in O(1))
//!
//!   [ alloc A ][ alloc B ][ pad ][ alloc C ][     free      ]
//!   ^                                       ^               ^
//!   base                                    base + pos      base + capacity
//! ```
//!
//! Every allocation is O(1): round the cursor up to the requested alignment,
//! hand out that address, advance the cursor. Exhaustion, invalid requests,
//! and arithmetic overflow are reported through [`ArenaError`] without
//! mutating the arena.
//!
//! # Safety
//!
//! This crate contains `unsafe` code, confined to [`arena`]. Each unsafe
//! operation carries a `// SAFETY:` comment. Returned pointers are raw:
//! callers must not use them after a `reset` or after the arena is dropped
//! or replaced. The arena does not track outstanding pointers — that hazard
//! is inherent to the bump design and documented on [`Arena::reset`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod arena;
pub mod error;

pub use arena::Arena;
pub use error::ArenaError;
