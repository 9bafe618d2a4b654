//! The bump-pointer arena and its allocation algorithm.
//!
//! [`Arena`] owns a fixed-size heap buffer acquired once at construction.
//! Allocations advance a cursor (`pos`); [`Arena::reset`] moves the cursor
//! back to zero in O(1) without touching stored bytes. Nothing is freed per
//! object, and the buffer never grows.

use std::alloc::{self, Layout};
use std::fmt;
use std::mem;
use std::ptr::NonNull;

use crate::error::ArenaError;

/// A fixed-capacity bump-pointer arena.
///
/// The arena hands out non-overlapping, correctly aligned byte ranges from
/// one pre-sized region in O(1) per request. All ranges are reclaimed
/// together by [`reset`](Self::reset).
///
/// Arenas are move-only: there is no `Clone`, because duplicating the
/// buffer plus cursor would desynchronize allocations already handed out to
/// callers. Moving the value keeps previously returned pointers valid (the
/// buffer itself does not move); `std::mem::take` drains an arena in place,
/// leaving the empty state behind.
///
/// # Example
///
/// ```
/// use tephra::Arena;
///
/// let mut arena = Arena::with_capacity(1024);
/// let a = arena.alloc(10, 1).unwrap();
/// let b = arena.alloc(20, 8).unwrap();
/// assert_ne!(a, b);
/// assert_eq!(b.as_ptr() as usize % 8, 0);
///
/// arena.reset(); // a and b must no longer be used
/// assert_eq!(arena.used(), 0);
/// ```
pub struct Arena {
    /// Start of the owned buffer; dangling in the empty state.
    base: NonNull<u8>,
    /// Total bytes in the region. Zero iff the arena is empty.
    capacity: usize,
    /// Bump pointer: bytes consumed so far. `0 <= pos <= capacity`.
    pos: usize,
}

// SAFETY: the buffer is exclusively owned by this value and never aliased
// internally, so transferring the whole arena to another thread is sound.
// `Sync` is deliberately not implemented: the concurrency model is one
// arena per thread or external locking.
unsafe impl Send for Arena {}

impl Arena {
    /// Base alignment of the backing buffer.
    ///
    /// Requests with larger alignments are still honored exactly: the
    /// allocation algorithm aligns absolute addresses, not offsets.
    pub const BASE_ALIGN: usize = 16;

    /// Create an empty arena with no backing storage.
    ///
    /// Every allocation on an empty arena fails with
    /// [`ArenaError::CapacityExceeded`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            base: NonNull::dangling(),
            capacity: 0,
            pos: 0,
        }
    }

    /// Create an arena backed by exactly `capacity` bytes of uninitialized
    /// storage, acquired eagerly from the global allocator.
    ///
    /// `with_capacity(0)` is equivalent to [`Arena::new`] and performs no
    /// allocation.
    ///
    /// # Panics / aborts
    ///
    /// Panics if `capacity` exceeds `isize::MAX` bytes. If the global
    /// allocator cannot provide the storage, the failure is surfaced
    /// through [`std::alloc::handle_alloc_error`] — there is no partial
    /// construction and no retry.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        if capacity == 0 {
            return Self::new();
        }
        let layout = Layout::from_size_align(capacity, Self::BASE_ALIGN)
            .expect("arena capacity exceeds isize::MAX bytes");
        // SAFETY: `layout` has non-zero size.
        let raw = unsafe { alloc::alloc(layout) };
        let Some(base) = NonNull::new(raw) else {
            alloc::handle_alloc_error(layout)
        };
        Self {
            base,
            capacity,
            pos: 0,
        }
    }

    /// Allocate `size` bytes aligned to `align`.
    ///
    /// Rounds the cursor's absolute address up to the next multiple of
    /// `align` and reserves `size` bytes from there. The returned memory is
    /// uninitialized and belongs exclusively to the caller until the next
    /// [`reset`](Self::reset) (or until the arena is dropped or replaced).
    ///
    /// # Errors
    ///
    /// - [`ArenaError::InvalidAlignment`] if `align` is not a power of two.
    /// - [`ArenaError::ZeroSize`] if `size == 0`.
    /// - [`ArenaError::CapacityExceeded`] if the aligned range would not
    ///   fit, including when alignment padding alone exhausts the region or
    ///   the address arithmetic would overflow.
    ///
    /// On any error the arena is left unchanged.
    pub fn alloc(&mut self, size: usize, align: usize) -> Result<NonNull<u8>, ArenaError> {
        if !align.is_power_of_two() {
            return Err(ArenaError::InvalidAlignment { alignment: align });
        }
        if size == 0 {
            return Err(ArenaError::ZeroSize);
        }
        let exhausted = || ArenaError::CapacityExceeded {
            requested: size,
            available: self.capacity - self.pos,
        };

        // Align the absolute address rather than the offset so that
        // over-aligned requests (beyond BASE_ALIGN) are honored exactly.
        let base_addr = self.base.as_ptr() as usize;
        let cursor = base_addr + self.pos;
        let aligned = cursor.checked_add(align - 1).ok_or_else(exhausted)? & !(align - 1);
        let aligned_pos = aligned - base_addr;
        let end = aligned_pos.checked_add(size).ok_or_else(exhausted)?;
        if end > self.capacity {
            return Err(exhausted());
        }

        self.pos = end;
        // SAFETY: `aligned_pos < capacity`, so the offset stays inside the
        // single allocated object starting at `base`, and the result of
        // `add` is non-null.
        unsafe { Ok(NonNull::new_unchecked(self.base.as_ptr().add(aligned_pos))) }
    }

    /// Allocate storage for one `T`, sized and aligned for the type.
    ///
    /// The storage is uninitialized; the caller must write a value before
    /// reading through the pointer.
    ///
    /// # Errors
    ///
    /// Same as [`alloc`](Self::alloc); zero-sized types fail with
    /// [`ArenaError::ZeroSize`].
    pub fn alloc_uninit<T>(&mut self) -> Result<NonNull<T>, ArenaError> {
        self.alloc_array_uninit(1)
    }

    /// Allocate storage for `count` contiguous `T`s.
    ///
    /// # Errors
    ///
    /// [`ArenaError::SizeOverflow`] if `count * size_of::<T>()` overflows
    /// `usize` (checked before any state is touched), otherwise the same as
    /// [`alloc`](Self::alloc). A `count` of zero, or a zero-sized `T`,
    /// fails with [`ArenaError::ZeroSize`].
    pub fn alloc_array_uninit<T>(&mut self, count: usize) -> Result<NonNull<T>, ArenaError> {
        let elem_size = mem::size_of::<T>();
        let total = count
            .checked_mul(elem_size)
            .ok_or(ArenaError::SizeOverflow { count, elem_size })?;
        Ok(self.alloc(total, mem::align_of::<T>())?.cast())
    }

    /// Reset the bump pointer to zero, reclaiming the whole region in O(1).
    ///
    /// Stored bytes are not touched. All previously returned pointers
    /// become logically invalid: the arena does not track or invalidate
    /// them, so using one after `reset` is a caller bug the arena cannot
    /// detect. Resetting twice in a row is equivalent to resetting once.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Number of bytes consumed so far, including alignment padding.
    #[must_use]
    pub fn used(&self) -> usize {
        self.pos
    }

    /// Total size of the region in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of bytes still available for allocation.
    #[must_use]
    pub fn available(&self) -> usize {
        self.capacity - self.pos
    }

    /// Whether `ptr` falls within the arena's region.
    ///
    /// This is a pure range check on `[base, base + capacity)`: it says
    /// nothing about whether the byte was ever allocated or is still live
    /// after a [`reset`](Self::reset). Always false for an empty arena.
    #[must_use]
    pub fn owns(&self, ptr: *const u8) -> bool {
        if self.capacity == 0 {
            return false;
        }
        let base = self.base.as_ptr() as usize;
        let addr = ptr as usize;
        addr >= base && addr < base + self.capacity
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Arena {
    fn drop(&mut self) {
        if self.capacity != 0 {
            let layout = Layout::from_size_align(self.capacity, Self::BASE_ALIGN)
                .expect("layout was validated at construction");
            // SAFETY: `base` was allocated with exactly this layout, and
            // the buffer is released exactly once — the only ways to lose
            // it are this drop and `mem::take`, which leaves capacity 0.
            unsafe { alloc::dealloc(self.base.as_ptr(), layout) };
        }
    }
}

impl fmt::Debug for Arena {
    // The base pointer is omitted: the interesting state is the cursor.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("capacity", &self.capacity)
            .field("used", &self.pos)
            .finish_non_exhaustive()
    }
}
