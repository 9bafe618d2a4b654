//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena allocation.
///
/// All variants are local and recoverable — the arena's state is unchanged
/// when any of them is returned. Whether exhaustion is fatal is the
/// caller's decision; the arena itself never logs or panics on a failed
/// allocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The requested alignment is not a power of two.
    InvalidAlignment {
        /// The rejected alignment value.
        alignment: usize,
    },
    /// A zero-byte allocation was requested.
    ZeroSize,
    /// The remaining capacity cannot satisfy the request.
    ///
    /// This covers plain exhaustion, the case where alignment padding alone
    /// consumes the remainder of the region, and address-arithmetic
    /// overflow (which is treated as exhaustion rather than wrapping into a
    /// bogus in-bounds pointer).
    CapacityExceeded {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes still available before the request.
        available: usize,
    },
    /// A typed allocation's total size would overflow `usize`.
    SizeOverflow {
        /// Number of elements requested.
        count: usize,
        /// Size of one element in bytes.
        elem_size: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAlignment { alignment } => {
                write!(f, "invalid alignment {alignment}: must be a power of two")
            }
            Self::ZeroSize => {
                write!(f, "zero-size allocation request")
            }
            Self::CapacityExceeded {
                requested,
                available,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} bytes, {available} bytes available"
                )
            }
            Self::SizeOverflow { count, elem_size } => {
                write!(
                    f,
                    "allocation size overflow: {count} elements of {elem_size} bytes"
                )
            }
        }
    }
}

impl Error for ArenaError {}
