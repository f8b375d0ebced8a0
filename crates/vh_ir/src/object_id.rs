//! Per-instance identity for opaque values.
//!
//! Environments, external pointers, byte-code and builtins have no content
//! the engine can inspect. Each instance gets an `ObjectId` when it is
//! created; clones of the same value share it.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::Identity;

/// Next id to hand out. Zero is never allocated.
static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity handle of one opaque instance.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Allocate a process-unique id.
    pub fn fresh() -> Self {
        // Relaxed is enough: only uniqueness matters, not ordering.
        ObjectId(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Rebuild an id from a raw value previously obtained with [`ObjectId::raw`].
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        ObjectId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl Identity for ObjectId {
    #[inline]
    #[allow(
        clippy::cast_possible_wrap,
        reason = "identity handles are hashed by bit pattern"
    )]
    fn handle(self) -> i64 {
        self.0 as i64
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({:#x})", self.0)
    }
}
