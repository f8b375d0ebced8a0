//! Interned text handle.
//!
//! A `CharId` names one interned text unit. Two handles from the same
//! interner are equal exactly when their text is equal, so the hashing
//! engine can hash and compare strings without reading their contents.

use std::fmt;

use crate::Identity;

/// Interned text handle: the top 4 bits pick an interner shard, the low 28
/// bits index into it.
///
/// Raw 0 is [`CharId::NA`], the missing string. It resolves to no text.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct CharId(u32);

impl CharId {
    /// The missing string.
    pub const NA: CharId = CharId(0);

    /// Largest local index a shard can hand out.
    pub const MAX_LOCAL: u32 = 0x0FFF_FFFF;

    pub const NUM_SHARDS: usize = 16;

    #[inline]
    pub const fn new(shard: u32, local: u32) -> Self {
        debug_assert!(shard < 16);
        debug_assert!(local <= Self::MAX_LOCAL);
        CharId((shard << 28) | local)
    }

    #[inline]
    pub const fn shard(self) -> usize {
        (self.0 >> 28) as usize
    }

    #[inline]
    pub const fn local(self) -> usize {
        (self.0 & Self::MAX_LOCAL) as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Rebuild a handle from [`CharId::raw`] output.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        CharId(raw)
    }

    /// Whether this is the missing string.
    #[inline]
    pub const fn is_na(self) -> bool {
        self.0 == Self::NA.0
    }
}

impl Identity for CharId {
    #[inline]
    fn handle(self) -> i64 {
        i64::from(self.0)
    }
}

impl fmt::Debug for CharId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_na() {
            write!(f, "CharId(NA)")
        } else {
            write!(f, "CharId({}:{})", self.shard(), self.local())
        }
    }
}

impl Default for CharId {
    fn default() -> Self {
        Self::NA
    }
}
