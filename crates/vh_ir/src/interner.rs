//! Sharded text interner.
//!
//! Text is routed to one of [`CharId::NUM_SHARDS`] shards by its Fx hash, and
//! each shard sits behind its own `RwLock`, so concurrent callers interning
//! different text rarely contend. Interned text is leaked and lives for the
//! rest of the process.

use std::hash::{BuildHasher, BuildHasherDefault};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHasher};

use crate::CharId;

/// Interning failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// A shard already holds `CharId::MAX_LOCAL + 1` entries.
    ShardOverflow { shard: usize, count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::ShardOverflow { shard, count } => write!(
                f,
                "interner shard {shard} is full ({count} entries, limit {})",
                CharId::MAX_LOCAL
            ),
        }
    }
}

impl std::error::Error for InternError {}

/// One shard: text to local index, and local index back to text.
#[derive(Default)]
struct Shard {
    index: FxHashMap<&'static str, u32>,
    texts: Vec<&'static str>,
}

impl Shard {
    fn get(&self, s: &str) -> Option<u32> {
        self.index.get(s).copied()
    }

    fn insert(&mut self, shard: usize, s: &str) -> Result<u32, InternError> {
        let count = self.texts.len();
        let local = u32::try_from(count)
            .ok()
            .filter(|&local| local <= CharId::MAX_LOCAL)
            .ok_or(InternError::ShardOverflow { shard, count })?;
        let text: &'static str = Box::leak(s.to_owned().into_boxed_str());
        self.texts.push(text);
        self.index.insert(text, local);
        Ok(local)
    }
}

/// Thread-safe text interner producing [`CharId`]s.
///
/// Handles are only comparable within one interner. Values hashed together
/// must draw every `CharId` from the same instance, usually
/// [`CharInterner::global`].
pub struct CharInterner {
    shards: [RwLock<Shard>; CharId::NUM_SHARDS],
    interned: AtomicUsize,
}

impl CharInterner {
    pub fn new() -> Self {
        let shards: [RwLock<Shard>; CharId::NUM_SHARDS] =
            std::array::from_fn(|_| RwLock::new(Shard::default()));
        // Local index 0 of shard 0 is `CharId::NA`. It gets a text slot but
        // no index entry, so nothing interns to it.
        shards[0].write().texts.push("");
        CharInterner {
            shards,
            interned: AtomicUsize::new(0),
        }
    }

    /// The process-wide interner.
    pub fn global() -> &'static CharInterner {
        static GLOBAL: OnceLock<CharInterner> = OnceLock::new();
        GLOBAL.get_or_init(CharInterner::new)
    }

    /// Top four bits of the Fx hash, the best mixed ones.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the shift leaves four bits"
    )]
    fn shard_of(s: &str) -> usize {
        (BuildHasherDefault::<FxHasher>::default().hash_one(s) >> 60) as usize
    }

    /// Handle of `s`, interning it on first sight.
    pub fn try_intern(&self, s: &str) -> Result<CharId, InternError> {
        let shard_idx = Self::shard_of(s);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "shard_idx < NUM_SHARDS"
        )]
        let make = |local: u32| CharId::new(shard_idx as u32, local);
        let shard = &self.shards[shard_idx];

        if let Some(local) = shard.read().get(s) {
            return Ok(make(local));
        }

        let mut guard = shard.write();
        // Another thread may have won the race for the write lock.
        if let Some(local) = guard.get(s) {
            return Ok(make(local));
        }
        let local = guard.insert(shard_idx, s)?;
        self.interned.fetch_add(1, Ordering::Relaxed);
        Ok(make(local))
    }

    /// Like [`CharInterner::try_intern`].
    ///
    /// # Panics
    /// Panics if the target shard is full.
    #[inline]
    pub fn intern(&self, s: &str) -> CharId {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Text of `id`, or `None` for `CharId::NA` and foreign handles.
    pub fn lookup(&self, id: CharId) -> Option<&'static str> {
        if id.is_na() {
            return None;
        }
        self.shards[id.shard()].read().texts.get(id.local()).copied()
    }

    /// Number of interned text units, excluding the missing string.
    pub fn len(&self) -> usize {
        self.interned.load(Ordering::Relaxed)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CharInterner {
    fn default() -> Self {
        Self::new()
    }
}
