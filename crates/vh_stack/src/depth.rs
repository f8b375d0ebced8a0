//! Recursion-depth budget.

use std::fmt;

/// Current nesting level and its ceiling.
///
/// `Depth` is `Copy` and follows a clone-per-child model: each recursive
/// step calls [`Depth::descend`] and passes the result down, so siblings
/// never see each other's depth and no state needs unwinding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Depth {
    current: usize,
    max: usize,
}

/// The depth ceiling was reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthExceeded {
    pub max: usize,
}

impl fmt::Display for DepthExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "maximum recursion depth {} exceeded", self.max)
    }
}

impl std::error::Error for DepthExceeded {}

impl Depth {
    /// Start at depth 0 with the given ceiling.
    pub const fn new(max: usize) -> Self {
        Depth { current: 0, max }
    }

    /// Enter one more level.
    ///
    /// Fails once the level would exceed `max`; `Depth::new(n)` admits
    /// exactly `n` nested levels.
    #[inline]
    pub fn descend(self) -> Result<Depth, DepthExceeded> {
        if self.current >= self.max {
            return Err(DepthExceeded { max: self.max });
        }
        Ok(Depth {
            current: self.current + 1,
            max: self.max,
        })
    }

    #[inline]
    pub const fn current(self) -> usize {
        self.current
    }

    #[inline]
    pub const fn max(self) -> usize {
        self.max
    }
}
