//! Recursion guards for walking nested values.
//!
//! Nested lists, tables and code-like values are walked recursively. Two
//! guards keep that safe:
//!
//! - [`Depth`] is an explicit nesting budget. Exhausting it is an ordinary
//!   error ([`DepthExceeded`]), never a crash.
//! - [`ensure_sufficient_stack`] grows the native stack on demand, so any
//!   nesting the budget admits also fits on the stack.
//!
//! [`nested`] applies both at once and is what recursive walkers call.
//!
//! On `wasm32` the stack cannot be grown and stack growth is a passthrough;
//! the depth budget still applies.

mod depth;

pub use depth::{Depth, DepthExceeded};

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Enter one nesting level below `depth` and run `f` there.
///
/// Fails with the caller's error type, converted from [`DepthExceeded`],
/// once the budget is spent; otherwise `f` runs with enough stack and the
/// descended budget.
///
/// ```text
/// fn walk(x: &Value, depth: Depth) -> HashResult<i32> {
///     nested(depth, |depth| {
///         // recurse into children with `depth`
///     })
/// }
/// ```
#[inline]
pub fn nested<R, E>(depth: Depth, f: impl FnOnce(Depth) -> Result<R, E>) -> Result<R, E>
where
    E: From<DepthExceeded>,
{
    ensure_sufficient_stack(|| f(depth.descend()?))
}

#[cfg(test)]
mod tests;
