//! Stack safety utilities for deep recursion.
//!
//! Two complementary guards for recursive walks over semantic nodes:
//!
//! - [`ensure_sufficient_stack`] grows the native stack on demand so that
//!   legitimately deep (but finite) structures never overflow.
//! - [`DepthBudget`] caps how deep a walk may go at all, turning a malformed
//!   or self-referential chain into a reportable [`DepthExceeded`] instead of
//!   an endless descent.
//!
//! # Usage
//!
//! ```text
//! fn fold(&mut self, node: Id) -> Result<Id, Error> {
//!     self.budget.enter()?;
//!     let result = ensure_sufficient_stack(|| self.fold_inner(node));
//!     self.budget.leave();
//!     result
//! }
//! ```
//!
//! # Platform Support
//!
//! - **Native targets**: Uses the `stacker` crate to grow the stack on demand.
//! - **WASM targets**: No-op passthrough (WASM has its own stack management).

use std::fmt;

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// If the remaining stack is below the red zone threshold, additional stack
/// space is allocated before calling `f`.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// The nesting limit of a [`DepthBudget`] was reached.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct DepthExceeded {
    /// The configured limit that was hit.
    pub limit: usize,
}

impl fmt::Display for DepthExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "recursion depth limit of {} exceeded", self.limit)
    }
}

impl std::error::Error for DepthExceeded {}

/// Counter for the current nesting depth of a recursive walk.
///
/// Every [`enter`](Self::enter) must be paired with a [`leave`](Self::leave),
/// including on the error path of the nested call.
#[derive(Clone, Debug)]
pub struct DepthBudget {
    limit: usize,
    depth: usize,
}

impl DepthBudget {
    /// Create a budget allowing at most `limit` nested levels.
    pub const fn new(limit: usize) -> Self {
        Self { limit, depth: 0 }
    }

    /// The configured nesting limit.
    #[inline]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// The current nesting depth.
    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Deepest depth still available before the limit trips.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.depth)
    }

    /// Descend one level. Fails without changing the depth if the limit is reached.
    #[inline]
    pub fn enter(&mut self) -> Result<(), DepthExceeded> {
        if self.depth >= self.limit {
            return Err(DepthExceeded { limit: self.limit });
        }
        self.depth += 1;
        Ok(())
    }

    /// Return from one level entered with [`enter`](Self::enter).
    #[inline]
    pub fn leave(&mut self) {
        debug_assert!(self.depth > 0, "DepthBudget::leave without matching enter");
        self.depth = self.depth.saturating_sub(1);
    }
}
