//! Stack safety for deep recursion in the parser and the evaluator.
//!
//! Two independent mechanisms live here:
//!
//! - [`ensure_sufficient_stack`] grows the native stack on demand, so a deeply
//!   nested literal or a long chain of word calls does not overflow the host
//!   thread before the recursion budget is reached.
//! - [`RecursionBudget`] counts nesting and refuses to go deeper than a
//!   configured limit. Growing the stack alone would let runaway recursion eat
//!   all memory; the budget turns it into an ordinary error.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` grows the stack in 1MB segments whenever
//!   less than 100KB remains.
//! - **WASM targets**: passthrough (WASM has its own stack management).

use thiserror::Error;

/// Minimum stack space to keep available (100KB red zone).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the native stack first if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Returned by [`RecursionBudget::enter`] when the limit is reached.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("maximum nesting depth exceeded (limit: {limit})")]
pub struct DepthExceeded {
    pub limit: usize,
}

/// Nesting counter with an optional upper bound.
///
/// Callers pair every successful [`enter`](Self::enter) with one
/// [`exit`](Self::exit). A budget without a limit only counts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RecursionBudget {
    depth: usize,
    limit: Option<usize>,
}

impl RecursionBudget {
    pub const fn new(limit: Option<usize>) -> Self {
        RecursionBudget { depth: 0, limit }
    }

    /// Current nesting depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Go one level deeper. The depth is not changed on failure.
    #[inline]
    pub fn enter(&mut self) -> Result<(), DepthExceeded> {
        if let Some(limit) = self.limit {
            if self.depth >= limit {
                return Err(DepthExceeded { limit });
            }
        }
        self.depth += 1;
        Ok(())
    }

    /// Leave one level.
    #[inline]
    pub fn exit(&mut self) {
        debug_assert!(self.depth > 0, "RecursionBudget::exit() without enter()");
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deep_recursion_grows_stack() {
        fn deep_recurse(n: u64) -> u64 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { deep_recurse(n - 1) + 1 })
        }

        assert_eq!(deep_recurse(100_000), 100_000);
    }

    #[test]
    fn test_budget_counts_depth() {
        let mut budget = RecursionBudget::new(Some(3));
        assert_eq!(budget.enter(), Ok(()));
        assert_eq!(budget.enter(), Ok(()));
        assert_eq!(budget.depth(), 2);
        budget.exit();
        assert_eq!(budget.depth(), 1);
    }

    #[test]
    fn test_budget_refuses_past_limit() {
        let mut budget = RecursionBudget::new(Some(2));
        assert_eq!(budget.enter(), Ok(()));
        assert_eq!(budget.enter(), Ok(()));
        assert_eq!(budget.enter(), Err(DepthExceeded { limit: 2 }));
        assert_eq!(budget.depth(), 2);
    }

    #[test]
    fn test_unlimited_budget_never_fails() {
        let mut budget = RecursionBudget::new(None);
        for _ in 0..10_000 {
            assert!(budget.enter().is_ok());
        }
        assert_eq!(budget.depth(), 10_000);
    }
}
