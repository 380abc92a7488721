//! Memoizing wrappers.
//!
//! [`Memoized`] wraps a [`Function`] and [`TryMemoized`] wraps a
//! [`TryFunction`]. Both key the cache by the whole argument tuple (`()` for
//! nullary functions) and guarantee that concurrent callers with equal keys
//! trigger a single computation. The cache never evicts; it lives as long as
//! the wrapper.
//!
//! Both types have inherent `memoized()` and `memoized_with()` methods that
//! return `self`, so memoizing twice keeps one cache.
//!
//! # Example
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use fnforge_core::Function;
//!
//! let calls = AtomicUsize::new(0);
//! let square = (|x: u64| {
//!     calls.fetch_add(1, Ordering::SeqCst);
//!     x * x
//! })
//! .memoized();
//!
//! assert_eq!(square.apply((12,)), 144);
//! assert_eq!(square.apply((12,)), 144);
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//!
//! let square = square.memoized();
//! assert_eq!(square.apply((12,)), 144);
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! ```

mod cache;


use std::fmt::{self, Debug};
use std::hash::Hash;

use fnforge_config::MemoizeConfig;

use self::cache::MemoCache;
use crate::fallible::TryFunction;
use crate::function::Function;

/// A [`Function`] that computes each distinct argument tuple once.
///
/// # Type Parameters
/// * `F` - Wrapped function
/// * `Args` - Argument tuple, used as the cache key
/// * `R` - Cached output
pub struct Memoized<F, Args, R> {
    function: F,
    cache: MemoCache<Args, R>,
}

impl<F, Args, R> Memoized<F, Args, R>
where
    Args: Eq + Hash + Clone,
    R: Clone,
{
    /// Wraps `function` with an empty cache.
    pub fn new(function: F) -> Self {
        Self::with_config(function, &MemoizeConfig::default())
    }

    /// Wraps `function`, reserving cache room per `config`.
    pub fn with_config(function: F, config: &MemoizeConfig) -> Self {
        Self {
            function,
            cache: MemoCache::new(config),
        }
    }

    /// Returns `self`; the function is already memoized.
    #[inline]
    pub fn memoized(self) -> Self {
        self
    }

    /// Returns `self`. The existing cache is kept and `config` is ignored.
    #[inline]
    pub fn memoized_with(self, _config: &MemoizeConfig) -> Self {
        self
    }

    /// Number of argument tuples with a cached output.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

impl<F, Args, R> Function<Args> for Memoized<F, Args, R>
where
    F: Function<Args, Output = R>,
    Args: Eq + Hash + Clone,
    R: Clone,
{
    type Output = R;

    fn apply(&self, args: Args) -> R {
        self.cache
            .get_or_compute(args, |args| self.function.apply(args))
    }
}

impl<F, Args, R> Debug for Memoized<F, Args, R>
where
    Args: Eq + Hash + Clone,
    R: Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("cached_len", &self.cached_len())
            .finish_non_exhaustive()
    }
}

/// A [`TryFunction`] that computes each distinct argument tuple at most once
/// successfully.
///
/// Failures are returned to the caller and not cached; the next call with the
/// same arguments runs the function again.
pub struct TryMemoized<F, Args, R> {
    function: F,
    cache: MemoCache<Args, R>,
}

impl<F, Args, R> TryMemoized<F, Args, R>
where
    Args: Eq + Hash + Clone,
    R: Clone,
{
    /// Wraps `function` with an empty cache.
    pub fn new(function: F) -> Self {
        Self::with_config(function, &MemoizeConfig::default())
    }

    /// Wraps `function`, reserving cache room per `config`.
    pub fn with_config(function: F, config: &MemoizeConfig) -> Self {
        Self {
            function,
            cache: MemoCache::new(config),
        }
    }

    /// Returns `self`; the function is already memoized.
    #[inline]
    pub fn memoized(self) -> Self {
        self
    }

    /// Returns `self`. The existing cache is kept and `config` is ignored.
    #[inline]
    pub fn memoized_with(self, _config: &MemoizeConfig) -> Self {
        self
    }

    /// Number of argument tuples with a cached output.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

impl<F, Args, R> TryFunction<Args> for TryMemoized<F, Args, R>
where
    F: TryFunction<Args, Output = R>,
    Args: Eq + Hash + Clone,
    R: Clone,
{
    type Output = R;
    type Error = F::Error;

    fn try_apply(&self, args: Args) -> Result<R, F::Error> {
        self.cache
            .get_or_try_compute(args, |args| self.function.try_apply(args))
    }
}

impl<F, Args, R> Debug for TryMemoized<F, Args, R>
where
    Args: Eq + Hash + Clone,
    R: Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryMemoized")
            .field("cached_len", &self.cached_len())
            .finish_non_exhaustive()
    }
}
