//! Fallible functions and the adapters that make them uniform.
//!
//! A [`TryFunction`] returns `Result`. Wrap a closure with [`fallible`] to get
//! one. The adapters [`TryFunction::nest`], [`TryFunction::nest_with`],
//! [`TryFunction::recover`] and [`TryFunction::sneaky_throw`] all produce
//! [`Thrown`](crate::Thrown) errors, so fallible functions with unrelated
//! error types chain together once adapted.
//!
//! Fatal failures (see [`is_fatal`](crate::is_fatal)) are never wrapped,
//! mapped or recovered by any adapter.
//!
//! # Example
//!
//! ```
//! use std::num::ParseIntError;
//! use fnforge_core::{fallible, TryFunction};
//!
//! let parse = fallible(|s: &str| s.parse::<i32>());
//! let safe = parse.recover(|_: &ParseIntError| Some(|_: &str| -1));
//!
//! assert_eq!(safe.try_apply(("42",)).unwrap(), 42);
//! assert_eq!(safe.try_apply(("forty-two",)).unwrap(), -1);
//! ```

mod adapter;
mod combinator;


use std::error::Error;
use std::hash::Hash;

use fnforge_config::MemoizeConfig;

pub use adapter::{Nest, NestWith, Recover, SneakyThrow};
pub use combinator::{TryAndThen, TryBoxed, TryCompose, TryConsume};

use crate::function::Function;
use crate::memoize::TryMemoized;

/// A function from the argument tuple `Args` that may fail.
pub trait TryFunction<Args> {
    /// The value produced on success.
    type Output;

    /// The failure produced otherwise.
    type Error;

    /// Calls the function.
    fn try_apply(&self, args: Args) -> Result<Self::Output, Self::Error>;

    /// Returns a function that maps a successful output through `after`.
    fn and_then<G>(self, after: G) -> TryAndThen<Self, G>
    where
        Self: Sized,
        G: Function<(Self::Output,)>,
    {
        TryAndThen::new(self, after)
    }

    /// Returns a function that computes this function's arguments with `before`.
    fn compose<X, G>(self, before: G) -> TryCompose<Self, G>
    where
        Self: Sized,
        G: Function<X, Output = Args>,
    {
        TryCompose::new(self, before)
    }

    /// Returns a function that discards the successful output.
    fn consume(self) -> TryConsume<Self>
    where
        Self: Sized,
    {
        TryConsume::new(self)
    }

    /// Erases the concrete function type.
    fn boxed<'a>(self) -> TryBoxed<'a, Args, Self::Output, Self::Error>
    where
        Self: Sized + Send + Sync + 'a,
    {
        TryBoxed::new(self)
    }

    /// Returns a function that computes each distinct argument tuple at most
    /// once successfully. Failures are not cached.
    fn memoized(self) -> TryMemoized<Self, Args, Self::Output>
    where
        Self: Sized,
        Args: Eq + Hash + Clone,
        Self::Output: Clone,
    {
        TryMemoized::new(self)
    }

    /// Like [`TryFunction::memoized`], sizing the cache from `config`.
    ///
    /// On a [`TryMemoized`] the inherent method wins and returns it unchanged.
    fn memoized_with(self, config: &MemoizeConfig) -> TryMemoized<Self, Args, Self::Output>
    where
        Self: Sized,
        Args: Eq + Hash + Clone,
        Self::Output: Clone,
    {
        TryMemoized::with_config(self, config)
    }

    /// Wraps every non-fatal failure in [`FnForgeError::Wrapped`](crate::FnForgeError).
    fn nest(self) -> Nest<Self>
    where
        Self: Sized,
        Self::Error: Error + Send + Sync + 'static,
    {
        Nest::new(self)
    }

    /// Converts every non-fatal failure with `mapper`.
    fn nest_with<M, E>(self, mapper: M) -> NestWith<Self, M, E>
    where
        Self: Sized,
        Self::Error: Error + Send + Sync + 'static,
        M: Fn(Self::Error) -> E,
        E: Error + Send + Sync + 'static,
    {
        NestWith::new(self, mapper)
    }

    /// Answers every non-fatal failure with the fallback `handler` picks.
    ///
    /// The fallback is called with the original arguments. A handler that
    /// returns `None` makes the call fail with
    /// [`FnForgeError::MissingFallback`](crate::FnForgeError).
    fn recover<H, G>(self, handler: H) -> Recover<Self, H, G>
    where
        Self: Sized,
        Args: Clone,
        Self::Error: Error + Send + Sync + 'static,
        H: Fn(&Self::Error) -> Option<G>,
        G: Function<Args, Output = Self::Output>,
    {
        Recover::new(self, handler)
    }

    /// Erases the failure type while keeping the failure itself intact.
    fn sneaky_throw(self) -> SneakyThrow<Self>
    where
        Self: Sized,
        Self::Error: Error + Send + Sync + 'static,
    {
        SneakyThrow::new(self)
    }
}

/// A closure returning `Result`, viewed as a [`TryFunction`].
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F> {
    function: F,
}

/// Lifts a closure of arity 0 to 3 that returns `Result` into a [`TryFunction`].
pub fn fallible<F>(function: F) -> Fallible<F> {
    Fallible { function }
}

impl_try_function_for_fallible!((), (A), (A, B), (A, B, C));
