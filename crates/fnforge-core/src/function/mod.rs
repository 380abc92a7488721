//! Total functions of arity 0 to 3.
//!
//! A function's arguments are passed as one tuple: `()`, `(A,)`, `(A, B)` or
//! `(A, B, C)`. Every `Fn` closure of those arities is a [`Function`], and so
//! are the wrappers built from one.
//!
//! # Example
//!
//! ```
//! use fnforge_core::Function;
//!
//! let add = |a: i32, b: i32| a + b;
//! let doubled = add.and_then(|sum: i32| sum * 2);
//! assert_eq!(doubled.apply((3, 4)), 14);
//!
//! let from_pair = doubled.compose(|x: i32| (x, x + 1));
//! assert_eq!(from_pair.apply((1,)), 6);
//! ```

mod combinator;

#[cfg(test)]
mod tests;

use std::hash::Hash;

use fnforge_config::MemoizeConfig;

pub use combinator::{AndThen, Boxed, Compose, Consume};

use crate::memoize::Memoized;

/// A total function from the argument tuple `Args` to [`Function::Output`].
pub trait Function<Args> {
    /// The value this function produces.
    type Output;

    /// Calls the function.
    fn apply(&self, args: Args) -> Self::Output;

    /// Returns a function that feeds this function's output into `after`.
    fn and_then<G>(self, after: G) -> AndThen<Self, G>
    where
        Self: Sized,
        G: Function<(Self::Output,)>,
    {
        AndThen::new(self, after)
    }

    /// Returns a function that computes this function's arguments with `before`.
    ///
    /// `before` produces the whole argument tuple, so a binary function
    /// composes with anything that yields a pair.
    fn compose<X, G>(self, before: G) -> Compose<Self, G>
    where
        Self: Sized,
        G: Function<X, Output = Args>,
    {
        Compose::new(self, before)
    }

    /// Returns a function that calls this one and discards the output.
    fn consume(self) -> Consume<Self>
    where
        Self: Sized,
    {
        Consume::new(self)
    }

    /// Erases the concrete function type.
    fn boxed<'a>(self) -> Boxed<'a, Args, Self::Output>
    where
        Self: Sized + Send + Sync + 'a,
    {
        Boxed::new(self)
    }

    /// Returns a function that computes each distinct argument tuple once.
    ///
    /// Calling `memoized()` on a [`Memoized`] returns it unchanged.
    fn memoized(self) -> Memoized<Self, Args, Self::Output>
    where
        Self: Sized,
        Args: Eq + Hash + Clone,
        Self::Output: Clone,
    {
        Memoized::new(self)
    }

    /// Like [`Function::memoized`], sizing the cache from `config`.
    ///
    /// On a [`Memoized`] the inherent method wins and returns it unchanged.
    fn memoized_with(self, config: &MemoizeConfig) -> Memoized<Self, Args, Self::Output>
    where
        Self: Sized,
        Args: Eq + Hash + Clone,
        Self::Output: Clone,
    {
        Memoized::with_config(self, config)
    }
}

impl_function_for_closures!((), (A), (A, B), (A, B, C));

/// The identity function.
///
/// # Example
///
/// ```
/// use fnforge_core::{identity, Function};
///
/// assert_eq!(identity::<char>().apply(('x',)), 'x');
/// ```
pub fn identity<T>() -> impl Function<(T,), Output = T> + Copy + Send + Sync {
    |value: T| value
}

/// A nullary function that always returns a clone of `value`.
///
/// # Example
///
/// ```
/// use fnforge_core::{constant, Function};
///
/// let seven = constant(7_i64);
/// assert_eq!(seven.apply(()), 7);
/// ```
pub fn constant<T>(value: T) -> impl Function<(), Output = T> + Clone
where
    T: Clone,
{
    move || value.clone()
}
