//! Wrapper types returned by the [`TryFunction`] combinators.

use std::fmt::{self, Debug};

use super::TryFunction;
use crate::function::Function;

/// Applies `first`, then maps a successful output through `after`.
#[derive(Clone, Copy)]
pub struct TryAndThen<F, G> {
    first: F,
    after: G,
}

impl<F, G> TryAndThen<F, G> {
    pub(crate) fn new(first: F, after: G) -> Self {
        Self { first, after }
    }
}

impl<Args, F, G> TryFunction<Args> for TryAndThen<F, G>
where
    F: TryFunction<Args>,
    G: Function<(F::Output,)>,
{
    type Output = G::Output;
    type Error = F::Error;

    #[inline]
    fn try_apply(&self, args: Args) -> Result<G::Output, F::Error> {
        self.first
            .try_apply(args)
            .map(|output| self.after.apply((output,)))
    }
}

impl<F, G> Debug for TryAndThen<F, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryAndThen").finish_non_exhaustive()
    }
}

/// Computes the argument tuple with `before`, then applies `function`.
#[derive(Clone, Copy)]
pub struct TryCompose<F, G> {
    function: F,
    before: G,
}

impl<F, G> TryCompose<F, G> {
    pub(crate) fn new(function: F, before: G) -> Self {
        Self { function, before }
    }
}

impl<X, Args, F, G> TryFunction<X> for TryCompose<F, G>
where
    G: Function<X, Output = Args>,
    F: TryFunction<Args>,
{
    type Output = F::Output;
    type Error = F::Error;

    #[inline]
    fn try_apply(&self, args: X) -> Result<F::Output, F::Error> {
        self.function.try_apply(self.before.apply(args))
    }
}

impl<F, G> Debug for TryCompose<F, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryCompose").finish_non_exhaustive()
    }
}

/// Calls `function` and drops a successful output.
#[derive(Clone, Copy)]
pub struct TryConsume<F> {
    function: F,
}

impl<F> TryConsume<F> {
    pub(crate) fn new(function: F) -> Self {
        Self { function }
    }
}

impl<Args, F> TryFunction<Args> for TryConsume<F>
where
    F: TryFunction<Args>,
{
    type Output = ();
    type Error = F::Error;

    #[inline]
    fn try_apply(&self, args: Args) -> Result<(), F::Error> {
        self.function.try_apply(args).map(drop)
    }
}

impl<F> Debug for TryConsume<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryConsume").finish_non_exhaustive()
    }
}

/// A type-erased, thread-safe [`TryFunction`].
pub struct TryBoxed<'a, Args, R, E> {
    inner: Box<dyn TryFunction<Args, Output = R, Error = E> + Send + Sync + 'a>,
}

impl<'a, Args, R, E> TryBoxed<'a, Args, R, E> {
    /// Boxes `function`.
    pub fn new<F>(function: F) -> Self
    where
        F: TryFunction<Args, Output = R, Error = E> + Send + Sync + 'a,
    {
        Self {
            inner: Box::new(function),
        }
    }
}

impl<Args, R, E> TryFunction<Args> for TryBoxed<'_, Args, R, E> {
    type Output = R;
    type Error = E;

    #[inline]
    fn try_apply(&self, args: Args) -> Result<R, E> {
        self.inner.try_apply(args)
    }
}

impl<Args, R, E> Debug for TryBoxed<'_, Args, R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryBoxed").finish_non_exhaustive()
    }
}
