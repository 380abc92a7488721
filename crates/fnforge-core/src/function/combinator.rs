//! Wrapper types returned by the [`Function`] combinators.

use std::fmt::{self, Debug};

use super::Function;

/// Applies `first`, then feeds its output to `after`.
#[derive(Clone, Copy)]
pub struct AndThen<F, G> {
    first: F,
    after: G,
}

impl<F, G> AndThen<F, G> {
    pub(crate) fn new(first: F, after: G) -> Self {
        Self { first, after }
    }
}

impl<Args, F, G> Function<Args> for AndThen<F, G>
where
    F: Function<Args>,
    G: Function<(F::Output,)>,
{
    type Output = G::Output;

    #[inline]
    fn apply(&self, args: Args) -> G::Output {
        self.after.apply((self.first.apply(args),))
    }
}

impl<F, G> Debug for AndThen<F, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AndThen").finish_non_exhaustive()
    }
}

/// Computes the argument tuple with `before`, then applies `function`.
#[derive(Clone, Copy)]
pub struct Compose<F, G> {
    function: F,
    before: G,
}

impl<F, G> Compose<F, G> {
    pub(crate) fn new(function: F, before: G) -> Self {
        Self { function, before }
    }
}

impl<X, Args, F, G> Function<X> for Compose<F, G>
where
    G: Function<X, Output = Args>,
    F: Function<Args>,
{
    type Output = F::Output;

    #[inline]
    fn apply(&self, args: X) -> F::Output {
        self.function.apply(self.before.apply(args))
    }
}

impl<F, G> Debug for Compose<F, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compose").finish_non_exhaustive()
    }
}

/// Calls `function` for its effect and drops the output.
#[derive(Clone, Copy)]
pub struct Consume<F> {
    function: F,
}

impl<F> Consume<F> {
    pub(crate) fn new(function: F) -> Self {
        Self { function }
    }
}

impl<Args, F> Function<Args> for Consume<F>
where
    F: Function<Args>,
{
    type Output = ();

    #[inline]
    fn apply(&self, args: Args) {
        self.function.apply(args);
    }
}

impl<F> Debug for Consume<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Consume").finish_non_exhaustive()
    }
}

/// A type-erased, thread-safe [`Function`].
///
/// # Example
///
/// ```
/// use fnforge_core::{Boxed, Function};
///
/// let table: Vec<Boxed<'static, (i32,), i32>> = vec![
///     (|x: i32| x + 1).boxed(),
///     (|x: i32| x * 10).boxed(),
/// ];
/// let results: Vec<i32> = table.iter().map(|f| f.apply((4,))).collect();
/// assert_eq!(results, vec![5, 40]);
/// ```
pub struct Boxed<'a, Args, R> {
    inner: Box<dyn Function<Args, Output = R> + Send + Sync + 'a>,
}

impl<'a, Args, R> Boxed<'a, Args, R> {
    /// Boxes `function`.
    pub fn new<F>(function: F) -> Self
    where
        F: Function<Args, Output = R> + Send + Sync + 'a,
    {
        Self {
            inner: Box::new(function),
        }
    }
}

impl<Args, R> Function<Args> for Boxed<'_, Args, R> {
    type Output = R;

    #[inline]
    fn apply(&self, args: Args) -> R {
        self.inner.apply(args)
    }
}

impl<Args, R> Debug for Boxed<'_, Args, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Boxed").finish_non_exhaustive()
    }
}
