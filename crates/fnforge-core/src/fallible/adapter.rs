//! Adapters that turn a typed failure into a [`Thrown`].
//!
//! Every adapter checks [`is_fatal`] first. A fatal failure leaves the adapter
//! exactly as it entered, erased but never wrapped or recovered.

use std::error::Error;
use std::fmt::{self, Debug};
use std::marker::PhantomData;

use tracing::{debug, warn};

use super::TryFunction;
use crate::error::FnForgeError;
use crate::function::Function;
use crate::thrown::{is_fatal, Thrown};

/// Wraps non-fatal failures in [`FnForgeError::Wrapped`].
#[derive(Clone, Copy)]
pub struct Nest<F> {
    function: F,
}

impl<F> Nest<F> {
    pub(crate) fn new(function: F) -> Self {
        Self { function }
    }
}

impl<Args, F> TryFunction<Args> for Nest<F>
where
    F: TryFunction<Args>,
    F::Error: Error + Send + Sync + 'static,
{
    type Output = F::Output;
    type Error = Thrown;

    fn try_apply(&self, args: Args) -> Result<F::Output, Thrown> {
        self.function.try_apply(args).map_err(|error| {
            if is_fatal(&error) {
                return Thrown::new(error);
            }
            debug!(
                event = "nest",
                error_type = std::any::type_name::<F::Error>(),
                "Wrapping failure"
            );
            Thrown::new(FnForgeError::wrapped(error))
        })
    }
}

impl<F> Debug for Nest<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nest").finish_non_exhaustive()
    }
}

/// Converts non-fatal failures with a caller-supplied mapper.
///
/// # Type Parameters
/// * `F` - Wrapped fallible function
/// * `M` - Mapper from the original failure
/// * `E` - Failure type the mapper produces
pub struct NestWith<F, M, E> {
    function: F,
    mapper: M,
    _phantom: PhantomData<fn() -> E>,
}

impl<F, M, E> NestWith<F, M, E> {
    pub(crate) fn new(function: F, mapper: M) -> Self {
        Self {
            function,
            mapper,
            _phantom: PhantomData,
        }
    }
}

impl<Args, F, M, E> TryFunction<Args> for NestWith<F, M, E>
where
    F: TryFunction<Args>,
    F::Error: Error + Send + Sync + 'static,
    M: Fn(F::Error) -> E,
    E: Error + Send + Sync + 'static,
{
    type Output = F::Output;
    type Error = Thrown;

    fn try_apply(&self, args: Args) -> Result<F::Output, Thrown> {
        self.function.try_apply(args).map_err(|error| {
            if is_fatal(&error) {
                Thrown::new(error)
            } else {
                Thrown::new((self.mapper)(error))
            }
        })
    }
}

impl<F: Clone, M: Clone, E> Clone for NestWith<F, M, E> {
    fn clone(&self) -> Self {
        Self::new(self.function.clone(), self.mapper.clone())
    }
}

impl<F, M, E> Debug for NestWith<F, M, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NestWith").finish_non_exhaustive()
    }
}

/// Answers non-fatal failures with a fallback chosen by a handler.
///
/// # Type Parameters
/// * `F` - Wrapped fallible function
/// * `H` - Handler mapping a failure to an optional fallback
/// * `G` - Fallback function type
pub struct Recover<F, H, G> {
    function: F,
    handler: H,
    _phantom: PhantomData<fn() -> G>,
}

impl<F, H, G> Recover<F, H, G> {
    pub(crate) fn new(function: F, handler: H) -> Self {
        Self {
            function,
            handler,
            _phantom: PhantomData,
        }
    }
}

impl<Args, F, H, G> TryFunction<Args> for Recover<F, H, G>
where
    Args: Clone,
    F: TryFunction<Args>,
    F::Error: Error + Send + Sync + 'static,
    H: Fn(&F::Error) -> Option<G>,
    G: Function<Args, Output = F::Output>,
{
    type Output = F::Output;
    type Error = Thrown;

    fn try_apply(&self, args: Args) -> Result<F::Output, Thrown> {
        let error = match self.function.try_apply(args.clone()) {
            Ok(output) => return Ok(output),
            Err(error) => error,
        };

        if is_fatal(&error) {
            return Err(Thrown::new(error));
        }

        match (self.handler)(&error) {
            Some(fallback) => {
                debug!(
                    event = "recover",
                    error_type = std::any::type_name::<F::Error>(),
                    "Calling fallback"
                );
                Ok(fallback.apply(args))
            }
            None => {
                let error = FnForgeError::missing_fallback(error);
                if let FnForgeError::MissingFallback { error_type, .. } = &error {
                    warn!(event = "recover", error_type, "Handler returned no fallback");
                }
                Err(Thrown::new(error))
            }
        }
    }
}

impl<F: Clone, H: Clone, G> Clone for Recover<F, H, G> {
    fn clone(&self) -> Self {
        Self::new(self.function.clone(), self.handler.clone())
    }
}

impl<F, H, G> Debug for Recover<F, H, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recover").finish_non_exhaustive()
    }
}

/// Erases the failure type, leaving the failure value untouched.
#[derive(Clone, Copy)]
pub struct SneakyThrow<F> {
    function: F,
}

impl<F> SneakyThrow<F> {
    pub(crate) fn new(function: F) -> Self {
        Self { function }
    }
}

impl<Args, F> TryFunction<Args> for SneakyThrow<F>
where
    F: TryFunction<Args>,
    F::Error: Error + Send + Sync + 'static,
{
    type Output = F::Output;
    type Error = Thrown;

    #[inline]
    fn try_apply(&self, args: Args) -> Result<F::Output, Thrown> {
        self.function.try_apply(args).map_err(Thrown::new)
    }
}

impl<F> Debug for SneakyThrow<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SneakyThrow").finish_non_exhaustive()
    }
}
