//! Erased failures and the fatal failure category.
//!
//! [`Thrown`] is the single error type every adapter produces. It owns the
//! original failure behind `dyn Error`, so a caller that knows the concrete
//! type can take it back out unchanged with [`Thrown::downcast`].
//!
//! [`Fatal`] marks environment-level failures. Adapters never wrap, recover
//! or otherwise reinterpret a fatal failure; it travels through them as-is.
//! Panics are the other fatal channel and no adapter catches them.

use std::error::Error;
use std::fmt;

use thiserror::Error;

/// Environment-level failure that adapters always pass through untouched.
///
/// # Example
///
/// ```
/// use fnforge_core::{is_fatal, Fatal};
///
/// let fatal = Fatal::new("disk full");
/// assert!(is_fatal(&fatal));
/// assert_eq!(fatal.to_string(), "Fatal failure: disk full");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Fatal failure: {reason}")]
pub struct Fatal {
    reason: String,
}

impl Fatal {
    /// Creates a fatal failure with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Returns the reason this failure was raised.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Returns true if `error` belongs to the fatal category.
///
/// That is the case for [`Fatal`] itself and for a [`Thrown`] carrying one.
pub fn is_fatal<E>(error: &E) -> bool
where
    E: Error + 'static,
{
    let error: &(dyn Error + 'static) = error;
    error.is::<Fatal>() || error.downcast_ref::<Thrown>().is_some_and(Thrown::is_fatal)
}

/// A failure whose static type has been erased.
///
/// Display, `Debug` and `source()` all forward to the original failure, and
/// [`Thrown::type_name`] reports its concrete type.
///
/// # Example
///
/// ```
/// use fnforge_core::{Fatal, Thrown};
///
/// let thrown = Thrown::new(Fatal::new("out of memory"));
/// assert!(thrown.is::<Fatal>());
/// assert_eq!(thrown.downcast_ref::<Fatal>().unwrap().reason(), "out of memory");
///
/// // Erasing twice does not nest.
/// let again = Thrown::new(thrown);
/// assert!(again.is::<Fatal>());
/// assert_eq!(again.type_name(), "fnforge_core::thrown::Fatal");
/// ```
pub struct Thrown {
    inner: Box<dyn Error + Send + Sync + 'static>,
    type_name: &'static str,
}

impl Thrown {
    /// Erases `error`. An existing `Thrown` is returned as-is.
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        let boxed: Box<dyn Error + Send + Sync + 'static> = Box::new(error);
        match boxed.downcast::<Thrown>() {
            Ok(thrown) => *thrown,
            Err(inner) => Self {
                inner,
                type_name: std::any::type_name::<E>(),
            },
        }
    }

    /// Type name of the erased failure.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns true if the erased failure is of type `E`.
    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.inner.is::<E>()
    }

    /// Borrows the erased failure as `E`, if that is its type.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// Takes the erased failure back out as `E`.
    ///
    /// On a type mismatch the `Thrown` is handed back unchanged.
    pub fn downcast<E>(self) -> std::result::Result<E, Thrown>
    where
        E: Error + 'static,
    {
        match self.inner.downcast::<E>() {
            Ok(error) => Ok(*error),
            Err(inner) => Err(Self {
                inner,
                type_name: self.type_name,
            }),
        }
    }

    /// Returns true if the erased failure is [`Fatal`].
    pub fn is_fatal(&self) -> bool {
        self.inner.is::<Fatal>()
    }

    /// Returns the boxed failure.
    pub fn into_inner(self) -> Box<dyn Error + Send + Sync + 'static> {
        self.inner
    }
}

impl fmt::Debug for Thrown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl fmt::Display for Thrown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl Error for Thrown {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.source()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("checked")]
    struct Checked;

    #[test]
    fn test_fatal_classification() {
        assert!(is_fatal(&Fatal::new("x")));
        assert!(is_fatal(&Thrown::new(Fatal::new("x"))));
        assert!(!is_fatal(&Checked));
        assert!(!is_fatal(&Thrown::new(Checked)));
    }

    #[test]
    fn test_downcast_mismatch_returns_thrown() {
        let thrown = Thrown::new(Checked);
        let thrown = thrown.downcast::<Fatal>().unwrap_err();
        assert!(thrown.downcast::<Checked>().is_ok());
    }

    #[test]
    fn test_type_name_survives_erasure() {
        let thrown = Thrown::new(Thrown::new(Checked));
        assert!(thrown.type_name().ends_with("Checked"));

        let thrown = thrown.downcast::<Fatal>().unwrap_err();
        assert!(thrown.type_name().ends_with("Checked"));
    }

    #[test]
    fn test_display_forwards() {
        assert_eq!(Thrown::new(Checked).to_string(), "checked");
    }
}
