//! Error types for FnForge

use std::error::Error;

use thiserror::Error;

use crate::thrown::Thrown;

/// Main error type for FnForge adapters
#[derive(Debug, Error)]
pub enum FnForgeError {
    /// Carrier produced by `nest()` around a non-fatal failure
    #[error("Wrapped failure: {source}")]
    Wrapped {
        #[source]
        source: Box<dyn Error + Send + Sync + 'static>,
    },

    /// A recover handler produced no fallback for the given failure
    #[error("Recover handler returned no fallback for {error_type}: {message}")]
    MissingFallback {
        /// Type name of the failure the handler declined.
        error_type: &'static str,
        /// Display text of that failure.
        message: String,
        /// The declined failure itself.
        #[source]
        source: Box<dyn Error + Send + Sync + 'static>,
    },
}

impl FnForgeError {
    /// Wraps a failure in the `nest()` carrier.
    pub fn wrapped<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        FnForgeError::Wrapped {
            source: Box::new(error),
        }
    }

    /// Builds the error reported when a recover handler declines `error`.
    ///
    /// An already erased failure is reported under its concrete type.
    pub fn missing_fallback<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        let thrown = Thrown::new(error);
        FnForgeError::MissingFallback {
            error_type: thrown.type_name(),
            message: thrown.to_string(),
            source: thrown.into_inner(),
        }
    }

    /// Returns the wrapped failure, if this is the `nest()` carrier.
    pub fn wrapped_source(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match self {
            FnForgeError::Wrapped { source } => Some(source.as_ref()),
            FnForgeError::MissingFallback { .. } => None,
        }
    }
}

/// Result type alias for FnForge operations
pub type Result<T> = std::result::Result<T, FnForgeError>;
