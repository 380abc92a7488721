//! Sample failure types.
//!
//! [`ParseFailure`] carries a shared token so tests can check that an adapter
//! hands back the very failure the wrapped function produced, not a copy.
//!
//! # Example
//!
//! ```
//! use fnforge_test::failure::ParseFailure;
//!
//! let failure = ParseFailure::new("abc");
//! let same = failure.clone();
//! let other = ParseFailure::new("abc");
//!
//! assert!(failure.same_instance(&same));
//! assert!(!failure.same_instance(&other));
//! assert_eq!(failure.to_string(), "cannot parse 'abc'");
//! ```

use std::sync::Arc;

use thiserror::Error;

/// A recoverable parse failure with observable identity.
#[derive(Clone, Debug, Error)]
#[error("cannot parse '{input}'")]
pub struct ParseFailure {
    input: String,
    token: Arc<()>,
}

impl ParseFailure {
    /// Creates a failure for `input` with a fresh identity.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            token: Arc::new(()),
        }
    }

    /// The input that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns true if `other` originates from the same `new` call.
    pub fn same_instance(&self, other: &ParseFailure) -> bool {
        Arc::ptr_eq(&self.token, &other.token)
    }
}

/// A second recoverable failure type, for mapper tests.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("timed out after {millis}ms")]
pub struct Timeout {
    pub millis: u64,
}
