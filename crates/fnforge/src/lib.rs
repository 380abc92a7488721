//! FnForge - Generic function wrappers in Rust
//!
//! One generic `Function` trait for total functions of arity 0 to 3, one
//! `TryFunction` trait for fallible ones, memoization with at-most-once
//! computation per key, and adapters that nest, recover or erase failures.
//!
//! # Example
//!
//! ```rust
//! use fnforge::prelude::*;
//!
//! let slow_square = (|x: u64| x * x).memoized();
//! assert_eq!(slow_square.apply((12,)), 144);
//!
//! let parse = fallible(|s: &str| s.parse::<u64>()).sneaky_throw();
//! let err = parse.try_apply(("twelve",)).unwrap_err();
//! assert!(err.is::<std::num::ParseIntError>());
//! ```

// Function traits and combinators
pub use fnforge_core::function::{constant, identity, AndThen, Boxed, Compose, Consume, Function};

// Fallible functions and adapters
pub use fnforge_core::fallible::{
    fallible, Fallible, Nest, NestWith, Recover, SneakyThrow, TryAndThen, TryBoxed, TryCompose,
    TryConsume, TryFunction,
};

// Memoization
pub use fnforge_core::memoize::{Memoized, TryMemoized};

// Failures
pub use fnforge_core::error::{FnForgeError, Result};
pub use fnforge_core::thrown::{is_fatal, Fatal, Thrown};

// Configuration
pub use fnforge_config::{ConfigError, FnForgeConfig, LoggingConfig, MemoizeConfig};

// Console output (optional)
#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{constant, fallible, identity, Function, TryFunction};
    pub use super::{Fatal, FnForgeError, Thrown};
    pub use super::{FnForgeConfig, MemoizeConfig};
}
