//! FnForge Core - Generic function traits, memoization and fallible adapters
//!
//! This crate provides the fundamental abstractions for FnForge:
//! - `Function` for total functions of arity 0 to 3, with combinators
//! - `TryFunction` for fallible functions and the `nest`/`recover`/`sneaky_throw` adapters
//! - Memoizing wrappers with at-most-once computation per key
//! - `Thrown` and `Fatal` for erased and environment-level failures

#[macro_use]
mod macros;

pub mod error;
pub mod fallible;
pub mod function;
pub mod memoize;
pub mod thrown;

pub use error::FnForgeError;
pub use fallible::{
    fallible, Fallible, Nest, NestWith, Recover, SneakyThrow, TryAndThen, TryBoxed, TryCompose,
    TryConsume, TryFunction,
};
pub use function::{constant, identity, AndThen, Boxed, Compose, Consume, Function};
pub use memoize::{Memoized, TryMemoized};
pub use thrown::{is_fatal, Fatal, Thrown};
