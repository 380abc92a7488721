//! Shared test fixtures for FnForge crates.
//!
//! This crate provides counters and sample failure types for testing.
//! It does NOT depend on `fnforge-core`, so `fnforge-core` can use it as a
//! dev-dependency without linking a second copy of itself.
//!
//! - [`counter`] - Thread-safe invocation counters
//! - [`failure`] - Sample failure types with observable identity
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! fnforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use fnforge_test::counter::CallCounter;
//! use fnforge_test::failure::{ParseFailure, Timeout};
//! ```

pub mod counter;
pub mod failure;

// Re-export commonly used types at crate root for convenience
pub use counter::CallCounter;
pub use failure::{ParseFailure, Timeout};
