//! Invocation counters.
//!
//! # Example
//!
//! ```
//! use fnforge_test::counter::CallCounter;
//!
//! let counter = CallCounter::new();
//! let handle = counter.clone();
//! let double = move |x: i32| {
//!     handle.hit();
//!     x * 2
//! };
//!
//! assert_eq!(double(4), 8);
//! assert_eq!(double(4), 8);
//! assert_eq!(counter.count(), 2);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A cloneable, thread-safe call counter. Clones share one count.
#[derive(Clone, Debug, Default)]
pub struct CallCounter {
    calls: Arc<AtomicUsize>,
}

impl CallCounter {
    /// Creates a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one call.
    pub fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    /// Returns the number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}
