//! Per-key memoization slots.
//!
//! The map lock is held only long enough to find or create a key's slot. The
//! computation then runs under that slot's own lock, so callers with the same
//! key wait for one computation while callers with other keys proceed.
//!
//! A computation that fails or panics removes its slot from the map, so the
//! map only ever holds computed outputs and computations in flight.

use std::collections::HashMap;
use std::convert::Infallible;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use fnforge_config::MemoizeConfig;
use tracing::trace;

enum Cell<V> {
    /// Claimed by the caller holding the slot lock, or about to be.
    Vacant,
    Ready(V),
    /// Removed from the map after a failed computation; waiters must retry.
    Abandoned,
}

type Slot<V> = Arc<Mutex<Cell<V>>>;

/// Thread-safe cache with at-most-once computation per key.
pub(crate) struct MemoCache<K, V> {
    slots: Mutex<HashMap<K, Slot<V>>>,
    filled: AtomicUsize,
}

// Poisoned slots are always marked `Abandoned` first, so their contents stay valid.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Holds a vacant slot while its value is computed.
///
/// Dropping a claim that was never filled abandons the slot and unlinks it
/// from the map. This covers both an `Err` return and a panic.
struct Claim<'a, K, V>
where
    K: Eq + Hash,
{
    slots: &'a Mutex<HashMap<K, Slot<V>>>,
    key: &'a K,
    slot: &'a Slot<V>,
    cell: MutexGuard<'a, Cell<V>>,
}

impl<K, V> Drop for Claim<'_, K, V>
where
    K: Eq + Hash,
{
    fn drop(&mut self) {
        if !matches!(*self.cell, Cell::Vacant) {
            return;
        }
        *self.cell = Cell::Abandoned;

        let mut slots = lock(self.slots);
        if slots
            .get(self.key)
            .is_some_and(|current| Arc::ptr_eq(current, self.slot))
        {
            slots.remove(self.key);
        }
        trace!(event = "memo_abandon", pending = slots.len());
    }
}

impl<K, V> MemoCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub(crate) fn new(config: &MemoizeConfig) -> Self {
        Self {
            slots: Mutex::new(HashMap::with_capacity(config.initial_capacity)),
            filled: AtomicUsize::new(0),
        }
    }

    fn slot(&self, key: &K) -> Slot<V> {
        let mut slots = lock(&self.slots);
        if let Some(slot) = slots.get(key) {
            return Arc::clone(slot);
        }
        let slot: Slot<V> = Arc::new(Mutex::new(Cell::Vacant));
        slots.insert(key.clone(), Arc::clone(&slot));
        slot
    }

    /// Returns the cached value for `key`, computing it first if absent.
    pub(crate) fn get_or_compute(&self, key: K, compute: impl FnOnce(K) -> V) -> V {
        match self.get_or_try_compute(key, |key| Ok::<V, Infallible>(compute(key))) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Like `get_or_compute`, but a failed computation leaves the key empty.
    pub(crate) fn get_or_try_compute<E>(
        &self,
        key: K,
        compute: impl FnOnce(K) -> Result<V, E>,
    ) -> Result<V, E> {
        loop {
            let slot = self.slot(&key);
            let cell = lock(&slot);
            match &*cell {
                Cell::Ready(cached) => {
                    trace!(event = "memo_hit");
                    return Ok(cached.clone());
                }
                Cell::Abandoned => continue,
                Cell::Vacant => {}
            }

            let mut claim = Claim {
                slots: &self.slots,
                key: &key,
                slot: &slot,
                cell,
            };
            let computed = compute(key.clone())?;
            *claim.cell = Cell::Ready(computed.clone());
            drop(claim);

            let cached = self.filled.fetch_add(1, Ordering::Relaxed) + 1;
            trace!(event = "memo_miss", cached);
            return Ok(computed);
        }
    }

    /// Number of keys holding a computed value.
    pub(crate) fn len(&self) -> usize {
        self.filled.load(Ordering::Relaxed)
    }

    /// Number of slots in the map, including computations in flight.
    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        lock(&self.slots).len()
    }
}
