//! Per-collection lock table.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Lock guarding one collection directory.
pub type CollectionLock = Arc<RwLock<()>>;

/// Interned reader-writer locks, one per collection name.
///
/// The map itself sits behind a [`Mutex`] that is held only for the
/// lookup-or-insert; record I/O happens under the returned collection lock.
/// Entries are never evicted.
#[derive(Debug, Default)]
pub struct LockRegistry {
  locks: Mutex<HashMap<String, CollectionLock>>,
}

impl LockRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns the lock for `collection`, creating it on first use.
  ///
  /// Repeated calls with the same name return the same lock instance.
  pub fn get_or_create(&self, collection: &str) -> CollectionLock {
    let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(lock) = locks.get(collection) {
      return Arc::clone(lock);
    }
    let lock = CollectionLock::default();
    locks.insert(collection.to_string(), Arc::clone(&lock));
    lock
  }

  /// Number of collections that have been locked at least once.
  pub fn len(&self) -> usize {
    self.locks.lock().unwrap_or_else(PoisonError::into_inner).len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

// The guarded value is `()`, so a panic while holding the lock cannot leave
// anything half-updated.
pub(crate) fn read(lock: &RwLock<()>) -> RwLockReadGuard<'_, ()> {
  lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write(lock: &RwLock<()>) -> RwLockWriteGuard<'_, ()> {
  lock.write().unwrap_or_else(PoisonError::into_inner)
}
