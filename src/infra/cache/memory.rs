//! In-memory result cache backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::core::{CacheError, ResultCache};

/// In-process result cache.
///
/// Status codes and host counters live in separate maps, each behind its own
/// `parking_lot::Mutex`, so a sweep never contends with counter updates.
#[derive(Default)]
pub struct InMemoryResultCache {
    entries: Mutex<HashMap<String, u16>>,
    host_counters: Mutex<HashMap<String, u64>>,
    sweeper_claimed: AtomicBool,
}

impl InMemoryResultCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every host counter.
    pub fn host_counters(&self) -> HashMap<String, u64> {
        self.host_counters.lock().clone()
    }
}

impl ResultCache for InMemoryResultCache {
    fn get(&self, url: &str) -> Result<Option<u16>, CacheError> {
        Ok(self.entries.lock().get(url).copied())
    }

    fn put(&self, url: &str, status_code: u16) -> Result<(), CacheError> {
        self.entries.lock().insert(url.to_string(), status_code);
        Ok(())
    }

    fn clear_all(&self) -> Result<usize, CacheError> {
        let drained = std::mem::take(&mut *self.entries.lock());
        Ok(drained.len())
    }

    fn increment_host_counter(&self, host: &str) -> Result<u64, CacheError> {
        let mut counters = self.host_counters.lock();
        let count = counters.entry(host.to_string()).or_insert(0);
        *count += 1;
        Ok(*count)
    }

    fn get_host_counter(&self, host: &str) -> Result<u64, CacheError> {
        Ok(self.host_counters.lock().get(host).copied().unwrap_or(0))
    }

    fn len(&self) -> usize {
        self.entries.lock().len()
    }

    fn try_claim_sweeper(&self) -> bool {
        !self.sweeper_claimed.swap(true, Ordering::AcqRel)
    }

    fn release_sweeper(&self) {
        self.sweeper_claimed.store(false, Ordering::Release);
    }
}
