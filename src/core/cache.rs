//! Result cache abstraction shared by every task executor.

use super::CacheError;

/// Store of last-known status code per URL plus cumulative per-host counters.
///
/// The two stores are independent: [`clear_all`](Self::clear_all) drops cached
/// status codes only and never resets host counters. Implementations must be
/// safe for concurrent use from many executors; a lost update is tolerated,
/// a torn entry is not.
pub trait ResultCache: Send + Sync + 'static {
    /// Last cached status code for `url`, if any.
    fn get(&self, url: &str) -> Result<Option<u16>, CacheError>;
    /// Store `status_code` for `url`, overwriting any previous value.
    fn put(&self, url: &str, status_code: u16) -> Result<(), CacheError>;
    /// Remove every cached status code and return how many were removed.
    fn clear_all(&self) -> Result<usize, CacheError>;
    /// Increment the counter for `host` and return the new value.
    fn increment_host_counter(&self, host: &str) -> Result<u64, CacheError>;
    /// Current counter for `host`; zero if the host was never seen.
    fn get_host_counter(&self, host: &str) -> Result<u64, CacheError>;
    /// Number of cached status codes.
    fn len(&self) -> usize;
    /// Claim the single sweeper slot for this cache. Returns `false` when a
    /// sweeper already holds it.
    fn try_claim_sweeper(&self) -> bool;
    /// Release the sweeper slot once the sweep loop has exited.
    fn release_sweeper(&self);
    /// Whether no status codes are cached.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
