use super::PageId;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Seen-set plus predecessor map for one search (or one depth attempt).
///
/// Every operation takes the same lock, so a check-and-set is atomic with
/// respect to other workers.
#[derive(Default)]
pub struct DiscoveryLedger {
    state: Mutex<LedgerState>,
}

#[derive(Default)]
struct LedgerState {
    seen: FxHashSet<PageId>,
    predecessors: FxHashMap<PageId, PageId>,
}

impl DiscoveryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true only for the first call with `page`.
    pub fn mark_seen(&self, page: &str) -> bool {
        let mut state = self.lock();
        if state.seen.contains(page) {
            return false;
        }
        state.seen.insert(page.to_string())
    }

    /// First writer wins; later calls for the same page are ignored.
    pub fn record_predecessor(&self, page: &str, from: &str) {
        let mut state = self.lock();
        if !state.predecessors.contains_key(page) {
            state.predecessors.insert(page.to_string(), from.to_string());
        }
    }

    pub fn predecessor_of(&self, page: &str) -> Option<PageId> {
        self.lock().predecessors.get(page).cloned()
    }

    /// Marks `page` seen and records `from` as its predecessor in one step.
    /// Returns false if another worker got there first.
    pub fn discover(&self, page: &str, from: &str) -> bool {
        let mut state = self.lock();
        if state.seen.contains(page) {
            return false;
        }
        state.seen.insert(page.to_string());
        state
            .predecessors
            .entry(page.to_string())
            .or_insert_with(|| from.to_string());
        true
    }

    pub fn is_seen(&self, page: &str) -> bool {
        self.lock().seen.contains(page)
    }

    pub fn seen_count(&self) -> usize {
        self.lock().seen.len()
    }

    fn lock(&self) -> MutexGuard<'_, LedgerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
