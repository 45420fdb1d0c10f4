use std::hash::{Hash, Hasher};

use cached::Cached;
use rustc_hash::{FxHashMap, FxHasher};

use crate::parse::Slot;

/// Memoized conflict counts for value ordering, keyed by a digest of
/// (slot, word, neighbor). Entries are only valid while the domains stay
/// unchanged; the solver resets the cache on every domain revision.
pub(crate) struct ConflictCache {
    store: FxHashMap<u64, usize>,
}

impl ConflictCache {
    pub(crate) fn new() -> ConflictCache {
        ConflictCache {
            store: FxHashMap::default(),
        }
    }

    pub(crate) fn conflicts<F>(
        &mut self,
        var: &Slot,
        word: &str,
        neighbor: &Slot,
        compute: F,
    ) -> usize
    where
        F: FnOnce() -> usize,
    {
        let mut hasher = FxHasher::default();
        var.hash(&mut hasher);
        word.hash(&mut hasher);
        neighbor.hash(&mut hasher);
        let key = hasher.finish();

        *self.cache_get_or_set_with(key, compute)
    }

    pub(crate) fn reset(&mut self) {
        self.cache_reset();
    }
}

impl Cached<u64, usize> for ConflictCache {
    fn cache_get(&mut self, k: &u64) -> Option<&usize> {
        self.store.get(k)
    }
    fn cache_get_mut(&mut self, k: &u64) -> Option<&mut usize> {
        self.store.get_mut(k)
    }
    fn cache_get_or_set_with<F: FnOnce() -> usize>(&mut self, k: u64, f: F) -> &mut usize {
        self.store.entry(k).or_insert_with(f)
    }
    fn cache_set(&mut self, k: u64, v: usize) -> Option<usize> {
        self.store.insert(k, v)
    }
    fn cache_remove(&mut self, k: &u64) -> Option<usize> {
        self.store.remove(k)
    }
    fn cache_clear(&mut self) {
        self.store.clear();
    }
    fn cache_reset(&mut self) {
        self.store = FxHashMap::default();
    }
    fn cache_size(&self) -> usize {
        self.store.len()
    }
}
