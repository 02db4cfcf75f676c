use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};

/// Interned term identifier.
///
/// Ids are dense and stable for the lifetime of the process; the same term
/// string always resolves to the same id within one `TermDict`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TermId(pub u32);

/// Process-wide string-to-id interner shared by ingestion, query
/// vectorization, and the cache.
pub struct TermDict {
    ids: DashMap<String, TermId>,
    next: AtomicU32,
}

impl TermDict {
    pub fn new() -> Self {
        Self {
            ids: DashMap::new(),
            next: AtomicU32::new(0),
        }
    }

    /// Returns the id for `term`, allocating one if the term is new.
    /// Allocation happens under the shard lock, so concurrent interns of the
    /// same new term observe a single id.
    pub fn intern(&self, term: &str) -> TermId {
        if let Some(id) = self.ids.get(term) {
            return *id;
        }
        *self
            .ids
            .entry(term.to_string())
            .or_insert_with(|| TermId(self.next.fetch_add(1, Ordering::Relaxed)))
    }

    /// Lookup without allocation.
    pub fn get(&self, term: &str) -> Option<TermId> {
        self.ids.get(term).map(|entry| *entry)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Default for TermDict {
    fn default() -> Self {
        Self::new()
    }
}
