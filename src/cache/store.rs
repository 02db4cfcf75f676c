use crate::error::{Result, SearchError};
use crate::search::tfidf::query_vector;
use crate::vector::sparse::SparseVector;
use crate::vector::term::TermDict;
use dashmap::DashMap;

/// Cached state for one query string: the query's vector (which may carry
/// negative weights after feedback) and the ordered result ids last computed
/// for it.
#[derive(Debug, Clone)]
pub struct QueryCacheEntry {
    pub vector: SparseVector,
    pub result_ids: Vec<u64>,
}

/// Outcome of a cache lookup.
#[derive(Debug, Clone)]
pub enum CacheResult {
    /// Reusable results. On a fuzzy hit the ids come from the matched entry
    /// while the vector is the new query's own.
    Hit {
        result_ids: Vec<u64>,
        vector: SparseVector,
    },
    /// Nothing reusable; the caller runs a full ranking pass with the
    /// returned vector.
    Miss { vector: SparseVector },
}

/// Query-string-keyed result cache. At most one live entry per query string;
/// `store` overwrites, it does not version.
pub struct QueryCache {
    entries: DashMap<String, QueryCacheEntry>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Exact match first, then a linear scan of cached vectors for the
    /// closest entry. A fuzzy match above `fuzzy_threshold` registers the new
    /// query under its own key (own vector, borrowed ids) before returning,
    /// so feedback on it has a vector to refine.
    pub fn lookup(&self, query: &str, dict: &TermDict, fuzzy_threshold: f64) -> CacheResult {
        if let Some(entry) = self.entries.get(query) {
            tracing::debug!("Exact cache hit for query '{}'", query);
            return CacheResult::Hit {
                result_ids: entry.result_ids.clone(),
                vector: entry.vector.clone(),
            };
        }

        let fresh = query_vector(dict, query);

        let mut best: Option<(String, f64)> = None;
        for entry in self.entries.iter() {
            let score = fresh.cosine_sim(&entry.value().vector);
            if best.as_ref().map(|(_, s)| score > *s).unwrap_or(true) {
                best = Some((entry.key().clone(), score));
            }
        }

        if let Some((matched, score)) = best {
            if score > fuzzy_threshold {
                tracing::debug!(
                    "Fuzzy cache hit for query '{}' via '{}' (score {:.3})",
                    query,
                    matched,
                    score
                );
                let donor_ids = self
                    .entries
                    .get(&matched)
                    .map(|entry| entry.result_ids.clone())
                    .unwrap_or_default();
                self.store(query, fresh.clone(), donor_ids.clone());
                return CacheResult::Hit {
                    result_ids: donor_ids,
                    vector: fresh,
                };
            }
        }

        CacheResult::Miss { vector: fresh }
    }

    /// Upserts both fields for the key as a single write. Last write wins on
    /// concurrent stores to the same key; a reader never observes a vector
    /// from one write paired with ids from another.
    pub fn store(&self, query: &str, vector: SparseVector, result_ids: Vec<u64>) {
        self.entries
            .insert(query.to_string(), QueryCacheEntry { vector, result_ids });
    }

    /// Overwrites only the vector, leaving the stored ids in place. Used by
    /// the feedback flow, where the vector write lands before the re-ranked
    /// ids.
    pub fn store_vector(&self, query: &str, vector: SparseVector) -> Result<()> {
        match self.entries.get_mut(query) {
            Some(mut entry) => {
                entry.vector = vector;
                Ok(())
            }
            None => Err(SearchError::NotFound(query.to_string())),
        }
    }

    pub fn get(&self, query: &str) -> Option<QueryCacheEntry> {
        self.entries.get(query).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}
