use crate::conditions::types::{matches_all, Condition};
use crate::storage::memory::DocumentStore;
use crate::vector::sparse::SparseVector;
use std::cmp::Ordering;

/// Scores candidates against `query_vector` and returns ordered doc ids.
///
/// Candidates are the store's documents in ingest order, narrowed first by
/// the structured conditions (AND semantics). The two paths are deliberately
/// asymmetric:
/// - `threshold == 0`: ranked top-k by descending cosine similarity, stable
///   ties (equal scores keep candidate order), truncated to `k` unless
///   `return_all` is set.
/// - `threshold > 0`: an unranked filter returning every candidate whose
///   similarity strictly exceeds the threshold, in candidate order.
///
/// A full linear scan per call; stored document vectors are only read.
pub fn get_nearest(
    store: &DocumentStore,
    query_vector: &SparseVector,
    conditions: &[Condition],
    k: usize,
    threshold: f64,
    return_all: bool,
) -> Vec<u64> {
    let candidates = store
        .iter()
        .filter(|doc| matches_all(conditions, doc));

    if threshold > 0.0 {
        return candidates
            .filter(|doc| query_vector.cosine_sim(&doc.vector) > threshold)
            .map(|doc| doc.doc_id)
            .collect();
    }

    let mut scored: Vec<(u64, f64)> = candidates
        .map(|doc| (doc.doc_id, query_vector.cosine_sim(&doc.vector)))
        .collect();
    // sort_by is stable: equal scores retain their candidate order
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut results: Vec<u64> = scored.into_iter().map(|(doc_id, _)| doc_id).collect();
    if !return_all {
        results.truncate(k);
    }
    results
}
