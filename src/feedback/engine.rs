use crate::cache::store::QueryCache;
use crate::error::{Result, SearchError};
use crate::search::engine::get_nearest;
use crate::storage::memory::DocumentStore;
use crate::vector::sparse::SparseVector;

/// Result count recomputed after every feedback adjustment.
pub const FEEDBACK_RERANK_K: usize = 20;

/// Applies one round of Rocchio feedback to the cached vector for `query`.
///
/// The adjusted vector is `old + alpha * sum(relevant) - beta *
/// sum(irrelevant)`. The vector write lands before the re-ranked ids; a
/// store failure between the two leaves the previous ids paired with the
/// refined vector. Returns the re-ranked ids.
///
/// Not idempotent: retrying a failed call double-applies the adjustment.
pub fn update(
    cache: &QueryCache,
    docs: &DocumentStore,
    query: &str,
    relevant: &[u64],
    irrelevant: &[u64],
    alpha: f64,
    beta: f64,
) -> Result<Vec<u64>> {
    let entry = cache
        .get(query)
        .ok_or_else(|| SearchError::NotFound(query.to_string()))?;

    let adjusted = entry
        .vector
        .add(&sum_doc_vectors(docs, relevant).scale(alpha))
        .subtract(&sum_doc_vectors(docs, irrelevant).scale(beta));

    cache.store_vector(query, adjusted.clone())?;
    let result_ids = get_nearest(docs, &adjusted, &[], FEEDBACK_RERANK_K, 0.0, false);
    cache.store(query, adjusted, result_ids.clone());

    tracing::debug!(
        "Feedback applied to query '{}' ({} relevant, {} irrelevant)",
        query,
        relevant.len(),
        irrelevant.len()
    );

    Ok(result_ids)
}

/// Reverses a prior `update` by swapping the relevant and irrelevant roles:
/// irrelevant documents are added at alpha, relevant ones subtracted at
/// beta. Only an exact inverse when alpha equals beta.
pub fn undo(
    cache: &QueryCache,
    docs: &DocumentStore,
    query: &str,
    relevant: &[u64],
    irrelevant: &[u64],
    alpha: f64,
    beta: f64,
) -> Result<Vec<u64>> {
    update(cache, docs, query, irrelevant, relevant, alpha, beta)
}

/// Sum of the named documents' vectors. Ids absent from the store contribute
/// nothing.
fn sum_doc_vectors(docs: &DocumentStore, ids: &[u64]) -> SparseVector {
    let mut sum = SparseVector::new();
    for id in ids {
        if let Some(doc) = docs.get(*id) {
            sum = sum.add(&doc.vector);
        }
    }
    sum
}
