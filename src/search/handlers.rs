use super::engine::get_nearest;
use super::types::{SearchResponse, SearchResultItem, StatsResponse};
use crate::cache::store::CacheResult;
use crate::conditions::parser::extract_conditions;
use crate::config::ResultOrder;
use crate::context::AppContext;
use crate::storage::memory::DocumentStore;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

pub const DEFAULT_N_RESULTS: usize = 20;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub n_results: Option<usize>,
}

/// GET /query
///
/// Splits the filter block from the free text, consults the cache (exact,
/// then fuzzy), and only runs a full ranking pass on a miss. Cache entries
/// are keyed by the filter-stripped query string.
pub async fn handle_query(
    Query(params): Query<SearchParams>,
    Extension(ctx): Extension<Arc<AppContext>>,
) -> (StatusCode, Json<SearchResponse>) {
    let (free_text, conditions) = match extract_conditions(&params.q) {
        Ok(parts) => parts,
        Err(err) => {
            tracing::debug!("Rejected query '{}': {}", params.q, err);
            return (
                StatusCode::BAD_REQUEST,
                Json(SearchResponse { results: vec![] }),
            );
        }
    };
    let k = params.n_results.unwrap_or(DEFAULT_N_RESULTS);

    let result_ids = match ctx
        .query_cache
        .lookup(&free_text, &ctx.terms, ctx.config.fuzzy_threshold)
    {
        CacheResult::Hit { result_ids, .. } => result_ids,
        CacheResult::Miss { vector } => {
            let ids = get_nearest(&ctx.documents, &vector, &conditions, k, 0.0, false);
            ctx.query_cache.store(&free_text, vector, ids.clone());
            tracing::debug!("Ranked {} results for query '{}'", ids.len(), free_text);
            ids
        }
    };

    let mut results = hydrate(&ctx.documents, &result_ids);
    if ctx.config.order_by == ResultOrder::Date {
        // Option<NaiveDateTime> orders None first, so descending puts
        // undated articles last
        results.sort_by(|a, b| b.date.cmp(&a.date));
    }

    (StatusCode::OK, Json(SearchResponse { results }))
}

/// GET /stats
pub async fn handle_stats(
    Extension(ctx): Extension<Arc<AppContext>>,
) -> Json<StatsResponse> {
    Json(StatsResponse {
        documents: ctx.documents.len(),
        cached_queries: ctx.query_cache.len(),
        terms: ctx.terms.len(),
    })
}

/// Resolves ranked ids back into response rows, skipping ids that no longer
/// resolve (a cached id can outlive a corpus reload).
fn hydrate(docs: &DocumentStore, ids: &[u64]) -> Vec<SearchResultItem> {
    ids.iter()
        .filter_map(|id| docs.get(*id))
        .map(|doc| SearchResultItem {
            doc_id: doc.doc_id,
            title: doc.title.clone(),
            summary: doc.summary.clone(),
            link: doc.link.clone(),
            date: doc.publish_date,
            rating: doc.bias_rating,
            publisher: doc.publisher.clone(),
            site: doc.site_link.clone(),
        })
        .collect()
}
