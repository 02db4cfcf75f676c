use crate::cache::store::QueryCache;
use crate::config::ServiceConfig;
use crate::storage::memory::DocumentStore;
use crate::vector::term::TermDict;

/// Service-scoped state, built once at startup after the ingestion barrier
/// and shared by every request handler through an `axum::Extension`. Owning
/// the store handles here replaces any module-level session state.
pub struct AppContext {
    pub config: ServiceConfig,
    pub terms: TermDict,
    pub documents: DocumentStore,
    pub query_cache: QueryCache,
}
