use thiserror::Error;

/// Failure taxonomy for the query and feedback paths.
///
/// `Parse` and `NotFound` surface to HTTP clients as 4xx responses with no
/// side effects. `Store` is fatal for the current request; reads may be
/// retried by the caller, feedback writes may not (a retried update
/// double-applies the adjustment).
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("invalid filter block: {0}")]
    Parse(String),
    #[error("no cached vector for query '{0}'")]
    NotFound(String),
    #[error("store unavailable: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
