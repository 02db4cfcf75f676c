use crate::vector::sparse::SparseVector;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Political bias rating of a news source, declared in left-to-right order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BiasRating {
    Left,
    LeanLeft,
    Center,
    LeanRight,
    Right,
    Mixed,
}

/// A news outlet as recorded by the bias-rating dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsSource {
    pub name: String,
    pub bias_rating: BiasRating,
    pub homepage_url: String,
}

/// A vectorized article as held by the document store.
///
/// Created in bulk at ingest time; the vector is never mutated afterwards,
/// only read by the ranking and feedback engines.
#[derive(Debug, Clone)]
pub struct Document {
    pub doc_id: u64,
    pub title: String,
    pub summary: String,
    pub link: String,
    pub authors: Vec<String>,
    pub vector: SparseVector,
    pub publish_date: Option<NaiveDateTime>,
    pub publisher: Option<String>,
    pub bias_rating: Option<BiasRating>,
    pub site_link: Option<String>,
}

/// One hydrated result row of the query endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub doc_id: u64,
    pub title: String,
    pub summary: String,
    pub link: String,
    pub date: Option<NaiveDateTime>,
    pub rating: Option<BiasRating>,
    pub publisher: Option<String>,
    pub site: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResultItem>,
}

/// Service counters reported by the stats endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub documents: usize,
    pub cached_queries: usize,
    pub terms: usize,
}
