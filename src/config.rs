use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Service configuration, parsed once at startup and owned by the
/// application context for the lifetime of the process.
#[derive(Debug, Clone, Parser)]
#[command(name = "news-search", about = "TF-IDF news article search service")]
pub struct ServiceConfig {
    /// Address the HTTP server binds to.
    #[arg(long, default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Path to the scraped-articles JSON corpus.
    #[arg(long)]
    pub articles: PathBuf,

    /// Ordering applied to query responses.
    #[arg(long, value_enum, default_value = "similarity")]
    pub order_by: ResultOrder,

    /// Minimum cosine similarity for reusing another query's cached results.
    #[arg(long, default_value_t = 0.8)]
    pub fuzzy_threshold: f64,

    /// Worker tasks used for corpus vectorization at startup.
    #[arg(long, default_value_t = 4)]
    pub ingest_workers: usize,

    /// Weight applied to relevant document vectors during feedback.
    #[arg(long, default_value_t = 0.9)]
    pub feedback_alpha: f64,

    /// Weight applied to irrelevant document vectors during feedback.
    #[arg(long, default_value_t = 0.1)]
    pub feedback_beta: f64,
}

/// Response ordering. Picked once per deployment; both orderings apply to
/// cached and fresh results alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResultOrder {
    /// Descending cosine similarity (the ranking engine's native order).
    Similarity,
    /// Descending publish date, undated articles last.
    Date,
}
