use axum::{
    routing::{get, post},
    Extension, Router,
};
use clap::Parser;
use news_search::cache::store::QueryCache;
use news_search::config::ServiceConfig;
use news_search::context::AppContext;
use news_search::feedback::handlers::handle_feedback;
use news_search::ingestion::pipeline::{
    build_document_store, load_articles, remove_repeat_articles,
};
use news_search::search::handlers::{handle_query, handle_stats};
use news_search::search::tfidf::FieldWeights;
use news_search::vector::term::TermDict;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = ServiceConfig::parse();

    // 1. Ingest the corpus. Serving starts only after the barrier passes.
    tracing::info!("Loading corpus from {}", config.articles.display());
    let articles = load_articles(&config.articles)?;
    let articles = remove_repeat_articles(articles);
    tracing::info!(
        "Vectorizing {} articles with {} workers",
        articles.len(),
        config.ingest_workers
    );

    let terms = TermDict::new();
    let documents = build_document_store(
        articles,
        &terms,
        FieldWeights::default(),
        config.ingest_workers,
    )
    .await?;
    tracing::info!(
        "Corpus ready: {} documents, {} distinct terms",
        documents.len(),
        terms.len()
    );

    let bind = config.bind;
    let ctx = Arc::new(AppContext {
        config,
        terms,
        documents,
        query_cache: QueryCache::new(),
    });

    // 2. Spawn stats reporter:
    let stats_ctx = ctx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60));
        loop {
            interval.tick().await;
            tracing::info!(
                "Service stats: {} documents, {} cached queries, {} terms",
                stats_ctx.documents.len(),
                stats_ctx.query_cache.len(),
                stats_ctx.terms.len()
            );
        }
    });

    // 3. HTTP Router:
    let app = Router::new()
        .route("/query", get(handle_query))
        .route("/query/update", post(handle_feedback))
        .route("/stats", get(handle_stats))
        .layer(Extension(ctx));

    tracing::info!("HTTP server listening on {}", bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
