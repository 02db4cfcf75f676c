//! Search Service Module
//!
//! The core Information Retrieval (IR) pipeline of the search engine. It
//! bridges the HTTP API layer with the document store and the query cache.
//!
//! ## Responsibilities
//! - **Tokenization**: parsing raw article fields and query strings into
//!   normalized, searchable tokens.
//! - **Vectorization**: building per-document TF-IDF vectors from weighted
//!   fields using corpus-wide document frequency.
//! - **Ranking**: scoring candidate documents against a query vector by
//!   cosine similarity, with structured-condition narrowing.
//! - **API**: exposing the query endpoint via the Axum web server.
//!
//! ## Submodules
//! - **`engine`**: the ranking and retrieval logic.
//! - **`handlers`**: HTTP request handlers for the query and stats endpoints.
//! - **`tfidf`**: document-frequency and TF-IDF weighting.
//! - **`tokenizer`**: text normalization and stopword filtering.
//! - **`types`**: documents, news sources, and API DTOs.

pub mod engine;
pub mod handlers;
pub mod tfidf;
pub mod tokenizer;
pub mod types;
