//! News Article Search Engine Library
//!
//! This library crate defines the core modules that make up the search
//! service. It serves as the foundation for the binary executable
//! (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of the following loosely coupled subsystems:
//!
//! - **`vector`**: sparse term-weight vectors, their algebra, and the term
//!   interner everything else shares.
//! - **`search`**: the core Information Retrieval logic. Contains the
//!   tokenizer, the TF-IDF vectorizer, the ranking engine, and the query
//!   endpoint.
//! - **`conditions`**: the backtick-delimited structured-filter
//!   mini-language embedded in query strings.
//! - **`cache`**: the query-result cache with exact and fuzzy reuse.
//! - **`feedback`**: Rocchio-style relevance feedback over cached query
//!   vectors, with its approximate undo.
//! - **`ingestion`**: corpus loading and the parallel vectorization job that
//!   gates service startup.
//! - **`storage`**: the in-memory document store, read-only after ingest.

pub mod cache;
pub mod conditions;
pub mod config;
pub mod context;
pub mod error;
pub mod feedback;
pub mod ingestion;
pub mod search;
pub mod storage;
pub mod vector;
