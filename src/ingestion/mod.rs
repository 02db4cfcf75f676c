//! Ingestion Module
//!
//! Turns the scraped-articles corpus into the read-only document store the
//! service ranks against.
//!
//! ## Workflow
//! 1. **Load**: read and deduplicate the corpus file.
//! 2. **Reduce**: tokenize every article and compute corpus-wide document
//!    frequency; this must finish before any vector is built.
//! 3. **Vectorize**: fan per-document TF-IDF computation out across worker
//!    tasks and wait for all of them (the completion barrier).
//!
//! The HTTP listener only binds after the barrier has passed, so the service
//! never ranks against a half-built store.

pub mod pipeline;
pub mod types;
