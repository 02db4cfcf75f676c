//! Document Storage Module
//!
//! The in-memory document vector store. Bulk-populated once by the ingestion
//! pipeline and read-only thereafter; the ranking and feedback engines only
//! ever read from it.

pub mod memory;
