//! Query Cache Module
//!
//! Memoizes query results for reuse across requests.
//!
//! ## Core Concepts
//! - **Exact reuse**: a repeated query string returns its stored results
//!   without recomputation.
//! - **Fuzzy reuse**: a new query whose vector is close enough to a cached
//!   query's vector borrows that entry's result ids while keeping its own
//!   freshly computed vector, so later feedback refines the right vector.
//! - **Per-key atomicity**: entries are whole-value upserts under a shard
//!   lock; writers to different keys never serialize against each other.

pub mod store;
