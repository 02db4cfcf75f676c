//! Relevance Feedback Module
//!
//! Rocchio-style refinement of cached query vectors from user relevance
//! judgments.
//!
//! ## Core Concepts
//! - **Update**: pulls the query vector toward relevant documents (scaled by
//!   alpha) and away from irrelevant ones (scaled by beta), then re-ranks
//!   and overwrites the cached results.
//! - **Undo**: the same procedure with the roles swapped. This is an
//!   approximate inverse: it only cancels a prior update exactly when alpha
//!   equals beta and nothing else intervened. That asymmetry is part of the
//!   contract, not a defect.
//! - **Unknown ids** contribute the zero vector and are silently dropped.

pub mod engine;
pub mod handlers;
