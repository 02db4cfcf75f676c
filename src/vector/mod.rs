//! Sparse Vector Module
//!
//! Term-weight vectors and the algebra the ranking and feedback engines are
//! built on.
//!
//! ## Core Concepts
//! - **Interning**: terms are mapped to dense integer ids by `TermDict` so
//!   vectors hash and compare integers instead of strings.
//! - **Implicit zero**: a term absent from a vector has weight 0. Results of
//!   add/subtract cover the union of the input key sets; scaling keeps the
//!   key set of its input, even when scaling by 0.
//! - **Degenerate cosine**: a zero dot product yields similarity 0, which
//!   also covers zero-norm inputs.

pub mod sparse;
pub mod term;

#[cfg(test)]
mod tests;
