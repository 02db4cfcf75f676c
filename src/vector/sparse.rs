use super::term::TermId;
use std::collections::HashMap;

/// Sparse term-weight vector keyed by interned term ids.
///
/// Absent keys carry weight 0. Weights may go negative after feedback
/// subtraction; that is expected and preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    weights: HashMap<TermId, f64>,
}

impl SparseVector {
    pub fn new() -> Self {
        Self {
            weights: HashMap::new(),
        }
    }

    pub fn from_weights(weights: HashMap<TermId, f64>) -> Self {
        Self { weights }
    }

    /// Weight for `term`, 0 when absent.
    pub fn get(&self, term: TermId) -> f64 {
        self.weights.get(&term).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, term: TermId) -> bool {
        self.weights.contains_key(&term)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Element-wise sum over the union of both key sets.
    pub fn add(&self, other: &SparseVector) -> SparseVector {
        let mut result = self.weights.clone();
        for (term, weight) in &other.weights {
            *result.entry(*term).or_insert(0.0) += weight;
        }
        SparseVector { weights: result }
    }

    /// Element-wise difference over the union of both key sets.
    pub fn subtract(&self, other: &SparseVector) -> SparseVector {
        let mut result = self.weights.clone();
        for (term, weight) in &other.weights {
            *result.entry(*term).or_insert(0.0) -= weight;
        }
        SparseVector { weights: result }
    }

    /// Multiplies every present weight by `alpha`. The key set is unchanged:
    /// scaling by 0 leaves explicit zero entries rather than pruning them.
    pub fn scale(&self, alpha: f64) -> SparseVector {
        SparseVector {
            weights: self
                .weights
                .iter()
                .map(|(term, weight)| (*term, alpha * weight))
                .collect(),
        }
    }

    /// Dot product, iterating the smaller vector's keys.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (small, large) = if self.weights.len() < other.weights.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .weights
            .iter()
            .map(|(term, weight)| weight * large.get(*term))
            .sum()
    }

    pub fn norm(&self) -> f64 {
        self.weights
            .values()
            .map(|weight| weight * weight)
            .sum::<f64>()
            .sqrt()
    }

    /// Cosine similarity. A zero dot product short-circuits to 0, which also
    /// covers zero-norm inputs; there is no error or NaN path here.
    pub fn cosine_sim(&self, other: &SparseVector) -> f64 {
        let num = self.dot(other);
        if num == 0.0 {
            return 0.0;
        }
        num / (self.norm() * other.norm())
    }
}

impl FromIterator<(TermId, f64)> for SparseVector {
    fn from_iter<I: IntoIterator<Item = (TermId, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}
