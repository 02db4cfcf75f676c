use crate::ingestion::types::RawArticle;
use crate::search::tokenizer::tokenize;
use crate::vector::sparse::SparseVector;
use crate::vector::term::{TermDict, TermId};
use std::collections::{HashMap, HashSet};

/// Per-field weights applied when accumulating term frequency. A term
/// occurring in several fields accumulates the weight of each.
#[derive(Debug, Clone, Copy)]
pub struct FieldWeights {
    pub title: f64,
    pub summary: f64,
    pub author: f64,
    pub publisher: f64,
    pub keywords: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title: 1.0,
            summary: 1.0,
            author: 5.0,
            publisher: 5.0,
            keywords: 1.0,
        }
    }
}

/// Tokenized, interned article fields ready for weighting.
pub struct ArticleTokens {
    pub title: Vec<TermId>,
    pub summary: Vec<TermId>,
    pub author: Vec<TermId>,
    pub publisher: Vec<TermId>,
    pub keywords: Vec<TermId>,
}

impl ArticleTokens {
    pub fn from_article(dict: &TermDict, article: &RawArticle) -> Self {
        let intern_text =
            |text: &str| -> Vec<TermId> { tokenize(text).iter().map(|t| dict.intern(t)).collect() };
        let intern_list = |items: &[String]| -> Vec<TermId> {
            items
                .iter()
                .flat_map(|item| tokenize(item))
                .map(|t| dict.intern(&t))
                .collect()
        };

        Self {
            title: intern_text(&article.title),
            summary: intern_text(&article.summary),
            author: intern_list(&article.authors),
            publisher: intern_text(&article.source.name),
            keywords: intern_list(&article.keywords),
        }
    }

    fn sections(&self) -> [&[TermId]; 5] {
        [
            &self.title,
            &self.summary,
            &self.author,
            &self.publisher,
            &self.keywords,
        ]
    }
}

/// Corpus-wide document frequency: for each term, the number of documents
/// containing it at least once, plus the corpus size.
pub struct DocFreqs {
    counts: HashMap<TermId, usize>,
    num_docs: usize,
}

impl DocFreqs {
    pub fn get(&self, term: TermId) -> usize {
        self.counts.get(&term).copied().unwrap_or(0)
    }

    pub fn num_docs(&self) -> usize {
        self.num_docs
    }
}

/// Reduction over the whole corpus. Must complete before any document's
/// TF-IDF vector is computed.
pub fn compute_doc_freqs(docs: &[ArticleTokens]) -> DocFreqs {
    let mut counts: HashMap<TermId, usize> = HashMap::new();
    for doc in docs {
        let mut seen: HashSet<TermId> = HashSet::new();
        for section in doc.sections() {
            for term in section {
                seen.insert(*term);
            }
        }
        for term in seen {
            *counts.entry(term).or_insert(0) += 1;
        }
    }
    DocFreqs {
        counts,
        num_docs: docs.len(),
    }
}

/// Per-field weighted term frequency.
pub fn compute_tf(doc: &ArticleTokens, weights: &FieldWeights) -> HashMap<TermId, f64> {
    let mut tf: HashMap<TermId, f64> = HashMap::new();
    for term in &doc.title {
        *tf.entry(*term).or_insert(0.0) += weights.title;
    }
    for term in &doc.summary {
        *tf.entry(*term).or_insert(0.0) += weights.summary;
    }
    for term in &doc.author {
        *tf.entry(*term).or_insert(0.0) += weights.author;
    }
    for term in &doc.publisher {
        *tf.entry(*term).or_insert(0.0) += weights.publisher;
    }
    for term in &doc.keywords {
        *tf.entry(*term).or_insert(0.0) += weights.keywords;
    }
    tf
}

/// `tf * ln(N / (1 + df))` for every term with nonzero tf. Terms absent from
/// the document never appear in the output.
pub fn compute_tfidf(
    doc: &ArticleTokens,
    doc_freqs: &DocFreqs,
    weights: &FieldWeights,
) -> SparseVector {
    let tf = compute_tf(doc, weights);
    let n = doc_freqs.num_docs() as f64;
    tf.into_iter()
        .map(|(term, value)| {
            let df = doc_freqs.get(term) as f64;
            (term, value * (n / (1.0 + df)).ln())
        })
        .collect()
}

/// Converts a query string into a sparse term-count vector. Query vectors
/// carry raw counts (no idf) but live in the same interned term space as
/// document vectors.
pub fn query_vector(dict: &TermDict, text: &str) -> SparseVector {
    let mut counts: HashMap<TermId, f64> = HashMap::new();
    for token in tokenize(text) {
        let term = dict.intern(&token);
        *counts.entry(term).or_insert(0.0) += 1.0;
    }
    SparseVector::from_weights(counts)
}
