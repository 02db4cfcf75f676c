use crate::search::types::{BiasRating, Document};
use chrono::{NaiveDate, NaiveTime};

/// A parsed structured filter. The set is closed; conditions compose with
/// logical AND when several appear in one block.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Author set intersects the named authors.
    WrittenBy(Vec<String>),
    /// Publish date strictly before the given day (exclusive).
    WrittenBefore(NaiveDate),
    /// Publish date strictly after the given day's midnight (exclusive).
    WrittenAfter(NaiveDate),
    /// Exact source-name equality.
    PublishedBy(String),
    /// Exact bias-rating equality.
    HavingBias(BiasRating),
    /// No-op; matches every document.
    Null,
}

impl Condition {
    /// Narrowing predicate. Documents without a publish date fail both date
    /// bounds.
    pub fn matches(&self, doc: &Document) -> bool {
        match self {
            Condition::WrittenBy(authors) => doc
                .authors
                .iter()
                .any(|author| authors.iter().any(|named| named == author)),
            Condition::WrittenBefore(date) => {
                let bound = date.and_time(NaiveTime::MIN);
                doc.publish_date.map(|d| d < bound).unwrap_or(false)
            }
            Condition::WrittenAfter(date) => {
                let bound = date.and_time(NaiveTime::MIN);
                doc.publish_date.map(|d| d > bound).unwrap_or(false)
            }
            Condition::PublishedBy(source) => doc.publisher.as_deref() == Some(source.as_str()),
            Condition::HavingBias(rating) => doc.bias_rating == Some(*rating),
            Condition::Null => true,
        }
    }
}

/// AND-composition over a condition list.
pub fn matches_all(conditions: &[Condition], doc: &Document) -> bool {
    conditions.iter().all(|condition| condition.matches(doc))
}
