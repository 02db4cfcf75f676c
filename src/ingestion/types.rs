use crate::search::types::NewsSource;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A scraped article as produced by the external crawling job and loaded
/// from the corpus file. The body text is carried through but does not take
/// part in vectorization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawArticle {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub text: String,
    pub url: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub publish_date: Option<NaiveDateTime>,
    pub source: NewsSource,
}
