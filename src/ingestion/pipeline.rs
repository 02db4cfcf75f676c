use super::types::RawArticle;
use crate::search::tfidf::{
    compute_doc_freqs, compute_tfidf, ArticleTokens, FieldWeights,
};
use crate::search::types::Document;
use crate::storage::memory::DocumentStore;
use crate::vector::sparse::SparseVector;
use crate::vector::term::TermDict;
use anyhow::Result;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Reads the corpus file: a JSON array of scraped articles.
pub fn load_articles(path: &Path) -> Result<Vec<RawArticle>> {
    let file = std::fs::File::open(path)?;
    let articles: Vec<RawArticle> = serde_json::from_reader(std::io::BufReader::new(file))?;
    Ok(articles)
}

/// Drops repeated scrapes of the same story, keyed by (title, source name).
/// The first occurrence wins.
pub fn remove_repeat_articles(articles: Vec<RawArticle>) -> Vec<RawArticle> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    articles
        .into_iter()
        .filter(|article| seen.insert((article.title.clone(), article.source.name.clone())))
        .collect()
}

/// Vectorizes the corpus and builds the document store.
///
/// Document frequency is a reduction over the whole corpus and runs first;
/// per-document TF-IDF is independent per document and fans out across
/// `workers` tasks. The `JoinSet` drain is the completion barrier: the store
/// does not exist until every worker has finished.
pub async fn build_document_store(
    articles: Vec<RawArticle>,
    dict: &TermDict,
    weights: FieldWeights,
    workers: usize,
) -> Result<DocumentStore> {
    let tokens: Vec<ArticleTokens> = articles
        .iter()
        .map(|article| ArticleTokens::from_article(dict, article))
        .collect();
    let doc_freqs = Arc::new(compute_doc_freqs(&tokens));
    let tokens = Arc::new(tokens);

    let total = articles.len();
    let workers = workers.max(1);
    let chunk = total.div_ceil(workers);

    let mut join_set = JoinSet::new();
    for worker in 0..workers {
        let start = worker * chunk;
        let end = ((worker + 1) * chunk).min(total);
        if start >= end {
            break;
        }
        let tokens = tokens.clone();
        let doc_freqs = doc_freqs.clone();
        join_set.spawn(async move {
            (start..end)
                .map(|i| (i, compute_tfidf(&tokens[i], &doc_freqs, &weights)))
                .collect::<Vec<(usize, SparseVector)>>()
        });
    }

    let mut vectors: Vec<SparseVector> = vec![SparseVector::new(); total];
    while let Some(result) = join_set.join_next().await {
        for (index, vector) in result? {
            vectors[index] = vector;
        }
    }

    tracing::info!("Vectorized {} articles", total);

    let documents: Vec<Document> = articles
        .into_iter()
        .zip(vectors)
        .enumerate()
        .map(|(index, (article, vector))| Document {
            doc_id: index as u64,
            title: article.title,
            summary: article.summary,
            link: article.url,
            authors: article.authors,
            vector,
            publish_date: article.publish_date,
            publisher: Some(article.source.name),
            bias_rating: Some(article.source.bias_rating),
            site_link: Some(article.source.homepage_url),
        })
        .collect();

    Ok(DocumentStore::from_documents(documents))
}
