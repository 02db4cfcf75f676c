use crate::search::types::Document;
use std::collections::HashMap;

/// Read-only document store keyed by `doc_id`.
///
/// Built once behind the ingestion barrier; no writes happen after
/// construction, so lookups need no locking. Iteration follows ingest order,
/// which is the canonical candidate order the ranking engine's tie-breaking
/// and threshold paths depend on.
pub struct DocumentStore {
    docs: HashMap<u64, Document>,
    order: Vec<u64>,
}

impl DocumentStore {
    pub fn from_documents(documents: Vec<Document>) -> Self {
        let order: Vec<u64> = documents.iter().map(|doc| doc.doc_id).collect();
        let docs = documents.into_iter().map(|doc| (doc.doc_id, doc)).collect();
        Self { docs, order }
    }

    pub fn get(&self, doc_id: u64) -> Option<&Document> {
        self.docs.get(&doc_id)
    }

    pub fn contains(&self, doc_id: u64) -> bool {
        self.docs.contains_key(&doc_id)
    }

    /// Documents in ingest order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.order.iter().filter_map(|id| self.docs.get(id))
    }

    pub fn doc_ids(&self) -> &[u64] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
