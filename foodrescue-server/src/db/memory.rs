//! In-process document store
//!
//! Mirrors the parts of MongoDB the API relies on: ObjectId assignment,
//! insertion-order reads, top-level equality filters and a result cap.

use std::collections::BTreeMap;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use tokio::sync::RwLock;

use super::documents::identifier_string;
use super::store::{DbError, DocumentStore};

/// Document store held in memory, one vector per collection
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<BTreeMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents stored in `collection`.
    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, value)| document.get(key) == Some(value))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(&self, collection: &str, document: Document) -> Result<String, DbError> {
        let id = document
            .get("_id")
            .cloned()
            .unwrap_or_else(|| Bson::ObjectId(ObjectId::new()));

        // _id always leads, as it does in MongoDB
        let mut stored = Document::new();
        stored.insert("_id", id.clone());
        for (key, value) in document {
            if key != "_id" {
                stored.insert(key, value);
            }
        }

        self.collections
            .write()
            .await
            .entry(collection.to_owned())
            .or_default()
            .push(stored);

        Ok(identifier_string(&id))
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, DbError> {
        let collections = self.collections.read().await;
        let Some(documents) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        // MongoDB treats 0 as "no limit" and a negative limit as its absolute value
        let cap = match limit.unsigned_abs() {
            0 => usize::MAX,
            n => usize::try_from(n).unwrap_or(usize::MAX),
        };

        Ok(documents
            .iter()
            .filter(|doc| matches(doc, &filter))
            .take(cap)
            .cloned()
            .collect())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, DbError> {
        Ok(self.collections.read().await.keys().cloned().collect())
    }
}
