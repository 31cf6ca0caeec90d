//! Document store trait and error type

use async_trait::async_trait;
use mongodb::bson::{self, Document};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// No store handle was configured at startup
    #[error("database not available")]
    Unavailable,

    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    #[error("failed to encode document: {0}")]
    Encode(#[from] bson::ser::Error),
}

/// Trait for document storage (testable)
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert one document, returning the assigned identifier as a string.
    async fn insert_one(&self, collection: &str, document: Document) -> Result<String, DbError>;

    /// Find up to `limit` documents matching `filter`. An empty filter matches all.
    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, DbError>;

    async fn list_collection_names(&self) -> Result<Vec<String>, DbError>;

    /// Release connection resources. Called once after the server stops.
    async fn shutdown(&self) {}
}
