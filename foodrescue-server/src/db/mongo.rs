//! MongoDB-backed document store
//!
//! The driver pools connections internally and connects lazily, so
//! `connect` only parses the connection string and selects the database.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::Document;
use mongodb::{Client, Database};

use super::documents::identifier_string;
use super::store::{DbError, DocumentStore};

/// Store handle over a single MongoDB database
#[derive(Debug, Clone)]
pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    /// Build a client for `url` and select `database_name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection string is invalid.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = MongoStore::connect("mongodb://localhost:27017", "foodrescue").await?;
    /// ```
    pub async fn connect(url: &str, database_name: &str) -> Result<Self, DbError> {
        let client = Client::with_uri_str(url).await?;
        let database = client.database(database_name);
        Ok(Self { client, database })
    }

    pub fn database_name(&self) -> &str {
        self.database.name()
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_one(&self, collection: &str, document: Document) -> Result<String, DbError> {
        let result = self
            .database
            .collection::<Document>(collection)
            .insert_one(document)
            .await?;
        Ok(identifier_string(&result.inserted_id))
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, DbError> {
        let cursor = self
            .database
            .collection::<Document>(collection)
            .find(filter)
            .limit(limit)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, DbError> {
        Ok(self.database.list_collection_names().await?)
    }

    async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        tracing::info!(database = self.database_name(), "MongoDB client shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    // Integration tests require a real database
    // Run with: DATABASE_URL=mongodb://... cargo test -p foodrescue-server -- --ignored

    #[tokio::test]
    async fn rejects_malformed_url() {
        let err = MongoStore::connect("not-a-mongo-url", "foodrescue")
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Mongo(_)));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_and_find_roundtrip() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let store = MongoStore::connect(&url, "foodrescue_test")
            .await
            .expect("client creation failed");

        let id = store
            .insert_one("donation", doc! { "donor": "Alice", "item": "bread", "quantity": 5 })
            .await
            .expect("insert failed");
        assert_eq!(id.len(), 24);

        let docs = store
            .find("donation", doc! { "donor": "Alice" }, 100)
            .await
            .expect("find failed");
        assert!(docs
            .iter()
            .any(|d| d.get_object_id("_id").ok().map(|oid| oid.to_hex()) == Some(id.clone())));

        let names = store.list_collection_names().await.expect("list failed");
        assert!(names.iter().any(|n| n == "donation"));

        store.shutdown().await;
    }
}
