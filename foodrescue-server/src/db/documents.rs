//! Generic document helpers used by the record handlers

use mongodb::bson::{self, Bson, Document};
use serde::Serialize;

use super::store::{DbError, DocumentStore};

/// Encode `payload` and insert it into `collection_name`.
///
/// Returns the store-assigned identifier as a string.
pub async fn create_document<T>(
    store: &dyn DocumentStore,
    collection_name: &str,
    payload: &T,
) -> Result<String, DbError>
where
    T: Serialize + ?Sized,
{
    let document = bson::to_document(payload)?;
    let id = store.insert_one(collection_name, document).await?;
    tracing::debug!(collection = collection_name, %id, "document inserted");
    Ok(id)
}

/// Fetch up to `limit` documents from `collection_name` matching `filter`.
pub async fn get_documents(
    store: &dyn DocumentStore,
    collection_name: &str,
    filter: Document,
    limit: i64,
) -> Result<Vec<Document>, DbError> {
    store.find(collection_name, filter, limit).await
}

/// Render a store identifier as a plain string.
///
/// ObjectIds become their 24-char hex form.
pub fn identifier_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Convert a stored document to JSON with `_id` as a plain string.
pub fn serialize_document(mut document: Document) -> serde_json::Value {
    if let Some(id) = document.get("_id") {
        let id = identifier_string(id);
        document.insert("_id", id);
    }
    Bson::Document(document).into_relaxed_extjson()
}
