//! Record endpoints - create and list, generic over the record type
//!
//! `router::<Donation>("/donations")` and `router::<Ngo>("/ngos")` share
//! these handlers.

use axum::{extract::State, routing::get, Json, Router};
use mongodb::bson::Document;
use serde::Serialize;

use crate::db::{create_document, get_documents, serialize_document};
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::models::Record;
use crate::state::AppState;

/// Most records returned by a list call
pub const LIST_LIMIT: i64 = 100;

/// Create response: the submitted fields plus the assigned `_id`
#[derive(Debug, Serialize)]
pub struct Created<R> {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub record: R,
}

/// POST - insert one record
async fn create_record<R: Record>(
    State(state): State<AppState>,
    ValidJson(record): ValidJson<R>,
) -> Result<Json<Created<R>>, ApiError> {
    let id = create_document(state.store()?, R::COLLECTION, &record).await?;
    Ok(Json(Created { id, record }))
}

/// GET - up to `LIST_LIMIT` stored records, `_id` as a string
async fn list_records<R: Record>(
    State(state): State<AppState>,
) -> Result<Json<Vec<serde_json::Value>>, ApiError> {
    let documents =
        get_documents(state.store()?, R::COLLECTION, Document::new(), LIST_LIMIT).await?;
    Ok(Json(documents.into_iter().map(serialize_document).collect()))
}

/// Create and list routes for `R` at `path`
pub fn router<R: Record>(path: &str) -> Router<AppState> {
    Router::new().route(path, get(list_records::<R>).post(create_record::<R>))
}
