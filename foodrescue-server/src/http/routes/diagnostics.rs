//! Diagnostic endpoint - store availability at a glance
//!
//! GET /test never fails. Store problems are reported inside a 200 body.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Most collection names included in a report
pub const MAX_COLLECTIONS: usize = 10;

/// Error text is cut to this many characters
const ERROR_PREVIEW_CHARS: usize = 80;

const BACKEND_RUNNING: &str = "✅ Running";
const DB_NOT_AVAILABLE: &str = "❌ Not Available";
const DB_WORKING: &str = "✅ Connected & Working";
const VAR_SET: &str = "✅ Set";
const VAR_NOT_SET: &str = "❌ Not Set";
const CONNECTED: &str = "Connected";
const NOT_CONNECTED: &str = "Not Connected";

/// Diagnostic response
#[derive(Debug, Serialize)]
pub struct DiagnosticReport {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

fn presence(value: Option<&String>) -> String {
    let label = if value.is_some() { VAR_SET } else { VAR_NOT_SET };
    label.to_string()
}

fn preview(text: &str) -> String {
    text.chars().take(ERROR_PREVIEW_CHARS).collect()
}

/// Probe the store and describe what was found.
pub async fn diagnose(state: &AppState) -> DiagnosticReport {
    let mut report = DiagnosticReport {
        backend: BACKEND_RUNNING.to_string(),
        database: DB_NOT_AVAILABLE.to_string(),
        database_url: None,
        database_name: None,
        connection_status: NOT_CONNECTED.to_string(),
        collections: Vec::new(),
    };

    let Ok(store) = state.store() else {
        return report;
    };

    let database = state.database_config();
    report.database_url = Some(presence(database.url.as_ref()));
    report.database_name = Some(presence(database.name.as_ref()));

    match store.list_collection_names().await {
        Ok(mut names) => {
            names.truncate(MAX_COLLECTIONS);
            report.collections = names;
            report.database = DB_WORKING.to_string();
            report.connection_status = CONNECTED.to_string();
        }
        Err(e) => {
            tracing::warn!("Diagnostic collection listing failed: {}", e);
            report.database = format!("⚠️ Connected but Error: {}", preview(&e.to_string()));
        }
    }

    report
}

/// GET /test
async fn test_database(State(state): State<AppState>) -> Json<DiagnosticReport> {
    Json(diagnose(&state).await)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/test", get(test_database))
}
