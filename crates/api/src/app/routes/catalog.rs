use std::sync::Arc;

use axum::{
    Json, Router, extract::Extension, http::StatusCode, response::IntoResponse, routing::post,
};

use shoplite_audit::ActionKind;
use shoplite_catalog::ingest;

use crate::app::errors;
use crate::state::AppState;

pub fn router() -> Router {
    Router::new().route("/", post(upload_catalog))
}

/// Replace the active catalog with the uploaded CSV text.
///
/// The store pointer is swapped only after a fully successful parse; any
/// ingestion failure leaves the previous catalog active.
pub async fn upload_catalog(
    Extension(state): Extension<Arc<AppState>>,
    body: String,
) -> axum::response::Response {
    match ingest(&body) {
        Ok(catalog) => {
            let count = catalog.len();
            state.store.replace(catalog);
            state.audit.record(
                ActionKind::CatalogUploaded,
                None,
                None,
                Some(&format!("{count} products")),
            );
            (StatusCode::CREATED, Json(serde_json::json!({ "count": count }))).into_response()
        }
        Err(err) => {
            state
                .audit
                .record(ActionKind::UploadRejected, None, None, Some(&err.to_string()));
            errors::ingest_error_to_response(&err)
        }
    }
}
