use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use crate::state::AppState;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Known profile identifiers, for the front end's profile picker.
pub async fn profiles(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "profiles": state.profiles.ids().collect::<Vec<_>>(),
    }))
}
