use std::sync::Arc;

use axum::{
    Json, Router, extract::Extension, http::StatusCode, response::IntoResponse, routing::post,
};

use shoplite_audit::ActionKind;

use crate::app::{dto, errors};
use crate::state::AppState;

pub fn router() -> Router {
    Router::new()
        .route("/click", post(log_click))
        .route("/cart", post(log_add_to_cart))
}

pub async fn log_click(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<dto::EventRequest>,
) -> axum::response::Response {
    record_product_event(&state, ActionKind::ProductClicked, &body)
}

pub async fn log_add_to_cart(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<dto::EventRequest>,
) -> axum::response::Response {
    record_product_event(&state, ActionKind::AddedToCart, &body)
}

fn record_product_event(
    state: &AppState,
    kind: ActionKind,
    body: &dto::EventRequest,
) -> axum::response::Response {
    let title = body
        .product_title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());

    match title {
        Some(title) => {
            state
                .audit
                .record(kind, Some(title), body.profile.as_deref(), None);
            (
                StatusCode::OK,
                Json(serde_json::json!({ "status": "success" })),
            )
                .into_response()
        }
        None => errors::json_error(StatusCode::BAD_REQUEST, "missing_title", "product title missing"),
    }
}
