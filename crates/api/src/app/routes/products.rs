use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use shoplite_audit::ActionKind;
use shoplite_catalog::{find_by_title, query};

use crate::app::{dto, errors};
use crate::state::AppState;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/:slug", get(get_product))
}

pub async fn list_products(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<dto::ListQuery>,
) -> axum::response::Response {
    let catalog = state.store.snapshot();
    let items = query(
        &catalog,
        &state.profiles,
        params.profile.as_deref(),
        params.q.as_deref(),
    );

    // Unknown profiles rank like no profile, and are not worth an audit line.
    let profile = params
        .profile
        .as_deref()
        .filter(|id| state.profiles.get(id).is_some());
    let term = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());

    if let Some(term) = term {
        state.audit.record(ActionKind::Search, None, profile, Some(term));
    } else if let Some(id) = profile {
        state
            .audit
            .record(ActionKind::ProductsReordered, None, Some(id), None);
    } else {
        state.audit.record(ActionKind::PageLoaded, None, None, None);
    }

    let items = items.iter().map(dto::product_to_json).collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_product(
    Extension(state): Extension<Arc<AppState>>,
    Path(slug): Path<String>,
) -> axum::response::Response {
    let catalog = state.store.snapshot();

    // Axum percent-decodes path segments, so the slug arrives as the plain title.
    match find_by_title(&catalog, &slug) {
        Some(detail) => {
            state
                .audit
                .record(ActionKind::PageLoaded, Some(&detail.product.title), None, None);
            (StatusCode::OK, Json(dto::detail_to_json(&detail))).into_response()
        }
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
    }
}
