use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use shoplite_catalog::IngestError;

/// Map an ingestion failure to a user-visible 422 with a stable error code.
/// The previous catalog stays active; nothing here is fatal.
pub fn ingest_error_to_response(err: &IngestError) -> axum::response::Response {
    let code = match err {
        IngestError::MissingColumns { .. } => "missing_columns",
        IngestError::InvalidPrice { .. } => "invalid_price",
        IngestError::MissingField { .. } => "missing_field",
        IngestError::EmptyCatalog => "empty_catalog",
        IngestError::Malformed(_) => "malformed_csv",
    };
    json_error(StatusCode::UNPROCESSABLE_ENTITY, code, err.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
