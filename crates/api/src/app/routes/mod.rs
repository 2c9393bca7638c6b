use axum::{Router, routing::get};

pub mod catalog;
pub mod events;
pub mod products;
pub mod system;

/// Router for all storefront endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/profiles", get(system::profiles))
        .nest("/products", products::router())
        .nest("/catalog", catalog::router())
        .nest("/events", events::router())
}
