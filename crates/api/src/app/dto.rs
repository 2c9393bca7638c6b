use serde::Deserialize;

use shoplite_catalog::{Product, ProductDetail};

// -------------------------
// Request DTOs
// -------------------------

/// Query string for the product listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub profile: Option<String>,
    pub q: Option<String>,
}

/// Body for the click/cart event endpoints. Field names match what the
/// browser front end sends.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    pub product_title: Option<String>,
    pub profile: Option<String>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(p: &Product) -> serde_json::Value {
    serde_json::json!({
        "title": p.title,
        "description": p.description,
        "image_url": p.image_url,
        "price": p.price,
        "category": p.category,
        "slug": p.slug,
    })
}

pub fn detail_to_json(detail: &ProductDetail<'_>) -> serde_json::Value {
    serde_json::json!({
        "product": product_to_json(detail.product),
        "similar": detail
            .similar
            .iter()
            .map(|p| product_to_json(p))
            .collect::<Vec<_>>(),
    })
}
