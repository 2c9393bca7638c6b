//! Query engine: search filtering, profile-based ranking, detail lookup.

use crate::product::{Catalog, Product};
use crate::profile::ProfileBook;

/// Maximum number of "similar products" returned by [`find_by_title`].
pub const SIMILAR_LIMIT: usize = 4;

/// Produce the display ordering for the catalog.
///
/// An unknown `profile_id` behaves exactly like no profile at all. A search
/// term is trimmed and lowercased; an all-whitespace term is treated as
/// absent. Without a profile the result is sorted by title ascending, which
/// makes the no-profile query idempotent.
pub fn query(
    catalog: &Catalog,
    profiles: &ProfileBook,
    profile_id: Option<&str>,
    search: Option<&str>,
) -> Vec<Product> {
    let term = search
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty());

    // Filtering keeps catalog order; ranking below decides the final order.
    let mut records: Vec<&Product> = match &term {
        Some(t) => catalog.iter().filter(|p| matches_term(p, t)).collect(),
        None => catalog.iter().collect(),
    };

    match profile_id.and_then(|id| profiles.get(id)) {
        Some(prefs) => {
            let (mut preferred, mut other): (Vec<&Product>, Vec<&Product>) =
                records.into_iter().partition(|p| prefs.contains(&p.category));
            preferred.sort_by_key(|p| (preference_rank(prefs, p), p.title.clone()));
            other.sort_by(|a, b| a.title.cmp(&b.title));
            preferred.into_iter().chain(other).cloned().collect()
        }
        None => {
            records.sort_by(|a, b| a.title.cmp(&b.title));
            records.into_iter().cloned().collect()
        }
    }
}

fn matches_term(product: &Product, term: &str) -> bool {
    product.title.to_lowercase().contains(term)
        || product.description.to_lowercase().contains(term)
}

fn preference_rank(prefs: &[String], product: &Product) -> usize {
    // Only called for preferred records, so the position always exists.
    prefs
        .iter()
        .position(|c| *c == product.category)
        .unwrap_or(usize::MAX)
}

/// A matched record plus up to [`SIMILAR_LIMIT`] same-category neighbours for
/// the detail page.
#[derive(Debug)]
pub struct ProductDetail<'a> {
    pub product: &'a Product,
    /// Same category, catalog order, the matched record excluded.
    pub similar: Vec<&'a Product>,
}

/// Exact (non-encoded) title lookup; first match wins if the catalog holds
/// duplicate titles.
pub fn find_by_title<'a>(catalog: &'a Catalog, title: &str) -> Option<ProductDetail<'a>> {
    let product = catalog.iter().find(|p| p.title == title)?;
    let similar = catalog
        .iter()
        .filter(|p| !std::ptr::eq(*p, product) && p.category == product.category)
        .take(SIMILAR_LIMIT)
        .collect();
    Some(ProductDetail { product, similar })
}
