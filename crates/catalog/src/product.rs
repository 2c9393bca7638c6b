//! Product records and the catalog snapshot they live in.

use serde::{Deserialize, Serialize};

/// A single catalog record. Immutable once ingested; a new upload replaces
/// the whole catalog rather than editing records in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display key, unique within a catalog by convention (not enforced).
    pub title: String,
    pub description: String,
    /// Opaque; the front end dereferences it, we never do.
    pub image_url: String,
    pub price: f64,
    pub category: String,
    /// URL-safe encoding of `title`, derived at ingest time and used to build
    /// detail-page links.
    pub slug: String,
}

impl Product {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        let title = title.into();
        let slug = urlencoding::encode(&title).into_owned();
        Self {
            title,
            description: description.into(),
            image_url: image_url.into(),
            price,
            category: category.into(),
            slug,
        }
    }
}

/// The active ordered set of product records.
///
/// A catalog is an immutable snapshot: callers holding one never observe a
/// concurrent upload. The api layer swaps whole `Arc<Catalog>` values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_is_url_safe_encoding_of_title() {
        let p = Product::new("Desk Lamp & Shade", "", "", 19.99, "Home & Kitchen");
        assert_eq!(p.slug, "Desk%20Lamp%20%26%20Shade");
    }

    #[test]
    fn slug_of_plain_title_is_unchanged() {
        let p = Product::new("Keyboard", "", "", 49.0, "Electronics");
        assert_eq!(p.slug, "Keyboard");
    }
}
