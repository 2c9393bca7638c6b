//! Catalog ingestion: raw CSV text in, validated [`Catalog`] out.
//!
//! Validation happens in a fixed order so users get the most actionable
//! failure first: header shape, then per-row price parsing, then per-row
//! required fields, then the zero-rows check. A failed ingest leaves the
//! caller's previous catalog untouched; the swap is the caller's job.

use thiserror::Error;

use crate::product::{Catalog, Product};

/// Columns every upload must carry in its header row.
pub const REQUIRED_COLUMNS: [&str; 5] = ["title", "description", "image_url", "price", "category"];

/// Fields that must be non-empty on every data row.
const REQUIRED_FIELDS: [&str; 2] = ["title", "category"];

/// Ingestion failure taxonomy. All variants are recoverable: the previous
/// catalog stays active and the reason is shown to the user.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IngestError {
    /// The header row lacks one or more required columns.
    #[error("missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// A data row's price did not parse as a number. `row` is 1-based.
    #[error("row {row}: price is not a number (product {title:?})")]
    InvalidPrice { row: usize, title: String },

    /// A data row left a required field empty. `row` is 1-based.
    #[error("row {row}: required field {field:?} is empty")]
    MissingField { row: usize, field: &'static str },

    /// The input parsed cleanly but produced no records.
    #[error("catalog contains no data rows")]
    EmptyCatalog,

    /// The input is not well-formed CSV (ragged rows, bad quoting).
    #[error("malformed csv: {0}")]
    Malformed(String),
}

/// Parse and validate raw tabular text into a catalog.
///
/// On success the returned records are in input order and each carries its
/// derived URL-safe `slug`.
pub fn ingest(raw_text: &str) -> Result<Catalog, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(raw_text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| IngestError::Malformed(e.to_string()))?
        .clone();

    let mut columns = [0usize; REQUIRED_COLUMNS.len()];
    let mut missing = Vec::new();
    for (slot, name) in columns.iter_mut().zip(REQUIRED_COLUMNS) {
        match headers.iter().position(|h| h == name) {
            Some(idx) => *slot = idx,
            None => missing.push(name.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns { columns: missing });
    }
    let [title_col, description_col, image_url_col, price_col, category_col] = columns;

    let mut products = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let row = i + 1;
        let record = record.map_err(|e| IngestError::Malformed(e.to_string()))?;
        let field = |col: usize| record.get(col).unwrap_or_default();

        let title = field(title_col);
        let price: f64 = field(price_col).parse().map_err(|_| IngestError::InvalidPrice {
            row,
            title: title.to_string(),
        })?;

        for (name, value) in REQUIRED_FIELDS
            .into_iter()
            .zip([title, field(category_col)])
        {
            if value.is_empty() {
                return Err(IngestError::MissingField { row, field: name });
            }
        }

        products.push(Product::new(
            title,
            field(description_col),
            field(image_url_col),
            price,
            field(category_col),
        ));
    }

    if products.is_empty() {
        return Err(IngestError::EmptyCatalog);
    }
    Ok(Catalog::new(products))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "\
title,description,image_url,price,category
Laptop,Fast laptop,http://img/laptop.png,999.99,Electronics
Desk Lamp,Warm light,http://img/lamp.png,19.50,Home & Kitchen
Gaming Headset,Surround sound,http://img/headset.png,59.00,Gaming
";

    #[test]
    fn valid_input_yields_one_record_per_data_row() {
        let catalog = ingest(VALID).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.products()[0].title, "Laptop");
        assert_eq!(catalog.products()[1].price, 19.50);
        assert_eq!(catalog.products()[2].category, "Gaming");
    }

    #[test]
    fn records_keep_input_order_and_get_slugs() {
        let catalog = ingest(VALID).unwrap();
        let titles: Vec<_> = catalog.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Laptop", "Desk Lamp", "Gaming Headset"]);
        assert_eq!(catalog.products()[1].slug, "Desk%20Lamp");
    }

    #[test]
    fn missing_columns_are_named_exactly() {
        let raw = "title,price\nLaptop,999.99\n";
        let err = ingest(raw).unwrap_err();
        match err {
            IngestError::MissingColumns { columns } => {
                assert_eq!(columns, ["description", "image_url", "category"]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn header_check_runs_before_row_checks() {
        // Price is garbage too, but the header problem must win.
        let raw = "title,description,price\nLaptop,Fast,not-a-number\n";
        let err = ingest(raw).unwrap_err();
        assert!(matches!(err, IngestError::MissingColumns { .. }));
    }

    #[test]
    fn non_numeric_price_identifies_the_row() {
        let raw = "\
title,description,image_url,price,category
Laptop,Fast,img,999.99,Electronics
Monitor,Sharp,img,cheap,Electronics
";
        let err = ingest(raw).unwrap_err();
        assert_eq!(
            err,
            IngestError::InvalidPrice {
                row: 2,
                title: "Monitor".to_string()
            }
        );
    }

    #[test]
    fn empty_required_field_identifies_row_and_field() {
        let raw = "\
title,description,image_url,price,category
Laptop,Fast,img,999.99,
";
        let err = ingest(raw).unwrap_err();
        assert_eq!(
            err,
            IngestError::MissingField {
                row: 1,
                field: "category"
            }
        );
    }

    #[test]
    fn empty_title_is_rejected() {
        let raw = "\
title,description,image_url,price,category
,Fast,img,999.99,Electronics
";
        let err = ingest(raw).unwrap_err();
        assert_eq!(
            err,
            IngestError::MissingField {
                row: 1,
                field: "title"
            }
        );
    }

    #[test]
    fn header_only_input_is_an_empty_catalog() {
        let raw = "title,description,image_url,price,category\n";
        assert_eq!(ingest(raw).unwrap_err(), IngestError::EmptyCatalog);
    }

    #[test]
    fn completely_empty_input_reports_missing_columns() {
        let err = ingest("").unwrap_err();
        match err {
            IngestError::MissingColumns { columns } => {
                assert_eq!(columns.len(), REQUIRED_COLUMNS.len());
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn ragged_row_is_malformed() {
        let raw = "\
title,description,image_url,price,category
Laptop,Fast,img,999.99,Electronics,extra-field
";
        assert!(matches!(ingest(raw).unwrap_err(), IngestError::Malformed(_)));
    }

    #[test]
    fn fields_are_trimmed_before_validation() {
        let raw = "\
title,description,image_url,price,category
  Laptop  ,Fast,img,  999.99 ,Electronics
";
        let catalog = ingest(raw).unwrap();
        assert_eq!(catalog.products()[0].title, "Laptop");
        assert_eq!(catalog.products()[0].price, 999.99);
    }
}
