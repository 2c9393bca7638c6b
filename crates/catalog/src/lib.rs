//! Catalog domain module.
//!
//! This crate contains the storefront's catalog logic, implemented purely as
//! deterministic domain code (no IO, no HTTP, no storage): the product record
//! model, CSV ingestion with its validation taxonomy, profile preference
//! configuration, and the query/ranking engine.

pub mod ingest;
pub mod product;
pub mod profile;
pub mod query;

pub use ingest::{IngestError, REQUIRED_COLUMNS, ingest};
pub use product::{Catalog, Product};
pub use profile::ProfileBook;
pub use query::{ProductDetail, SIMILAR_LIMIT, find_by_title, query};
