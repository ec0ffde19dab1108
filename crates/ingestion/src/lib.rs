//! Well data ingestion library.
//!
//! Turns one well-detail page into one typed [`well_common::WellRecord`] and
//! drives the fetch → normalize → store loop over a batch of identifiers.
//!
//! # Architecture
//!
//! - [`document`] — the page as an opaque key→text lookup; all markup
//!   concerns stay behind this trait.
//! - [`page`] — the concrete ASP.NET well-detail document (span extraction).
//! - [`fields`] — typed per-field coercers; absence and parse failures are
//!   ordinary `None` values, never errors.
//! - [`normalize`] — composes the coercers field by field into a record.
//! - [`fetch`] — page retrieval with an explicit timeout.
//! - [`pipeline`] — fail-open batch ingestion over a list of identifiers.

pub mod document;
pub mod fetch;
pub mod fields;
pub mod normalize;
pub mod page;
pub mod pipeline;

// Re-exports
pub use document::SourceDocument;
pub use fetch::{HttpPageSource, WellPageSource};
pub use fields::CoordinatePolicy;
pub use normalize::Normalizer;
pub use page::WellPage;
pub use pipeline::{IngestReport, IngestionPipeline};
