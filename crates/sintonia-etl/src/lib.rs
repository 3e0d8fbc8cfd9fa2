//! Catalog ETL for sintonia.
//!
//! Loads cleaned CSV chart exports into in-memory catalogs and carries
//! the tool configuration. The upstream data-cleaning scripts coerce
//! raw exports to consistently quoted text; this crate re-parses the
//! numeric columns and keeps unparsable fields as NaN.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod load;

pub use config::Config;
pub use load::{inspect_catalog, load_catalog, ColumnReport, InspectReport, REQUIRED_COLUMNS};
