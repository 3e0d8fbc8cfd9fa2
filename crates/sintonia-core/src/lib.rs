//! Core domain model for sintonia.
//!
//! This crate defines the song record and its audio features, the
//! ordered catalog collection, and the error taxonomy shared by the
//! engine and ETL crates.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod error;
pub mod model;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use model::{Features, Song};
