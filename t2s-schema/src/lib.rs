//! Schema introspection for table2struct.
//!
//! Reads column metadata from a database, then normalizes every row into a
//! [`Column`] grouped under its [`Table`], ready for the struct emitter.
//!
//! # Module Organization
//!
//! - [`source`] - The [`SchemaSource`] seam and raw [`ColumnRow`]s
//! - [`mysql`] - The sqlx-backed MySQL source
//! - [`reader`] - Row normalization and grouping

mod error;
mod model;
mod options;

pub mod mysql;
pub mod reader;
pub mod source;

pub use error::{Error, Result};
pub use model::{Column, Table, Tag};
pub use mysql::MySqlSource;
pub use options::{DEFAULT_TAG_KEY, ReaderOptions};
pub use reader::{Tables, build_tables, read_schema};
pub use source::{ColumnRow, SchemaSource};
