//! Core utilities and types for table2struct.
//!
//! This crate provides the string transforms and the database-to-Go type
//! table shared by the schema reader and the struct emitter.

mod file;
mod naming;
mod type_mapper;

// File operations
pub use file::{File, Overwrite, WriteResult};
// String utilities
pub use naming::{
    lc_first, strip_prefix, to_big_camel_case, to_field_name, to_small_camel_case, to_type_name,
    uc_first,
};
// Type mapping
pub use type_mapper::{GoType, map_column_type, map_mysql_type};
