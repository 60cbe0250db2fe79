//! Go struct generation for table2struct.
//!
//! Turns the tables produced by `table2struct-schema` into Go source:
//!
//! - [`CodeBuilder`] - Fluent API for building tab-indented code
//! - [`StructEmitter`] - One `type ... struct` per table, assembled into documents
//! - [`PostFormat`] - Best-effort formatting of written files (`gofmt`)

mod code_builder;
mod emitter;
mod format;

pub use code_builder::CodeBuilder;
pub use emitter::{DEFAULT_FILE_NAME, DEFAULT_PACKAGE, EmitOptions, OutputLayout, StructEmitter};
pub use format::{FormatError, Gofmt, NoFormat, PostFormat};
