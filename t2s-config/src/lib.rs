// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Configuration for table2struct.
//!
//! A `t2s.toml` file is parsed into a [`Config`], validated, and then
//! resolved exactly once into the immutable option sets consumed by the
//! schema reader and the struct emitter.

mod config;
mod error;
mod file;
mod parse;
mod resolve;
mod template;
mod validate;

pub use config::{Config, DatabaseConfig, NamingConfig, OutputConfig, TagConfig};
pub use error::{Error, Result, SourceContext};
pub use file::ConfigFile;
pub use resolve::Resolved;
pub use template::STARTER;

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "t2s.toml";
