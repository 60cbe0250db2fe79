//! Generate operation - schema in, Go structs out.

use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

use table2struct_codegen::{PostFormat, StructEmitter};
use table2struct_config::Resolved;
use table2struct_core::File;
use table2struct_schema::{MySqlSource, SchemaSource, Tables, read_schema};
use thiserror::Error;
use tracing::{info, warn};

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, TableSummary};

/// Failures that abort a generate run. A failed run leaves no generated files behind.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no database connection configured (set [database].dsn or dsn_env, or pass --dsn)")]
    MissingConnection,

    #[error(transparent)]
    Schema(#[from] table2struct_schema::Error),

    #[error("failed to write '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Resolved configuration.
    pub resolved: &'a Resolved,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Formatter run on every written file.
    pub formatter: &'a dyn PostFormat,
}

/// Execute the generate operation.
///
/// Uses `handle` when given, otherwise opens a connection from the configured
/// DSN and closes it again before returning, on success and failure alike.
pub async fn generate(
    handle: Option<&dyn SchemaSource>,
    opts: GenerateOptions<'_>,
) -> Result<GenerateReport, GenerateError> {
    if let Some(source) = handle {
        return run(source, &opts).await;
    }

    let dsn = opts
        .resolved
        .dsn
        .as_deref()
        .ok_or(GenerateError::MissingConnection)?;
    let source = MySqlSource::connect(dsn).await?;
    let result = run(&source, &opts).await;
    source.close().await;
    result
}

async fn run(
    source: &dyn SchemaSource,
    opts: &GenerateOptions<'_>,
) -> Result<GenerateReport, GenerateError> {
    let resolved = opts.resolved;
    let tables = read_schema(source, &resolved.reader).await?;
    info!(tables = tables.len(), "Read schema");

    let mut warnings = unmapped_columns(&tables);
    let emitter = StructEmitter::new(&resolved.emit);
    let files = emitter.files(&tables, &resolved.layout);

    let result = if opts.dry_run {
        GenerationResult::Preview(
            files
                .into_iter()
                .map(|f| PreviewFile {
                    path: f.path().to_path_buf(),
                    content: f.content().to_string(),
                })
                .collect(),
        )
    } else {
        let written = write_files(&files)?;

        for path in &written {
            if let Err(e) = opts.formatter.format(path) {
                warn!(path = %path.display(), error = %e, "Formatting failed");
                warnings.push(format!(
                    "{} was not formatted: {}",
                    path.display(),
                    e
                ));
            }
        }

        GenerationResult::Written(written)
    };

    Ok(GenerateReport {
        tables: tables
            .values()
            .map(|t| TableSummary {
                source_name: t.source_name.clone(),
                type_name: emitter.type_name(t),
                columns: t.columns.len(),
            })
            .collect(),
        warnings,
        result,
    })
}

/// Write every file or none of them.
///
/// Contents are staged next to their targets and then moved into place. If
/// any step fails, targets are restored to what they held before the run.
fn write_files(files: &[File]) -> Result<Vec<PathBuf>, GenerateError> {
    let mut staged = Vec::with_capacity(files.len());
    for file in files {
        let tmp = sibling(file.path(), "t2s-tmp");
        if let Err(source) = File::new(&tmp, file.content()).write() {
            staged.push(tmp);
            discard(&staged);
            return Err(write_error(file, source));
        }
        staged.push(tmp);
    }

    let mut committed = Vec::with_capacity(files.len());
    for (file, tmp) in files.iter().zip(&staged) {
        match commit(file.path(), tmp) {
            Ok(done) => committed.push(done),
            Err(source) => {
                rollback(&committed);
                discard(&staged[committed.len()..]);
                return Err(write_error(file, source));
            }
        }
    }

    for done in &committed {
        if let Some(backup) = &done.backup {
            remove(backup);
        }
        info!(path = %done.target.display(), "Wrote file");
    }

    Ok(files.iter().map(|f| f.path().to_path_buf()).collect())
}

/// A staged file moved onto its target, with the previous target kept aside.
struct Commit<'a> {
    target: &'a Path,
    backup: Option<PathBuf>,
}

fn commit<'a>(target: &'a Path, staged: &Path) -> io::Result<Commit<'a>> {
    let backup = if target.is_file() {
        let backup = sibling(target, "t2s-bak");
        fs::rename(target, &backup)?;
        Some(backup)
    } else {
        None
    };

    if let Err(e) = fs::rename(staged, target) {
        if let Some(backup) = &backup {
            restore(backup, target);
        }
        return Err(e);
    }
    Ok(Commit { target, backup })
}

fn rollback(committed: &[Commit<'_>]) {
    for done in committed.iter().rev() {
        remove(done.target);
        if let Some(backup) = &done.backup {
            restore(backup, done.target);
        }
    }
}

fn discard(staged: &[PathBuf]) {
    for path in staged {
        if path.exists() {
            remove(path);
        }
    }
}

fn remove(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        warn!(path = %path.display(), error = %e, "Failed to remove file");
    }
}

fn restore(backup: &Path, target: &Path) {
    if let Err(e) = fs::rename(backup, target) {
        warn!(path = %target.display(), error = %e, "Failed to restore file");
    }
}

/// `model.go` -> `model.go.<suffix>`, in the same directory.
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

fn write_error(file: &File, source: io::Error) -> GenerateError {
    GenerateError::Write {
        path: file.path().to_path_buf(),
        source,
    }
}

fn unmapped_columns(tables: &Tables) -> Vec<String> {
    tables
        .values()
        .flat_map(|t| {
            t.columns
                .iter()
                .filter(|c| c.go_type.is_none())
                .map(move |c| {
                    format!(
                        "{}.{}: no Go type for '{}', field left untyped",
                        t.source_name, c.source_name, c.source_type
                    )
                })
        })
        .collect()
}
