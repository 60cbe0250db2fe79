//! Post-processing of written files by an external formatter.

use std::{
    io,
    path::Path,
    process::{Command, ExitStatus},
};

use thiserror::Error;

/// A formatter run failed.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The formatter binary could not be started
    #[error("failed to run '{program}'")]
    Spawn {
        program: &'static str,
        #[source]
        source: io::Error,
    },

    /// The formatter ran but rejected the file
    #[error("'{program}' exited with {status}: {stderr}")]
    Failed {
        program: &'static str,
        status: ExitStatus,
        stderr: String,
    },
}

/// Formats a file that has already been written.
///
/// Callers treat failures as warnings: a formatter must never be able to
/// fail a run.
pub trait PostFormat {
    /// Formatter name for log output.
    fn name(&self) -> &'static str;

    /// Format the file at `path` in place.
    fn format(&self, path: &Path) -> Result<(), FormatError>;
}

/// Runs `gofmt -w <file>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gofmt;

impl PostFormat for Gofmt {
    fn name(&self) -> &'static str {
        "gofmt"
    }

    fn format(&self, path: &Path) -> Result<(), FormatError> {
        let program = self.name();
        let output = Command::new(program)
            .arg("-w")
            .arg(path)
            .output()
            .map_err(|source| FormatError::Spawn { program, source })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(FormatError::Failed {
                program,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

/// Leaves files untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFormat;

impl PostFormat for NoFormat {
    fn name(&self) -> &'static str {
        "none"
    }

    fn format(&self, _path: &Path) -> Result<(), FormatError> {
        Ok(())
    }
}
