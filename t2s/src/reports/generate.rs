//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from one generate run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Tables in emission order.
    pub tables: Vec<TableSummary>,

    /// Non-fatal problems: unmapped column types, formatter failures.
    pub warnings: Vec<String>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// One generated struct.
#[derive(Debug)]
pub struct TableSummary {
    /// Table name as stored in the database.
    pub source_name: String,
    /// Go type name of the struct.
    pub type_name: String,
    /// Number of fields.
    pub columns: usize,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(Vec<PathBuf>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: PathBuf,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(paths) => self.render_written(out, paths),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, paths: &[PathBuf]) {
        if self.tables.is_empty() {
            out.preformatted("No tables matched; nothing to generate");
            return;
        }

        out.section(&format!("Structs ({})", self.tables.len()));
        for table in &self.tables {
            out.list_item(&format!(
                "{} <- {} ({} fields)",
                table.type_name, table.source_name, table.columns
            ));
        }
        out.newline();

        out.section("Written");
        for path in paths {
            out.added_item(&path.display().to_string());
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path.display().to_string());
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} structs in {} files would be generated",
            self.tables.len(),
            files.len()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    fn users() -> TableSummary {
        TableSummary {
            source_name: "t_users".to_string(),
            type_name: "Users".to_string(),
            columns: 3,
        }
    }

    #[test]
    fn test_render_written() {
        let report = GenerateReport {
            tables: vec![users()],
            warnings: vec!["t_users.geo: no Go type for 'point', field left untyped".to_string()],
            result: GenerationResult::Written(vec![PathBuf::from("model.go")]),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "warning: t_users.geo: no Go type for 'point', field left untyped",
                "Structs (1):",
                "  - Users <- t_users (3 fields)",
                "",
                "Written:",
                "  + model.go",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let report = GenerateReport {
            tables: vec![users()],
            warnings: Vec::new(),
            result: GenerationResult::Preview(vec![PreviewFile {
                path: PathBuf::from("model.go"),
                content: "package model\n".to_string(),
            }]),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines[0], "── model.go ──");
        assert_eq!(
            out.lines.last().map(String::as_str),
            Some("1 structs in 1 files would be generated")
        );
    }

    #[test]
    fn test_render_empty_schema() {
        let report = GenerateReport {
            tables: Vec::new(),
            warnings: Vec::new(),
            result: GenerationResult::Written(vec![PathBuf::from("model.go")]),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines, vec!["No tables matched; nothing to generate"]);
    }
}
