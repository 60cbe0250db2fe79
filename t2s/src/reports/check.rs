//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from config validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Resolved settings worth showing, as label/value pairs.
    pub settings: Vec<(&'static str, String)>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        for (key, value) in &self.settings {
            out.key_value_indented(key, value);
        }
    }
}
