//! One-time resolution of a config into the options the pipeline runs with.

use std::path::{Path, PathBuf};

use table2struct_codegen::{DEFAULT_FILE_NAME, DEFAULT_PACKAGE, EmitOptions, OutputLayout};
use table2struct_schema::{DEFAULT_TAG_KEY, ReaderOptions};

use crate::Config;

/// Fully defaulted, immutable settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Connection string, if one is configured
    pub dsn: Option<String>,
    /// Schema reader settings
    pub reader: ReaderOptions,
    /// Struct emitter settings
    pub emit: EmitOptions,
    /// Output file layout
    pub layout: OutputLayout,
    /// Run gofmt on written files
    pub format: bool,
}

impl Config {
    /// Resolve against the process environment.
    pub fn resolve(&self) -> Resolved {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve using `env` to look up `[database].dsn_env`.
    pub fn resolve_with(&self, env: impl Fn(&str) -> Option<String>) -> Resolved {
        let dsn = self
            .database
            .dsn
            .clone()
            .or_else(|| self.database.dsn_env.as_deref().and_then(&env));

        let reader = ReaderOptions {
            table: self.database.table.clone(),
            prefix: self.database.prefix.clone().unwrap_or_default(),
            uc_first_only: self.naming.uc_first_only,
            remove_tag_if_uc_first: self.tags.remove_if_uc_first,
            tag_to_lower: self.tags.to_lower,
            tag_key: self
                .tags
                .key
                .clone()
                .unwrap_or_else(|| DEFAULT_TAG_KEY.to_string()),
            json_tag: self.tags.json,
            json_camel_case: self.tags.json_camel_case,
        };

        let emit = EmitOptions {
            package: self
                .output
                .package
                .clone()
                .unwrap_or_else(|| DEFAULT_PACKAGE.to_string()),
            real_name_method: self.output.real_name_method.clone(),
            big_camel_case: self.naming.table_big_camel_case,
        };

        Resolved {
            dsn,
            reader,
            emit,
            layout: self.layout(),
            format: self.output.format,
        }
    }

    fn layout(&self) -> OutputLayout {
        let path = self.output.path.as_deref();
        if self.output.separate_files {
            OutputLayout::PerTable(path.map_or_else(|| PathBuf::from("."), output_dir))
        } else {
            OutputLayout::Single(
                path.map_or_else(|| PathBuf::from(DEFAULT_FILE_NAME), Path::to_path_buf),
            )
        }
    }
}

/// A `.go` path names a file whose directory receives the per-table files;
/// anything else is taken to be the directory itself.
fn output_dir(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == "go") {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let resolved = Config::default().resolve_with(no_env);

        assert_eq!(resolved.dsn, None);
        assert_eq!(resolved.reader.tag_key, "orm");
        assert_eq!(resolved.reader.prefix, "");
        assert_eq!(resolved.emit.package, "model");
        assert_eq!(resolved.emit.real_name_method, None);
        assert_eq!(
            resolved.layout,
            OutputLayout::Single(PathBuf::from("model.go"))
        );
        assert!(resolved.format);
    }

    #[test]
    fn test_dsn_from_env() {
        let mut config = Config::default();
        config.database.dsn_env = Some("SHOP_DSN".to_string());

        let resolved = config.resolve_with(|name| {
            (name == "SHOP_DSN").then(|| "mysql://localhost/shop".to_string())
        });

        assert_eq!(resolved.dsn.as_deref(), Some("mysql://localhost/shop"));
    }

    #[test]
    fn test_explicit_dsn_wins_over_env() {
        let mut config = Config::default();
        config.database.dsn = Some("mysql://explicit/db".to_string());
        config.database.dsn_env = Some("SHOP_DSN".to_string());

        let resolved = config.resolve_with(|_| Some("mysql://env/db".to_string()));

        assert_eq!(resolved.dsn.as_deref(), Some("mysql://explicit/db"));
    }

    #[test]
    fn test_separate_files_layout() {
        let mut config = Config::default();
        config.output.separate_files = true;
        assert_eq!(
            config.resolve_with(no_env).layout,
            OutputLayout::PerTable(PathBuf::from("."))
        );

        config.output.path = Some(PathBuf::from("internal/model/model.go"));
        assert_eq!(
            config.resolve_with(no_env).layout,
            OutputLayout::PerTable(PathBuf::from("internal/model"))
        );

        config.output.path = Some(PathBuf::from("internal/entity"));
        assert_eq!(
            config.resolve_with(no_env).layout,
            OutputLayout::PerTable(PathBuf::from("internal/entity"))
        );
    }

    #[test]
    fn test_options_carry_over() {
        let mut config = Config::default();
        config.database.table = Some("users".to_string());
        config.database.prefix = Some("t_".to_string());
        config.tags.key = Some("gorm".to_string());
        config.tags.json = true;
        config.naming.table_big_camel_case = true;
        config.output.real_name_method = Some("TableName".to_string());

        let resolved = config.resolve_with(no_env);

        assert_eq!(resolved.reader.table_filter().as_deref(), Some("t_users"));
        assert_eq!(resolved.reader.tag_key, "gorm");
        assert!(resolved.reader.json_tag);
        assert!(resolved.emit.big_camel_case);
        assert_eq!(resolved.emit.real_name_method.as_deref(), Some("TableName"));
    }
}
