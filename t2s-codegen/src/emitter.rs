//! Rendering of tables into Go struct definitions.

use std::path::{Path, PathBuf};

use table2struct_core::{File, to_type_name};
use table2struct_schema::{Column, Table, Tables};
use tracing::debug;

use crate::CodeBuilder;

/// Package name used when none is configured.
pub const DEFAULT_PACKAGE: &str = "model";

/// Output file used when none is configured.
pub const DEFAULT_FILE_NAME: &str = "model.go";

const TIME_IMPORT: &str = "import \"time\"";

/// Settings for the emitted Go source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Go package name.
    pub package: String,
    /// Name of a method returning the real table name, if any.
    pub real_name_method: Option<String>,
    /// Big-camel-case struct names (`user_roles` -> `UserRoles`).
    pub big_camel_case: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            real_name_method: None,
            big_camel_case: false,
        }
    }
}

/// Where generated documents go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLayout {
    /// Every struct in one file.
    Single(PathBuf),
    /// One `<table>.go` file per table inside a directory.
    PerTable(PathBuf),
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::Single(PathBuf::from(DEFAULT_FILE_NAME))
    }
}

/// Renders tables into Go source documents.
#[derive(Debug, Clone, Copy)]
pub struct StructEmitter<'a> {
    opts: &'a EmitOptions,
}

impl<'a> StructEmitter<'a> {
    pub fn new(opts: &'a EmitOptions) -> Self {
        Self { opts }
    }

    /// Go type name for a table.
    pub fn type_name(&self, table: &Table) -> String {
        to_type_name(&table.name, self.opts.big_camel_case)
    }

    /// Render one struct definition, followed by its real-name method when
    /// one is configured.
    pub fn render_table(&self, table: &Table) -> String {
        let type_name = self.type_name(table);
        debug!(table = %table.source_name, type_name = %type_name, "Rendering struct");

        let builder = CodeBuilder::new()
            .when(!table.comment.is_empty(), |b| {
                b.comment(&single_line(&table.comment))
            })
            .block(&format!("type {} struct {{", type_name), "}", |b| {
                b.each(&table.columns, |b, column| b.line(&field_line(column)))
            });

        match &self.opts.real_name_method {
            Some(method) => builder
                .blank()
                .block(
                    &format!("func (*{}) {}() string {{", type_name, method),
                    "}",
                    |b| b.line(&format!("return \"{}\"", go_string(&table.source_name))),
                )
                .build(),
            None => builder.build(),
        }
    }

    /// Render a complete document: package clause, a single time import if
    /// any column needs it, then every table in iteration order.
    pub fn render_document<'t, I>(&self, tables: I) -> String
    where
        I: IntoIterator<Item = &'t Table>,
    {
        let tables: Vec<&Table> = tables.into_iter().collect();
        let uses_time = tables.iter().any(|t| t.uses_time());

        let mut document = CodeBuilder::new()
            .line(&format!("package {}", self.opts.package))
            .blank()
            .when(uses_time, |b| b.line(TIME_IMPORT).blank())
            .build();

        let definitions: Vec<String> = tables.iter().map(|t| self.render_table(t)).collect();
        document.push_str(&definitions.join("\n"));
        document
    }

    /// Plan the files to write for `tables` under the given layout.
    pub fn files(&self, tables: &Tables, layout: &OutputLayout) -> Vec<File> {
        match layout {
            OutputLayout::Single(path) => {
                vec![File::new(path, self.render_document(tables.values()))]
            }
            OutputLayout::PerTable(dir) => tables
                .values()
                .map(|table| {
                    File::new(
                        per_table_path(dir, table),
                        self.render_document([table]),
                    )
                })
                .collect(),
        }
    }
}

fn per_table_path(dir: &Path, table: &Table) -> PathBuf {
    dir.join(format!("{}.go", table.name))
}

fn field_line(column: &Column) -> String {
    let mut line = format!("{} {} {}", column.field_name, column.type_name(), column.tag);
    if !column.comment.is_empty() {
        line.push_str(" // ");
        line.push_str(&single_line(&column.comment));
    }
    line
}

/// Escape `text` for use inside a Go interpreted string literal.
fn go_string(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Comments end at a newline in Go, so fold multi-line comments.
fn single_line(text: &str) -> String {
    text.split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use table2struct_core::GoType;
    use table2struct_schema::Tag;

    use super::*;

    fn column(name: &str, field: &str, go_type: Option<GoType>, comment: &str) -> Column {
        Column {
            source_name: name.to_string(),
            field_name: field.to_string(),
            source_type: String::new(),
            go_type,
            comment: comment.to_string(),
            tag: Tag {
                key: "orm".to_string(),
                value: name.to_string(),
                json: None,
            },
            nullable: false,
        }
    }

    fn users() -> Table {
        Table {
            source_name: "t_user_accounts".to_string(),
            name: "user_accounts".to_string(),
            comment: String::new(),
            columns: vec![column("id", "Id", Some(GoType::Int32), "")],
        }
    }

    #[test]
    fn test_type_name() {
        let plain = EmitOptions::default();
        let camel = EmitOptions {
            big_camel_case: true,
            ..Default::default()
        };

        assert_eq!(StructEmitter::new(&plain).type_name(&users()), "User_accounts");
        assert_eq!(StructEmitter::new(&camel).type_name(&users()), "UserAccounts");
    }

    #[test]
    fn test_field_line() {
        let line = field_line(&column("id", "Id", Some(GoType::Int64), "primary key"));
        assert_eq!(line, "Id int64 `orm:\"id\"` // primary key");

        let line = field_line(&column("data", "Data", None, ""));
        assert_eq!(line, "Data  `orm:\"data\"`");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("first\nsecond"), "first second");
        assert_eq!(single_line("a\r\nb"), "a b");
        assert_eq!(single_line("plain"), "plain");
    }

    #[test]
    fn test_render_table_without_method() {
        let opts = EmitOptions::default();
        let code = StructEmitter::new(&opts).render_table(&users());
        assert_eq!(
            code,
            "type User_accounts struct {\n\tId int32 `orm:\"id\"`\n}\n"
        );
    }

    #[test]
    fn test_real_name_method_returns_source_name() {
        let opts = EmitOptions {
            real_name_method: Some("TableName".to_string()),
            big_camel_case: true,
            ..Default::default()
        };
        let code = StructEmitter::new(&opts).render_table(&users());

        assert!(code.contains("func (*UserAccounts) TableName() string {\n"));
        assert!(code.contains("\treturn \"t_user_accounts\"\n"));
    }

    #[test]
    fn test_real_name_is_escaped() {
        let table = Table {
            source_name: r#"odd"name\x"#.to_string(),
            ..users()
        };
        let opts = EmitOptions {
            real_name_method: Some("TableName".to_string()),
            ..Default::default()
        };
        let code = StructEmitter::new(&opts).render_table(&table);

        assert!(code.contains(r#"return "odd\"name\\x""#));
    }

    #[test]
    fn test_table_comment_header() {
        let table = Table {
            comment: "user accounts".to_string(),
            ..users()
        };
        let opts = EmitOptions::default();
        let code = StructEmitter::new(&opts).render_table(&table);
        assert!(code.starts_with("// user accounts\ntype User_accounts struct {\n"));
    }

    #[test]
    fn test_per_table_paths() {
        let opts = EmitOptions::default();
        let mut tables = Tables::new();
        tables.insert("user_accounts".to_string(), users());

        let files = StructEmitter::new(&opts)
            .files(&tables, &OutputLayout::PerTable(PathBuf::from("out")));

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path(), Path::new("out/user_accounts.go"));
        assert!(files[0].content().starts_with("package model\n\n"));
    }
}
