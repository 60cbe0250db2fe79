//! Type mapping between MySQL column types and Go types.

use std::fmt;

/// Go types a column can be emitted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoType {
    Int32,
    Int64,
    Bool,
    String,
    Time,
    Float64,
}

impl GoType {
    /// Get the Go spelling of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            GoType::Int32 => "int32",
            GoType::Int64 => "int64",
            GoType::Bool => "bool",
            GoType::String => "string",
            GoType::Time => "time.Time",
            GoType::Float64 => "float64",
        }
    }

    /// Whether emitting this type requires `import "time"`.
    pub fn is_time(&self) -> bool {
        matches!(self, GoType::Time)
    }
}

impl fmt::Display for GoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a MySQL `DATA_TYPE` to a Go type.
///
/// The lookup is case-insensitive. Unknown types yield `None`; callers emit an
/// empty type for them rather than failing.
pub fn map_mysql_type(data_type: &str) -> Option<GoType> {
    let ty = match data_type.trim().to_ascii_lowercase().as_str() {
        "bigint" | "bigint unsigned" => GoType::Int64,
        "int" | "integer" | "tinyint" | "smallint" | "mediumint" | "int unsigned"
        | "integer unsigned" | "tinyint unsigned" | "smallint unsigned"
        | "mediumint unsigned" | "bit" => GoType::Int32,
        "bool" => GoType::Bool,
        "enum" | "set" | "varchar" | "char" | "tinytext" | "mediumtext" | "text" | "longtext"
        | "blob" | "tinyblob" | "mediumblob" | "longblob" | "binary" | "varbinary" => {
            GoType::String
        }
        "date" | "datetime" | "timestamp" | "time" => GoType::Time,
        "float" | "double" | "decimal" => GoType::Float64,
        _ => return None,
    };
    Some(ty)
}

/// Map a column using both its `DATA_TYPE` and its full `COLUMN_TYPE`.
///
/// MySQL only reports signedness in `COLUMN_TYPE` (e.g. `int(10) unsigned`),
/// so the `"<type> unsigned"` entry is tried first for unsigned columns.
pub fn map_column_type(data_type: &str, column_type: &str) -> Option<GoType> {
    if column_type.to_ascii_lowercase().contains("unsigned") {
        let unsigned = format!("{} unsigned", data_type.trim());
        if let Some(ty) = map_mysql_type(&unsigned) {
            return Some(ty);
        }
    }
    map_mysql_type(data_type)
}
