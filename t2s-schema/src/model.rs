//! Normalized table and column records.
//!
//! These sit between the raw metadata rows and the struct emitter:
//!
//! ```text
//! information_schema → ColumnRow (source) → Table/Column (reader) → Go source (emitter)
//! ```

use std::fmt;

use table2struct_core::GoType;

/// A table and its columns in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Table name as it exists in the database (prefix included).
    pub source_name: String,
    /// Table name with the configured prefix removed.
    pub name: String,
    /// Table-level comment.
    pub comment: String,
    /// Columns by ascending ordinal position.
    pub columns: Vec<Column>,
}

impl Table {
    /// Whether any column needs `import "time"`.
    pub fn uses_time(&self) -> bool {
        self.columns
            .iter()
            .any(|c| c.go_type.is_some_and(|t| t.is_time()))
    }
}

/// A single column, normalized for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Raw column name.
    pub source_name: String,
    /// Go field name.
    pub field_name: String,
    /// MySQL data type the Go type was derived from.
    pub source_type: String,
    /// Mapped Go type; `None` when the data type is not in the type table.
    pub go_type: Option<GoType>,
    /// Column comment.
    pub comment: String,
    /// Struct tag annotation.
    pub tag: Tag,
    /// Whether the column accepts NULL.
    pub nullable: bool,
}

impl Column {
    /// Go type spelling, empty for unmapped types.
    pub fn type_name(&self) -> &'static str {
        self.go_type.map(|t| t.as_str()).unwrap_or_default()
    }
}

/// A Go struct tag such as `` `orm:"user_id" json:"userId"` ``.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Tag key of the primary entry (e.g., `orm`).
    pub key: String,
    /// Value of the primary entry.
    pub value: String,
    /// Value of the `json` entry, when JSON tags are enabled.
    pub json: Option<String>,
}

impl Tag {
    /// Value telling the serializer to skip the field.
    pub const OMIT: &'static str = "-";

    /// Whether the primary entry is the omit sentinel.
    pub fn is_omitted(&self) -> bool {
        self.value == Self::OMIT
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}:\"{}\"", self.key, self.value)?;
        if let Some(json) = &self.json {
            write!(f, " json:\"{}\"", json)?;
        }
        f.write_str("`")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, go_type: Option<GoType>) -> Column {
        Column {
            source_name: name.to_string(),
            field_name: name.to_string(),
            source_type: String::new(),
            go_type,
            comment: String::new(),
            tag: Tag {
                key: "orm".to_string(),
                value: name.to_string(),
                json: None,
            },
            nullable: false,
        }
    }

    #[test]
    fn test_tag_display() {
        let tag = Tag {
            key: "orm".to_string(),
            value: "user_id".to_string(),
            json: None,
        };
        assert_eq!(tag.to_string(), "`orm:\"user_id\"`");

        let tag = Tag {
            json: Some("userId,string".to_string()),
            ..tag
        };
        assert_eq!(tag.to_string(), "`orm:\"user_id\" json:\"userId,string\"`");
    }

    #[test]
    fn test_tag_omitted() {
        let tag = Tag {
            key: "gorm".to_string(),
            value: Tag::OMIT.to_string(),
            json: None,
        };
        assert!(tag.is_omitted());
        assert_eq!(tag.to_string(), "`gorm:\"-\"`");
    }

    #[test]
    fn test_uses_time() {
        let mut table = Table {
            source_name: "t_users".to_string(),
            name: "users".to_string(),
            comment: String::new(),
            columns: vec![column("id", Some(GoType::Int64)), column("raw", None)],
        };
        assert!(!table.uses_time());

        table.columns.push(column("created_at", Some(GoType::Time)));
        assert!(table.uses_time());
    }

    #[test]
    fn test_unmapped_type_name_is_empty() {
        assert_eq!(column("payload", None).type_name(), "");
        assert_eq!(column("id", Some(GoType::Int32)).type_name(), "int32");
    }
}
