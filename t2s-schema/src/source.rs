//! Where column metadata comes from.

use async_trait::async_trait;

use crate::Result;

/// One row of column metadata, as reported by the database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnRow {
    pub table_name: String,
    pub table_comment: String,
    pub column_name: String,
    /// Bare type name (`DATA_TYPE`), e.g. `int`.
    pub data_type: String,
    /// Full type declaration (`COLUMN_TYPE`), e.g. `int(10) unsigned`.
    pub column_type: String,
    pub nullable: bool,
    pub column_comment: String,
}

/// A database that can describe its own columns.
///
/// Implementations must return rows ordered by table name, then by column
/// ordinal position.
#[async_trait]
pub trait SchemaSource: Send + Sync {
    /// Fetch column metadata, optionally for a single table.
    async fn fetch_columns(&self, table: Option<&str>) -> Result<Vec<ColumnRow>>;
}
