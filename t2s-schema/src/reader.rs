//! Row normalization: raw metadata rows in, grouped tables out.

use indexmap::IndexMap;
use table2struct_core::{
    GoType, map_column_type, strip_prefix, to_field_name, to_small_camel_case,
};
use tracing::{debug, warn};

use crate::{Column, ColumnRow, Error, ReaderOptions, Result, SchemaSource, Table, Tag};

/// Tables keyed by prefix-stripped name, in first-seen order.
pub type Tables = IndexMap<String, Table>;

/// Appended to `json` tag values of 64-bit integer columns.
const JSON_STRING_HINT: &str = ",string";

/// Fetch metadata from `source` and normalize it into tables.
///
/// Any source failure aborts the whole read; no partial map is returned.
pub async fn read_schema<S>(source: &S, opts: &ReaderOptions) -> Result<Tables>
where
    S: SchemaSource + ?Sized,
{
    let filter = opts.table_filter();
    let rows = source.fetch_columns(filter.as_deref()).await?;
    build_tables(rows, opts)
}

/// Group rows into tables, preserving row order within and across tables.
///
/// Fails if two source tables end up with the same name once the prefix is
/// stripped (e.g. `t_users` and `users`).
pub fn build_tables(
    rows: impl IntoIterator<Item = ColumnRow>,
    opts: &ReaderOptions,
) -> Result<Tables> {
    let mut tables = Tables::new();

    for row in rows {
        let key = strip_prefix(&row.table_name, &opts.prefix);
        let column = build_column(&row, opts);

        let table = tables.entry(key).or_insert_with_key(|key| {
            debug!(table = %row.table_name, "Reading table");
            Table {
                source_name: row.table_name.clone(),
                name: key.clone(),
                comment: row.table_comment.clone(),
                columns: Vec::new(),
            }
        });
        if table.source_name != row.table_name {
            return Err(Error::NameCollision {
                name: table.name.clone(),
                first: table.source_name.clone(),
                second: row.table_name,
            });
        }
        table.columns.push(column);
    }

    Ok(tables)
}

fn build_column(row: &ColumnRow, opts: &ReaderOptions) -> Column {
    let field_name = to_field_name(&row.column_name, opts.uc_first_only);
    let go_type = map_column_type(&row.data_type, &row.column_type);
    if go_type.is_none() {
        warn!(
            table = %row.table_name,
            column = %row.column_name,
            data_type = %row.data_type,
            "Unmapped column type, field will have no type"
        );
    }

    let starts_upper = field_name.chars().next().is_some_and(char::is_uppercase);
    let value = if opts.remove_tag_if_uc_first && starts_upper {
        Tag::OMIT.to_string()
    } else if opts.tag_to_lower {
        row.column_name.to_lowercase()
    } else {
        row.column_name.clone()
    };

    let json = opts.json_tag.then(|| {
        let mut json = if opts.json_camel_case {
            to_small_camel_case(&value)
        } else {
            value.clone()
        };
        if go_type == Some(GoType::Int64) {
            json.push_str(JSON_STRING_HINT);
        }
        json
    });

    Column {
        source_name: row.column_name.clone(),
        field_name,
        source_type: row.data_type.clone(),
        go_type,
        comment: row.column_comment.clone(),
        tag: Tag {
            key: opts.tag_key.clone(),
            value,
            json,
        },
        nullable: row.nullable,
    }
}
