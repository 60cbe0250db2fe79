/// Tag key used when none is configured.
pub const DEFAULT_TAG_KEY: &str = "orm";

/// Settings that control how raw rows become [`Column`](crate::Column)s.
///
/// Built once before reading and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Only read this table (without prefix).
    pub table: Option<String>,
    /// Prefix stripped from table names.
    pub prefix: String,
    /// Lower-case everything but the first letter of each name segment.
    pub uc_first_only: bool,
    /// Use the omit sentinel as tag when the field name starts upper-case.
    pub remove_tag_if_uc_first: bool,
    /// Lower-case tag values.
    pub tag_to_lower: bool,
    /// Key of the primary tag entry.
    pub tag_key: String,
    /// Add a `json` tag entry.
    pub json_tag: bool,
    /// Small-camel-case the `json` tag value.
    pub json_camel_case: bool,
}

impl ReaderOptions {
    /// Table name to filter the metadata query on, prefix included.
    pub fn table_filter(&self) -> Option<String> {
        self.table
            .as_deref()
            .map(|table| format!("{}{}", self.prefix, table))
    }
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            table: None,
            prefix: String::new(),
            uc_first_only: false,
            remove_tag_if_uc_first: false,
            tag_to_lower: false,
            tag_key: DEFAULT_TAG_KEY.to_string(),
            json_tag: false,
            json_camel_case: false,
        }
    }
}
