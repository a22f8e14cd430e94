//! Table binding configuration (pure data).

/// Default table name, overridable via `LINGUALOG_TABLE_NAME`.
pub const DEFAULT_TABLE_NAME: &str = "lingualog";
/// Default partition key attribute, matching the shared record schema.
pub const DEFAULT_PARTITION_KEY: &str = "username";
/// Default sort key attribute, matching the shared record schema.
pub const DEFAULT_SORT_KEY: &str = "requestId";

/// Names binding a repository to one table and one partition/sort key pair.
///
/// Set once at construction; the repository holds no other state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    pub table_name: String,
    pub partition_key: String,
    pub sort_key: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            partition_key: DEFAULT_PARTITION_KEY.to_string(),
            sort_key: DEFAULT_SORT_KEY.to_string(),
        }
    }
}

impl TableOptions {
    /// Creates options with the given table name and the default key names.
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Self::default()
        }
    }

    /// Sets the partition key attribute name.
    pub fn with_partition_key(mut self, name: impl Into<String>) -> Self {
        self.partition_key = name.into();
        self
    }

    /// Sets the sort key attribute name.
    pub fn with_sort_key(mut self, name: impl Into<String>) -> Self {
        self.sort_key = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key_names() {
        let options = TableOptions::default();
        assert_eq!(options.table_name, "lingualog");
        assert_eq!(options.partition_key, "username");
        assert_eq!(options.sort_key, "requestId");
    }

    #[test]
    fn test_custom_key_names() {
        let options = TableOptions::new("translations")
            .with_partition_key("owner")
            .with_sort_key("id");

        assert_eq!(options.table_name, "translations");
        assert_eq!(options.partition_key, "owner");
        assert_eq!(options.sort_key, "id");
    }
}
