use std::path::Path;

/// Where the generated table lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableTarget {
    table: String,
    database: Option<String>,
}

impl TableTarget {
    /// Resolve the table from CLI overrides, falling back to the file stem.
    ///
    /// Empty `table_override` or `database` strings count as "not given".
    pub fn resolve(source: &Path, table_override: &str, database: &str) -> Self {
        let table = if table_override.is_empty() {
            source
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "table".to_string())
        } else {
            table_override.to_string()
        };
        let database = (!database.is_empty()).then(|| database.to_string());
        Self { table, database }
    }

    /// Bare table name.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// `"<database>."`, or empty when no database was given.
    pub fn prefix(&self) -> String {
        self.database
            .as_deref()
            .map(|db| format!("{db}."))
            .unwrap_or_default()
    }

    /// Table name with the database prefix applied.
    pub fn qualified(&self) -> String {
        format!("{}{}", self.prefix(), self.table)
    }

    /// Name of the synthetic auto-increment key column.
    pub fn key_column(&self) -> String {
        format!("{}_id", self.table)
    }
}
