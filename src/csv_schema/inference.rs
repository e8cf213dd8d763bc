use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::ToolError;

/// Widths below this map to a fixed-width `CHAR` column.
pub const CHAR_WIDTH_LIMIT: usize = 8;
/// Widths below this (and at least [`CHAR_WIDTH_LIMIT`]) map to `VARCHAR`.
pub const VARCHAR_WIDTH_LIMIT: usize = 256;

/// MySQL text column type chosen from an observed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// `CHAR (n)` for short values.
    Char(usize),
    /// `VARCHAR (n)` sized to the widest value.
    Varchar(usize),
    /// `TEXT` above the `VARCHAR` ceiling.
    Text,
}

impl ColumnType {
    /// Pick the column type for a maximum observed width.
    pub fn for_width(width: usize) -> Self {
        if width < CHAR_WIDTH_LIMIT {
            ColumnType::Char(width)
        } else if width < VARCHAR_WIDTH_LIMIT {
            ColumnType::Varchar(width)
        } else {
            ColumnType::Text
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Char(width) => write!(f, "CHAR ({width})"),
            ColumnType::Varchar(width) => write!(f, "VARCHAR ({width})"),
            ColumnType::Text => write!(f, "TEXT"),
        }
    }
}

/// A CSV column and the widest value seen in it so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    max_width: usize,
}

impl Field {
    /// New field with a width of zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_width: 0,
        }
    }

    /// Column name from the header row.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum character count observed among scanned values.
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Column type derived from [`Field::max_width`].
    pub fn column_type(&self) -> ColumnType {
        ColumnType::for_width(self.max_width)
    }

    fn observe(&mut self, value: &str) {
        self.max_width = self.max_width.max(value_width(value));
    }
}

/// Which data rows participate in the width scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FirstRowPolicy {
    /// Leave the first data row out of widths and the row count.
    ///
    /// This reproduces the historical output of the tool. A warning is logged
    /// whenever the skipped row would have widened a column.
    #[default]
    SkipFirst,
    /// Every data row contributes.
    ScanAll,
}

/// Knobs for [`infer_schema`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InferOptions {
    /// Treatment of the first data row.
    pub first_row: FirstRowPolicy,
}

/// Ordered columns with their final widths, fixed once the scan completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<Field>,
    rows_scanned: usize,
}

impl Schema {
    /// Columns in header order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Number of data rows that contributed to the widths.
    pub fn rows_scanned(&self) -> usize {
        self.rows_scanned
    }

    /// Column names in header order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(Field::name)
    }
}

/// Scan the CSV file at `path`.
pub fn infer_schema_from_path(path: &Path, options: &InferOptions) -> Result<Schema, ToolError> {
    let file = File::open(path).map_err(|source| ToolError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    infer_schema(file, path, options)
}

/// Scan CSV text from `reader`, keeping only per-column maxima.
///
/// `source` is only used to label errors.
pub fn infer_schema<R: Read>(
    reader: R,
    source: &Path,
    options: &InferOptions,
) -> Result<Schema, ToolError> {
    let csv_error = |message: String| ToolError::Csv {
        path: source.to_path_buf(),
        message,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers().map_err(|e| csv_error(e.to_string()))?;
    if headers.is_empty() {
        return Err(csv_error("file has no header row".to_string()));
    }
    let mut fields: Vec<Field> = headers.iter().map(Field::new).collect();

    let mut records = reader.records();
    let skipped = match options.first_row {
        FirstRowPolicy::SkipFirst => records
            .next()
            .transpose()
            .map_err(|e| csv_error(e.to_string()))?,
        FirstRowPolicy::ScanAll => None,
    };

    let mut rows_scanned = 0usize;
    for result in records {
        let record = result.map_err(|e| csv_error(e.to_string()))?;
        // Short rows leave trailing columns untouched; extra values are ignored.
        for (field, value) in fields.iter_mut().zip(record.iter()) {
            field.observe(value);
        }
        rows_scanned += 1;
    }

    if let Some(record) = skipped {
        warn_on_wider_skipped_row(&fields, &record);
    }

    tracing::debug!(
        columns = fields.len(),
        rows = rows_scanned,
        "scanned {}",
        source.display()
    );

    Ok(Schema {
        fields,
        rows_scanned,
    })
}

fn warn_on_wider_skipped_row(fields: &[Field], record: &StringRecord) {
    for (field, value) in fields.iter().zip(record.iter()) {
        let width = value_width(value);
        if width > field.max_width() {
            tracing::warn!(
                column = field.name(),
                skipped_width = width,
                inferred_width = field.max_width(),
                "first data row is not scanned and holds a wider value; rerun with --scan-first-row"
            );
        }
    }
}

fn value_width(value: &str) -> usize {
    value.chars().count()
}
