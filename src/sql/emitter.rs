use std::io::IsTerminal;
use std::path::Path;

use crate::csv_schema::inference::Schema;
use crate::csv_schema::names::TableTarget;
use crate::error::ToolError;
use crate::sql::literal::quote_string;

/// How standard output is being consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// A person is reading the output; informational lines are plain text.
    Interactive,
    /// Output is piped (typically into `mysql`); every line must stay valid SQL.
    Piped,
}

impl OutputMode {
    /// Detect the mode from whether stdout is a terminal.
    pub fn for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            OutputMode::Interactive
        } else {
            OutputMode::Piped
        }
    }
}

/// Which statements to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitOptions {
    /// Emit the processed-rows notice.
    pub verbose: bool,
    /// Emit `DROP TABLE IF EXISTS`.
    pub drop: bool,
    /// Emit `CREATE TABLE`.
    pub create: bool,
    /// Emit `LOAD DATA LOCAL INFILE`.
    pub load: bool,
    /// Shape of the processed-rows notice.
    pub mode: OutputMode,
}

impl EmitOptions {
    /// Reject option sets that suppress both CREATE and LOAD.
    pub fn validate(&self) -> Result<(), ToolError> {
        if !self.create && !self.load {
            return Err(ToolError::NothingToEmit);
        }
        Ok(())
    }
}

/// Kind of a generated statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// Processed-rows notice.
    RowCount,
    /// `DROP TABLE IF EXISTS`.
    Drop,
    /// `CREATE TABLE`.
    Create,
    /// `LOAD DATA LOCAL INFILE`.
    Load,
}

/// One line of generated output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlStatement {
    /// What the statement does.
    pub kind: StatementKind,
    /// Exact text, without the terminating newline.
    pub text: String,
}

/// Generated statements in their fixed output order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementSet {
    statements: Vec<SqlStatement>,
}

impl StatementSet {
    /// Statements in output order.
    pub fn statements(&self) -> &[SqlStatement] {
        &self.statements
    }

    /// Text of the first statement of `kind`, if emitted.
    pub fn get(&self, kind: StatementKind) -> Option<&str> {
        self.statements
            .iter()
            .find(|s| s.kind == kind)
            .map(|s| s.text.as_str())
    }

    /// Full script, every statement followed by a newline.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for statement in &self.statements {
            out.push_str(&statement.text);
            out.push('\n');
        }
        out
    }

    fn push(&mut self, kind: StatementKind, text: String) {
        self.statements.push(SqlStatement { kind, text });
    }
}

/// Build the statement set for `schema` in count, drop, create, load order.
///
/// `source` is the path written into the `LOAD DATA` statement.
pub fn build_statements(
    schema: &Schema,
    target: &TableTarget,
    source: &Path,
    options: &EmitOptions,
) -> Result<StatementSet, ToolError> {
    options.validate()?;

    let mut set = StatementSet::default();
    if options.verbose {
        set.push(
            StatementKind::RowCount,
            row_count_notice(schema.rows_scanned(), options.mode),
        );
    }
    if options.drop {
        set.push(StatementKind::Drop, drop_table(target));
    }
    if options.create {
        set.push(StatementKind::Create, create_table(schema, target));
    }
    if options.load {
        set.push(StatementKind::Load, load_data(schema, target, source));
    }

    tracing::debug!(
        statements = set.statements.len(),
        table = %target.qualified(),
        "built statements"
    );
    Ok(set)
}

/// Processed-rows notice, wrapped in a `SELECT` when piped.
pub fn row_count_notice(rows: usize, mode: OutputMode) -> String {
    match mode {
        OutputMode::Interactive => format!("Processed {rows} lines."),
        OutputMode::Piped => format!("select 'Processed {rows} lines' as '';"),
    }
}

/// Message for the both-suppressed case, commented out when piped.
pub fn nothing_to_emit_message(mode: OutputMode) -> String {
    let message = ToolError::NothingToEmit.to_string();
    match mode {
        OutputMode::Interactive => message,
        OutputMode::Piped => format!("-- {message}"),
    }
}

/// `DROP TABLE IF EXISTS <qualified>;`
pub fn drop_table(target: &TableTarget) -> String {
    format!("DROP TABLE IF EXISTS {};", target.qualified())
}

/// `CREATE TABLE` with the synthetic key first and every CSV column after it.
pub fn create_table(schema: &Schema, target: &TableTarget) -> String {
    let key = target.key_column();
    let mut sql = format!(
        "\n\nCREATE TABLE {} ( {key} INT NOT NULL AUTO_INCREMENT, ",
        target.qualified()
    );
    for field in schema.fields() {
        sql.push_str(&format!("{} {}, ", field.name(), field.column_type()));
    }
    sql.push_str(&format!("PRIMARY KEY ({key}) );\n\n"));
    sql
}

/// `LOAD DATA LOCAL INFILE` for a comma-separated, double-quoted, CRLF file with one header line.
pub fn load_data(schema: &Schema, target: &TableTarget, source: &Path) -> String {
    let columns = schema.field_names().collect::<Vec<_>>().join(", ");
    format!(
        "LOAD DATA LOCAL INFILE {} INTO TABLE {} FIELDS TERMINATED BY ',' ENCLOSED BY '\"' \
         LINES TERMINATED BY '\\r\\n' IGNORE 1 LINES ({columns});",
        quote_string(&source.to_string_lossy()),
        target.qualified()
    )
}
