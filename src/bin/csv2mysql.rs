//! CLI entry point for `csv2mysql`.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use mysql_helpers::csv_schema::inference::{self, FirstRowPolicy, InferOptions};
use mysql_helpers::csv_schema::names::TableTarget;
use mysql_helpers::error::{require_regular_file, ToolError};
use mysql_helpers::logging;
use mysql_helpers::sql::emitter::{self, EmitOptions, OutputMode};

#[derive(Parser)]
#[command(
    name = "csv2mysql",
    about = "Builds MySQL tables based on CSV files. Every field is treated as text: \
             CHAR below 8 characters, VARCHAR below 256, TEXT above that.",
    after_help = "The output can be piped straight into mysql; specify the database \
                  here or on the mysql command line."
)]
struct Cli {
    /// Input CSV file
    infile: PathBuf,

    /// Display verbose output (Processed {n} lines)
    #[arg(short, long)]
    verbose: bool,

    /// Database name to use as a prefix for the table
    #[arg(short, long, default_value = "")]
    database: String,

    /// Table name to use instead of the base file name
    #[arg(short, long, default_value = "")]
    table: String,

    /// Add DROP TABLE IF EXISTS to the output
    #[arg(long)]
    drop: bool,

    /// Do not emit the CREATE TABLE statement
    #[arg(long)]
    no_create: bool,

    /// Do not emit the LOAD DATA statement
    #[arg(long)]
    no_load: bool,

    /// Include the first data row in width scanning (skipped by default)
    #[arg(long)]
    scan_first_row: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mode = OutputMode::for_stdout();
    let options = EmitOptions {
        verbose: cli.verbose,
        drop: cli.drop,
        create: !cli.no_create,
        load: !cli.no_load,
        mode,
    };

    if let Err(error) = run(&cli, &options) {
        match &error {
            ToolError::NothingToEmit => println!("{}", emitter::nothing_to_emit_message(mode)),
            other => eprintln!("{other}"),
        }
        process::exit(error.exit_code());
    }
}

fn run(cli: &Cli, options: &EmitOptions) -> Result<(), ToolError> {
    // A missing input outranks the suppression conflict.
    require_regular_file(&cli.infile)?;
    options.validate()?;

    let infer = InferOptions {
        first_row: if cli.scan_first_row {
            FirstRowPolicy::ScanAll
        } else {
            FirstRowPolicy::SkipFirst
        },
    };
    let schema = inference::infer_schema_from_path(&cli.infile, &infer)?;
    let target = TableTarget::resolve(&cli.infile, &cli.table, &cli.database);
    let statements = emitter::build_statements(&schema, &target, &cli.infile, options)?;

    print!("{}", statements.render());
    Ok(())
}
