//! CLI entry point for `mysql-selinux-context`.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use mysql_helpers::error::require_regular_file;
use mysql_helpers::logging;
use mysql_helpers::selinux::applicator::{self, ApplyOptions};
use mysql_helpers::selinux::mycnf::OptionFile;
use mysql_helpers::selinux::rules;
use mysql_helpers::selinux::runner::SystemRunner;

#[derive(Parser)]
#[command(
    name = "mysql-selinux-context",
    about = "Reads my.cnf and sets the SELinux file and port contexts it implies.",
    after_help = "Read from [mysqld]: datadir, socket, log-bin, relay-log, tmpdir, port. \
                  Read from [mysqld_safe]: log-error, pid-file."
)]
struct Cli {
    /// my.cnf file to read
    #[arg(short, long, default_value = "/etc/my.cnf")]
    conf: PathBuf,

    /// Echo each command before running it
    #[arg(short, long)]
    verbose: bool,

    /// Show commands, but do not execute them
    #[arg(short, long)]
    dry_run: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(error) = require_regular_file(&cli.conf) {
        eprintln!("{error}");
        process::exit(error.exit_code());
    }

    let config = match OptionFile::load(&cli.conf) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            process::exit(error.exit_code());
        }
    };

    let context_rules = rules::derive_rules(&config);
    let options = ApplyOptions {
        verbose: cli.verbose,
        dry_run: cli.dry_run,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = applicator::apply_rules(&context_rules, &mut SystemRunner, &options, &mut out)
        .and_then(|report| out.flush().map(|()| report));
    match report {
        Ok(report) => {
            if report.failed > 0 {
                tracing::warn!(
                    failed = report.failed,
                    executed = report.executed,
                    "some context commands failed"
                );
            }
        }
        Err(error) => {
            eprintln!("Error writing output: {error}");
            process::exit(1);
        }
    }
}
