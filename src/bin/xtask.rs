use std::env;
use std::process::{Command, ExitCode};

fn print_usage() {
    eprintln!(
        "Usage:
  cargo run --bin xtask -- precommit [--locked]
  cargo run --bin xtask -- ci [--locked]"
    );
}

fn run_command(program: &str, args: &[&str]) -> Result<(), String> {
    eprintln!("+ {program} {}", args.join(" "));
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|error| format!("Failed to run `{program}`: {error}"))?;

    if status.success() {
        Ok(())
    } else {
        Err(format!(
            "Command `{program} {}` exited with status {status}",
            args.join(" ")
        ))
    }
}

fn cargo(args: &[&str], locked: bool) -> Result<(), String> {
    let mut full: Vec<&str> = args.to_vec();
    if locked {
        let at = full.iter().position(|arg| *arg == "--").unwrap_or(full.len());
        full.insert(at, "--locked");
    }
    run_command("cargo", &full)
}

fn run_precommit(locked: bool) -> Result<(), String> {
    run_command("cargo", &["fmt", "--all", "--", "--check"])?;
    cargo(
        &["clippy", "--all-targets", "--", "-D", "warnings"],
        locked,
    )?;
    cargo(&["test", "--lib", "--bins", "--tests"], locked)
}

fn run_ci(locked: bool) -> Result<(), String> {
    run_precommit(locked)?;
    cargo(&["test", "--doc"], locked)?;
    cargo(&["build", "--release", "--bins"], locked)
}

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let Some(command) = args.next() else {
        print_usage();
        return ExitCode::from(2);
    };

    let mut locked = false;
    for flag in args {
        if flag == "--locked" {
            locked = true;
        } else {
            eprintln!("Unknown option: {flag}");
            print_usage();
            return ExitCode::from(2);
        }
    }

    let result = match command.as_str() {
        "precommit" => run_precommit(locked),
        "ci" => run_ci(locked),
        _ => {
            eprintln!("Unknown command: {command}");
            print_usage();
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::from(1)
        }
    }
}
