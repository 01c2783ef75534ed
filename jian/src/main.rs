//! `jian` - the interactive shell and file-mode entry point for the Jian
//! interpreter (§6). Argument parsing and logging setup only; the actual
//! lex → parse → eval pipeline lives in `jianc-drv`.

mod error;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser as ClapParser;
use jianc_drv::{Config as DriverConfig, EvalOutcome, Session};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use error::{JianError, Result};

/// The Jian interpreter: run a source file, or start an interactive shell
/// when none is given.
#[derive(ClapParser, Debug)]
#[command(name = "jian")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "The Jian language interpreter", long_about = None)]
struct Cli {
    /// Source file to run. Omit to start the REPL.
    file: Option<PathBuf>,

    /// Raise the tracing filter level; repeat for more (-v, -vv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count, env = "JIAN_VERBOSE")]
    verbose: u8,

    /// Disable color in diagnostic output.
    #[arg(long, global = true, env = "JIAN_NO_COLOR")]
    no_color: bool,
}

const PROMPT: &str = ">> ";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.no_color)?;

    let config = DriverConfig {
        verbose: cli.verbose > 0,
        ..DriverConfig::new()
    };
    let mut session = Session::new(config);

    match cli.file {
        Some(path) => run_file(&mut session, &path),
        None => {
            run_repl(&mut session, io::stdin().lock(), io::stdout());
            Ok(())
        },
    }
}

fn init_logging(verbose: u8, no_color: bool) -> Result<()> {
    let filter = match verbose {
        0 => EnvFilter::new("info"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| JianError::Logging(e.to_string()))?;

    Ok(())
}

/// File mode (§6): read the whole file, run it as one unit, print the
/// final value or error text. Exit code stays 0 unless the file itself
/// could not be read.
fn run_file(session: &mut Session, path: &PathBuf) -> Result<()> {
    let mut stdout = io::stdout();
    match session.run_file(path, &mut stdout)? {
        EvalOutcome::Value(value) => println!("{}", value.inspect()),
        EvalOutcome::ParseErrors(errors) => {
            for err in errors {
                eprintln!("{err}");
            }
        },
    }
    Ok(())
}

/// The interactive shell (§6): greets once, then reads lines until EOF,
/// evaluating each against one persistent environment so `let` bindings
/// from earlier lines stay visible to later ones.
fn run_repl(session: &mut Session, input: impl BufRead, mut output: impl Write) {
    let _ = writeln!(output, "This is the Jian programming language!");
    let _ = writeln!(output, "Feel free to type in commands");
    let _ = write!(output, "{PROMPT}");
    let _ = output.flush();

    for line in input.lines() {
        let Ok(line) = line else { break };

        match session.eval(&line, &mut output) {
            EvalOutcome::Value(value) => {
                let _ = writeln!(output, "{}", value.inspect());
            },
            EvalOutcome::ParseErrors(errors) => {
                let _ = writeln!(output, "Woops! parser errors:");
                for err in errors {
                    let _ = writeln!(output, "\t{err}");
                }
            },
        }

        let _ = write!(output, "{PROMPT}");
        let _ = output.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_file_argument() {
        let cli = Cli::parse_from(["jian", "program.jian"]);
        assert_eq!(cli.file, Some(PathBuf::from("program.jian")));
    }

    #[test]
    fn cli_parses_without_file_for_repl_mode() {
        let cli = Cli::parse_from(["jian"]);
        assert_eq!(cli.file, None);
    }

    #[test]
    fn cli_parses_verbose_flag() {
        let cli = Cli::parse_from(["jian", "--verbose"]);
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn cli_verbose_flag_is_repeatable() {
        let cli = Cli::parse_from(["jian", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn repl_evaluates_each_line_against_a_shared_environment() {
        let mut session = Session::new(DriverConfig::new());
        let input = b"let x = 10;\nx + 5;\n" as &[u8];
        let mut output = Vec::new();
        run_repl(&mut session, input, &mut output);

        let rendered = String::from_utf8(output).unwrap();
        assert!(rendered.contains("15"));
    }

    #[test]
    fn repl_reports_parser_errors_without_crashing() {
        let mut session = Session::new(DriverConfig::new());
        let input = b"let = 5;\n" as &[u8];
        let mut output = Vec::new();
        run_repl(&mut session, input, &mut output);

        let rendered = String::from_utf8(output).unwrap();
        assert!(rendered.contains("parser errors"));
    }
}
