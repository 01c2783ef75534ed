//! jianc-drv - Driver: wires lexer, parser, and evaluator into a single
//! `Session` that either runs one source string to completion (file mode,
//! §6) or keeps a persistent environment alive across many inputs (REPL
//! mode, §6). Trimmed from a native-codegen pipeline down to the
//! lex → parse → eval core this language actually has; there is no
//! optimization level, target triple, or object/executable emission here.

use jianc_eval::{Environment, Evaluator, Value};
use jianc_lex::Lexer;
use jianc_par::{Parser, Program};
use jianc_util::Handler;
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

/// Driver configuration. Unlike a native-codegen config there is no
/// optimization level or emit kind to choose — only how verbosely the
/// session reports on itself and whether parser warnings escalate.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Print parse/lex diagnostics to stderr as they're emitted.
    pub verbose: bool,

    /// Treat any parser error as fatal for the whole session instead of
    /// just skipping evaluation of the offending input.
    pub warnings_as_errors: bool,

    /// Working directory, used to resolve a relative file-mode path.
    pub working_dir: PathBuf,
}

impl Config {
    pub fn new() -> Self {
        Config {
            working_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            ..Default::default()
        }
    }
}

/// The outcome of evaluating one unit of source: either a `Value`
/// (possibly itself an `Error` value — that's a normal interpreted-program
/// result, not a driver failure) or parser errors that prevented
/// evaluation from running at all.
pub enum EvalOutcome {
    Value(Value),
    ParseErrors(Vec<String>),
}

/// A compilation/evaluation session (§3.4, §4.3, §6). Holds one
/// [`Environment`] that persists across every [`Session::eval`] call, so a
/// REPL built on top of this driver gets the "one global environment for
/// the whole session" behavior without re-threading state itself.
pub struct Session {
    pub config: Config,
    env: Environment,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Session {
            config,
            env: Environment::new(),
        }
    }

    /// The environment bindings accumulated so far this session.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Lexes and parses `source` without evaluating it — used by the
    /// token-dump REPL variant in §6 and by anything that only needs the
    /// AST or its rendering.
    pub fn parse(&self, source: &str) -> (Program, Vec<String>) {
        let handler = Handler::new();
        let lexer = Lexer::new(source, &handler);
        let mut parser = Parser::new(lexer, &handler);
        let program = parser.parse_program();
        (program, parser.errors().to_vec())
    }

    /// Lexes, parses, and evaluates `source` against this session's
    /// persistent environment, writing any `puts` output to `output`.
    /// Parser errors abort before evaluation ever runs — the contract is
    /// always "check errors first" (§4.2, §7).
    pub fn eval(&mut self, source: &str, output: &mut dyn Write) -> EvalOutcome {
        let (program, errors) = self.parse(source);

        if !errors.is_empty() {
            if self.config.verbose {
                for err in &errors {
                    eprintln!("parse error: {err}");
                }
            }
            return EvalOutcome::ParseErrors(errors);
        }

        let mut evaluator = Evaluator::new(output);
        let value = evaluator.eval_program(&program, &self.env);
        EvalOutcome::Value(value)
    }

    /// Reads `path`, evaluates its full contents as one unit, and returns
    /// the final value (file mode, §6). Host I/O failures are the only
    /// `DriverError` this produces; interpreted-program errors surface as
    /// an ordinary `Value::Error` inside `EvalOutcome::Value`.
    pub fn run_file(&mut self, path: &std::path::Path, output: &mut dyn Write) -> Result<EvalOutcome, DriverError> {
        let source = std::fs::read_to_string(path)
            .map_err(|source_err| DriverError::ReadFile {
                path: path.to_path_buf(),
                source: source_err,
            })?;
        Ok(self.eval(&source, output))
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(Config::default())
    }
}

/// Host-level failures — never produced by an interpreted program's own
/// errors, only by the driver's interaction with the filesystem (§6: exit
/// codes are nonzero only for unrecoverable host errors).
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("could not read {path}: {source}", path = path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
