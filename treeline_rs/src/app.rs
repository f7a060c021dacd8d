//! Application boundary: token collection, dispatch, and exit-code mapping.
//!
//! This is the single place where engine failures turn into process
//! behavior. The library below it never prints; user errors go to stderr
//! with a styled `error:` prefix, anything outside the parse taxonomy gets
//! the generic fatal banner.

use std::io::Write;

use console::style;

use crate::command::Command;
use crate::context::Context;
use crate::error::{CliError, RunError};

/// A command tree plus the version string reported to handlers.
pub struct Application {
    version: String,
    root: Command,
}

impl Application {
    pub fn new(version: &str, root: Command) -> Self {
        Self {
            version: version.to_string(),
            root,
        }
    }

    pub fn root(&self) -> &Command {
        &self.root
    }

    /// Collects `std::env::args()` and dispatches. The returned status is
    /// meant for `std::process::exit`: 0 on success and help, 1 on any
    /// failure.
    pub fn run(&self) -> i32 {
        let args: Vec<String> = std::env::args().collect();
        let argv0 = args.first().cloned().unwrap_or_default();
        let tokens = args.get(1..).unwrap_or(&[]);

        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        self.run_from(&argv0, tokens, &mut stdout.lock(), &mut stderr.lock())
    }

    /// Dispatches an explicit token list against explicit streams.
    pub fn run_from(
        &self,
        argv0: &str,
        tokens: &[String],
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> i32 {
        let (node, rest) = self.root.find(tokens);

        let context = Context {
            name: self.root.name().to_string(),
            version: self.version.clone(),
            description: self.root.description().to_string(),
            argv0: argv0.to_string(),
        };

        match node.execute(&context, rest, out) {
            Ok(()) => 0,
            Err(RunError::Cli(error)) => {
                let _ = writeln!(err, "{} {error}", style("error:").red().bold());
                1
            }
            Err(RunError::Handler(error)) => {
                // Taxonomy errors propagated through a handler keep their
                // user-facing wording; everything else is fatal.
                match error.downcast_ref::<CliError>() {
                    Some(cli) => {
                        let _ = writeln!(err, "{} {cli}", style("error:").red().bold());
                    }
                    None => {
                        let _ = writeln!(err, "fatal error encountered");
                        let _ = writeln!(err, "{error:#}");
                    }
                }
                1
            }
            Err(RunError::Output(error)) => {
                let _ = writeln!(err, "fatal error encountered");
                let _ = writeln!(err, "{error}");
                1
            }
        }
    }
}
