//! # treeline
//!
//! Declarative command-line parsing with hierarchical subcommand dispatch.
//!
//! Programs build a tree of [`Command`] nodes, each declaring typed options
//! and positional argument slots plus a handler. At dispatch time the tree
//! resolves the deepest matching subcommand, the token binder classifies the
//! remaining tokens and consumes option values per arity, the positional
//! binder distributes the rest across the declared slots, and the handler
//! runs with typed values and a read-only [`Context`].
//!
//! ## Quick start
//!
//! ```rust
//! use treeline::{Command, Opt};
//!
//! let greet = Command::new("greet", "Print a greeting.")
//!     .options(vec![
//!         Opt::single(&["n", "name"], "Who to greet", "name").default_value("world"),
//!     ])
//!     .action(|_context, options, _args| {
//!         let name = options.value::<String>("name")?.unwrap_or_default();
//!         println!("hello, {name}");
//!         Ok(())
//!     });
//! ```
//!
//! Supported syntax: `--name`, `--name value`, `--name=value`, `-x`,
//! clustered `-xyz` (a value-bearing short option must come last), a literal
//! `--` ends option parsing, and a bare `-` is always positional. Every
//! command answers `--help`/`-?` with generated usage text.

pub mod app;
pub mod argument;
pub mod command;
pub mod context;
pub mod error;
pub mod help;
pub mod option;
pub mod parse;

pub use app::Application;
pub use argument::{ArgKind, ArgSpec, ArgumentValues, bind_args};
pub use command::{Command, Handler};
pub use context::Context;
pub use error::{CliError, Result, RunError};
pub use option::{Opt, OptKind, OptionTable, OptionValues};
pub use parse::ParseValue;
