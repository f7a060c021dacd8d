//! The command tree: nodes, subcommand resolution, and dispatch.
//!
//! A node exclusively owns its children. The tree is built once at startup
//! and stays immutable during dispatch; every bind pass allocates fresh
//! value state, so a shared tree can serve concurrent parses.

use std::collections::BTreeMap;
use std::io::Write;

use crate::argument::{self, ArgSpec, ArgumentValues, bind_args};
use crate::context::Context;
use crate::error::RunError;
use crate::help;
use crate::option::{Opt, OptionTable, OptionValues};

/// A command handler: context plus the typed option and argument values.
pub type Handler =
    Box<dyn Fn(&Context, &OptionValues, &ArgumentValues) -> anyhow::Result<()> + Send + Sync>;

/// One command or subcommand.
pub struct Command {
    name: String,
    description: String,
    options: OptionTable,
    args: Vec<ArgSpec>,
    action: Option<Handler>,
    children: BTreeMap<String, Command>,
}

impl Command {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            options: OptionTable::new(Vec::new()),
            args: Vec::new(),
            action: None,
            children: BTreeMap::new(),
        }
    }

    /// Declares the option set. Duplicate aliases panic at this point.
    pub fn options(mut self, opts: Vec<Opt>) -> Self {
        self.options = OptionTable::new(opts);
        self
    }

    /// Declares the positional slots, in binding order.
    pub fn args(mut self, slots: Vec<ArgSpec>) -> Self {
        argument::validate_slots(&self.name, &slots);
        self.args = slots;
        self
    }

    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&Context, &OptionValues, &ArgumentValues) -> anyhow::Result<()>
            + Send
            + Sync
            + 'static,
    {
        self.action = Some(Box::new(action));
        self
    }

    /// Attaches a child node. Duplicate child names panic, never overwrite.
    pub fn subcommand(mut self, child: Command) -> Self {
        if self.children.contains_key(child.name()) {
            panic!(
                "command '{}' already has a subcommand named '{}'",
                self.name,
                child.name()
            );
        }
        self.children.insert(child.name.clone(), child);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn option_table(&self) -> &OptionTable {
        &self.options
    }

    pub fn arg_slots(&self) -> &[ArgSpec] {
        &self.args
    }

    pub fn children(&self) -> &BTreeMap<String, Command> {
        &self.children
    }

    /// Greedy longest-prefix descent: consume leading tokens that exactly
    /// match a child's name and return the deepest node reached plus the
    /// remaining tokens. An unmatched token stops the descent without error.
    pub fn find<'s, 't>(&'s self, tokens: &'t [String]) -> (&'s Command, &'t [String]) {
        let mut node = self;
        let mut rest = tokens;

        while let Some((first, tail)) = rest.split_first() {
            match node.children.get(first.as_str()) {
                Some(child) => {
                    node = child;
                    rest = tail;
                }
                None => break,
            }
        }

        (node, rest)
    }

    /// Binds options, consults the help flag, binds positionals, and invokes
    /// the handler. Help is only consulted after a successful option bind,
    /// and short-circuits both positional binding and the handler. A node
    /// without an action renders its own help.
    pub fn execute(
        &self,
        context: &Context,
        tokens: &[String],
        out: &mut dyn Write,
    ) -> Result<(), RunError> {
        let (options, positional) = self.options.bind(tokens)?;

        if options.help() {
            out.write_all(help::render(self).as_bytes())?;
            return Ok(());
        }

        let arguments = bind_args(&self.args, positional)?;

        match &self.action {
            Some(action) => action(context, &options, &arguments)?,
            None => out.write_all(help::render(self).as_bytes())?,
        }

        Ok(())
    }
}
