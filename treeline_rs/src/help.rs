//! Help text generation.
//!
//! The layout mirrors the binder's own rules: `[options]` appears only when
//! the node declares options, `[--]` only when it also has positional slots,
//! and slot names use the same bracket conventions the binder enforces.

use crate::argument::{ArgKind, ArgSpec};
use crate::command::Command;
use crate::option::Opt;

/// Column where option descriptions start, including the indent.
const DESCRIPTION_COLUMN: usize = 34;

/// Width of the name field in the Commands block.
const COMMAND_SPACING: usize = 15;

const INDENT: &str = "    ";

/// Renders the full help text for a node.
pub fn render(command: &Command) -> String {
    let mut text = String::new();

    text.push_str(command.description());
    text.push_str("\n\nUsage: ");
    text.push_str(command.name());

    let has_options = !command.option_table().declared().is_empty();
    let has_args = !command.arg_slots().is_empty();

    if has_options {
        text.push_str(" [options]");
        if has_args {
            text.push_str(" [--]");
        }
    }

    for slot in command.arg_slots() {
        text.push(' ');
        text.push_str(&slot_usage(slot));
    }
    text.push('\n');

    if has_options {
        text.push_str("\nOptions:\n");
        for opt in command.option_table().declared() {
            option_line(&mut text, opt);
        }
        option_line(&mut text, command.option_table().help_opt());
    }

    if !command.children().is_empty() {
        text.push_str("\nCommands:\n");
        for (name, child) in command.children() {
            text.push_str(INDENT);
            text.push_str(name);
            for _ in 0..COMMAND_SPACING.saturating_sub(name.len()) {
                text.push(' ');
            }
            text.push_str(child.description());
            text.push('\n');
        }
    }

    text
}

fn slot_usage(slot: &ArgSpec) -> String {
    let name = slot.name().to_uppercase();
    match slot.kind() {
        ArgKind::Required => name,
        ArgKind::Optional => format!("[{name}]"),
        ArgKind::Variadic => format!("{name}..."),
    }
}

/// One Options-block line: aliases and value name, column-aligned with the
/// description, wrapping when the alias part reaches the column.
fn option_line(text: &mut String, opt: &Opt) {
    let mut line = String::from(INDENT);

    for (position, alias) in opt.aliases().iter().enumerate() {
        if position > 0 {
            line.push_str(", ");
        }
        if alias.chars().count() == 1 {
            line.push('-');
        } else {
            line.push_str("--");
        }
        line.push_str(alias);
    }

    if let Some(value_name) = opt.value_name() {
        line.push(' ');
        line.push_str(value_name);
    }

    if line.len() < DESCRIPTION_COLUMN {
        for _ in line.len()..DESCRIPTION_COLUMN {
            line.push(' ');
        }
    } else {
        line.push('\n');
        for _ in 0..DESCRIPTION_COLUMN {
            line.push(' ');
        }
    }

    line.push_str(opt.description());
    line.push('\n');
    text.push_str(&line);
}
