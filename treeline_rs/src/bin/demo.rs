//! Demo binary for the treeline parsing engine.
//!
//! A small service-style CLI that exercises subcommand dispatch, typed
//! options with defaults, variadic positional binding, and JSON output.

use std::any::Any;
use std::panic;

use serde::Serialize;
use treeline::{Application, ArgSpec, Command, Opt};

fn install_broken_pipe_handler() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let payload = info.payload();
        let is_broken = <dyn Any>::downcast_ref::<&str>(payload)
            .is_some_and(|s| s.contains("Broken pipe"))
            || <dyn Any>::downcast_ref::<String>(payload)
                .is_some_and(|s| s.contains("Broken pipe"));

        if is_broken {
            // Quietly exit when downstream closes the pipe (e.g. piping to `head`).
            std::process::exit(0);
        }

        default_hook(info);
    }));
}

#[derive(Serialize)]
struct LaunchReport {
    fork: bool,
    threads: i32,
}

fn start_command() -> Command {
    Command::new("start", "Start the service.")
        .options(vec![
            Opt::flag(&["f", "fork"], "Run in the background"),
            Opt::single(&["t", "threads"], "Number of worker threads", "count").default_value("1"),
            Opt::flag(&["json"], "Emit the launch parameters as JSON"),
        ])
        .action(|_context, options, _args| {
            let report = LaunchReport {
                fork: options.flag("fork"),
                threads: options.value::<i32>("threads")?.unwrap_or(1),
            };

            if options.flag("json") {
                println!("{}", serde_json::to_string(&report)?);
            } else {
                println!("fork: {} threads: {}", report.fork, report.threads);
            }
            Ok(())
        })
}

fn range_command() -> Command {
    Command::new("range", "Echo head, middle, and tail values.")
        .args(vec![
            ArgSpec::required("head"),
            ArgSpec::variadic("values"),
            ArgSpec::required("tail"),
        ])
        .action(|_context, _options, args| {
            let head = args.required::<String>("head")?;
            let values = args.variadic::<String>("values")?;
            let tail = args.required::<String>("tail")?;

            println!("head: {head}");
            println!("values: {}", values.join(", "));
            println!("tail: {tail}");
            Ok(())
        })
}

fn tag_command() -> Command {
    Command::new("tag", "Collect tags from repeated or delimited values.")
        .options(vec![
            Opt::multi(&["t", "tags"], "Comma-separated tag list", "tags").delimiter(","),
        ])
        .action(|_context, options, _args| {
            for tag in options.values::<String>("tags")? {
                println!("{tag}");
            }
            Ok(())
        })
}

fn main() {
    install_broken_pipe_handler();

    let root = Command::new(
        "treeline-demo",
        "Sample application built on the treeline parsing engine.",
    )
    .options(vec![Opt::flag(&["v", "version"], "Print version information")])
    .action(|context, options, _args| {
        if options.flag("version") {
            println!("{}", context.version_line());
        } else {
            println!("{}", context.description);
            println!("Run '{} --help' to list commands.", context.name);
        }
        Ok(())
    })
    .subcommand(start_command())
    .subcommand(range_command())
    .subcommand(tag_command());

    let app = Application::new(env!("CARGO_PKG_VERSION"), root);
    std::process::exit(app.run());
}
