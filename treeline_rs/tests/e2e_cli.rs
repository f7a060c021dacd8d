//! End-to-end CLI tests for the treeline demo binary.
//!
//! These drive the real process, so they cover the whole pipeline: token
//! collection, subcommand descent, option/argument binding, help rendering,
//! and exit-code mapping.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn demo() -> Command {
    cargo_bin_cmd!("treeline-demo")
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn runs_without_arguments() {
        demo()
            .assert()
            .success()
            .stdout(predicate::str::contains("treeline parsing engine"))
            .stdout(predicate::str::contains("--help"));
    }

    #[test]
    fn shows_version() {
        demo()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn short_version_flag_works() {
        demo()
            .arg("-v")
            .assert()
            .success()
            .stdout(predicate::str::contains("treeline-demo"));
    }
}

// ============================================
// Help Rendering
// ============================================

mod help_output {
    use super::*;

    const ROOT_HELP: &str = concat!(
        "Sample application built on the treeline parsing engine.\n",
        "\n",
        "Usage: treeline-demo [options]\n",
        "\n",
        "Options:\n",
        "    -v, --version                 Print version information\n",
        "    --help, -?                    Print information about a command\n",
        "\n",
        "Commands:\n",
        "    range          Echo head, middle, and tail values.\n",
        "    start          Start the service.\n",
        "    tag            Collect tags from repeated or delimited values.\n",
    );

    const START_HELP: &str = concat!(
        "Start the service.\n",
        "\n",
        "Usage: start [options]\n",
        "\n",
        "Options:\n",
        "    -f, --fork                    Run in the background\n",
        "    -t, --threads count           Number of worker threads\n",
        "    --json                        Emit the launch parameters as JSON\n",
        "    --help, -?                    Print information about a command\n",
    );

    #[test]
    fn root_help_matches_exactly() {
        demo()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::eq(ROOT_HELP));
    }

    #[test]
    fn subcommand_help_matches_exactly() {
        demo()
            .args(["start", "--help"])
            .assert()
            .success()
            .stdout(predicate::eq(START_HELP));
    }

    #[test]
    fn short_help_alias_works() {
        demo()
            .args(["start", "-?"])
            .assert()
            .success()
            .stdout(predicate::eq(START_HELP));
    }

    #[test]
    fn help_suppresses_the_handler() {
        demo()
            .args(["start", "--fork", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage: start"))
            .stdout(predicate::str::contains("fork: ").not());
    }
}

// ============================================
// Dispatch and Binding
// ============================================

mod dispatch {
    use super::*;

    #[test]
    fn dispatches_start_with_typed_options() {
        demo()
            .args(["start", "--fork", "--threads", "4"])
            .assert()
            .success()
            .stdout(predicate::eq("fork: true threads: 4\n"));
    }

    #[test]
    fn defaults_apply_when_options_are_absent() {
        demo()
            .arg("start")
            .assert()
            .success()
            .stdout(predicate::eq("fork: false threads: 1\n"));
    }

    #[test]
    fn clustered_short_options_take_a_trailing_value() {
        demo()
            .args(["start", "-ft", "8"])
            .assert()
            .success()
            .stdout(predicate::eq("fork: true threads: 8\n"));
    }

    #[test]
    fn inline_values_bind() {
        demo()
            .args(["start", "--threads=2"])
            .assert()
            .success()
            .stdout(predicate::eq("fork: false threads: 2\n"));
    }

    #[test]
    fn json_output_mode() {
        demo()
            .args(["start", "--json", "--threads", "4"])
            .assert()
            .success()
            .stdout(predicate::eq("{\"fork\":false,\"threads\":4}\n"));
    }

    #[test]
    fn variadic_slot_absorbs_the_middle() {
        demo()
            .args(["range", "foo", "one", "two", "three", "bar"])
            .assert()
            .success()
            .stdout(predicate::eq(
                "head: foo\nvalues: one, two, three\ntail: bar\n",
            ));
    }

    #[test]
    fn terminator_makes_dashed_tokens_positional() {
        demo()
            .args(["range", "--", "-a", "-b", "-c"])
            .assert()
            .success()
            .stdout(predicate::eq("head: -a\nvalues: -b\ntail: -c\n"));
    }

    #[test]
    fn delimited_list_values_split() {
        demo()
            .args(["tag", "--tags", "a,,b,"])
            .assert()
            .success()
            .stdout(predicate::eq("a\nb\n"));
    }

    #[test]
    fn repeated_list_options_accumulate() {
        demo()
            .args(["tag", "-t", "x", "--tags", "y"])
            .assert()
            .success()
            .stdout(predicate::eq("x\ny\n"));
    }
}

// ============================================
// Error Paths
// ============================================

mod errors {
    use super::*;

    #[test]
    fn unknown_option_exits_one() {
        demo()
            .args(["start", "--bogus"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("unknown option: bogus"));
    }

    #[test]
    fn missing_value_exits_one() {
        demo()
            .args(["start", "--threads"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("missing value for: threads"));
    }

    #[test]
    fn empty_inline_value_is_missing() {
        demo()
            .args(["start", "--threads="])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("missing value for: threads"));
    }

    #[test]
    fn flag_with_inline_value_is_rejected() {
        demo()
            .args(["start", "--fork=yes"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains(
                "option 'fork' does not support values",
            ));
    }

    #[test]
    fn conversion_errors_keep_their_wording() {
        demo()
            .args(["start", "--threads", "many"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains(
                "could not convert argument 'many' to integer",
            ));
    }

    #[test]
    fn missing_required_argument_exits_one() {
        demo()
            .args(["range", "foo"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains(
                "not enough arguments: missing value for: tail",
            ));
    }

    #[test]
    fn extra_positionals_exit_one() {
        demo()
            .args(["start", "leftover"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("too many arguments"));
    }

    #[test]
    fn parse_errors_win_over_help() {
        demo()
            .args(["start", "--help", "--bogus"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("unknown option: bogus"))
            .stdout(predicate::str::contains("Usage:").not());
    }
}
