//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Every subcommand reads one expression the same way.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(input_path_arg()).arg(expr_text_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("colex")
        .about("Check, lint and format column formula expressions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(lint_command())
        .subcommand(tokens_command())
        .subcommand(tree_command())
        .subcommand(fmt_command())
}

/// Validate an expression. Silent on success.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate an expression")
        .override_usage(
            "\
  colex check <FILE>
  colex check -e <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  colex check total.expr              # exit status 1 if invalid
  colex check -e 'SUM([a]) > 10'      # inline expression
  echo '[a] + 1' | colex check -      # read stdin"#,
        )
        .arg(color_arg());

    with_input_args(cmd)
}

/// List every diagnostic for an expression.
pub fn lint_command() -> Command {
    let cmd = Command::new("lint")
        .about("Report all diagnostics for an expression")
        .override_usage(
            "\
  colex lint <FILE> [--json]
  colex lint -e <TEXT> [--json]",
        )
        .after_help(
            r#"EXAMPLES:
  colex lint total.expr
  colex lint -e '1 + + 2' --json"#,
        )
        .arg(json_arg())
        .arg(color_arg());

    with_input_args(cmd)
}

/// Show the highlighting token stream.
pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("Show the token stream used for highlighting")
        .override_usage(
            "\
  colex tokens <FILE> [--json]
  colex tokens -e <TEXT> [--json]",
        )
        .after_help(
            r#"EXAMPLES:
  colex tokens -e 'ABS(-[delta])'
  colex tokens total.expr --json"#,
        )
        .arg(json_arg());

    with_input_args(cmd)
}

/// Show the syntax tree.
pub fn tree_command() -> Command {
    let cmd = Command::new("tree")
        .about("Show the syntax tree of an expression")
        .override_usage(
            "\
  colex tree <FILE> [--spans] [--cst]
  colex tree -e <TEXT> [--json]",
        )
        .after_help(
            r#"EXAMPLES:
  colex tree -e '1 + 2 * 3'
  colex tree -e '1 + 2 * 3' --spans
  colex tree -e '1 +  2' --cst        # lossless tree with whitespace
  colex tree total.expr --json"#,
        )
        .arg(json_arg())
        .arg(spans_arg())
        .arg(cst_arg())
        .arg(color_arg());

    with_input_args(cmd)
}

/// Pretty-print an expression.
pub fn fmt_command() -> Command {
    let cmd = Command::new("fmt")
        .about("Format an expression")
        .override_usage(
            "\
  colex fmt <FILE> [OPTIONS]
  colex fmt -e <TEXT> [OPTIONS]",
        )
        .after_help(
            r#"EXAMPLES:
  colex fmt -e '[a]+[b]*2'
  colex fmt total.expr --max-line-length 80
  colex fmt total.expr --config colex.json --no-break

Invalid expressions are printed unchanged and reported on stderr."#,
        )
        .arg(config_arg())
        .arg(indent_size_arg())
        .arg(max_line_length_arg())
        .arg(no_space_around_ops_arg())
        .arg(no_break_arg())
        .arg(color_arg());

    with_input_args(cmd)
}
