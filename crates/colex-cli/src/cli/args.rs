//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be
//! composed into several subcommands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Expression file, or `-` for stdin (positional).
pub fn input_path_arg() -> Arg {
    Arg::new("input_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("expr_text")
        .help("File containing the expression (`-` reads stdin)")
}

/// Inline expression text (-e/--expr).
pub fn expr_text_arg() -> Arg {
    Arg::new("expr_text")
        .short('e')
        .long("expr")
        .value_name("TEXT")
        .allow_hyphen_values(true)
        .help("Inline expression text")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Machine-readable output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print results as JSON")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// Show the lossless concrete syntax tree (--cst).
pub fn cst_arg() -> Arg {
    Arg::new("cst")
        .long("cst")
        .action(ArgAction::SetTrue)
        .conflicts_with("json")
        .help("Show the concrete syntax tree, including whitespace")
}

/// Indentation width (--indent-size).
pub fn indent_size_arg() -> Arg {
    Arg::new("indent_size")
        .long("indent-size")
        .value_name("N")
        .value_parser(value_parser!(u32))
        .help("Spaces per indentation level [default: 2]")
}

/// Preferred maximum line width (--max-line-length).
pub fn max_line_length_arg() -> Arg {
    Arg::new("max_line_length")
        .long("max-line-length")
        .value_name("N")
        .value_parser(value_parser!(u32).range(1..))
        .help("Preferred maximum line width [default: 40]")
}

/// Print binary operators without surrounding spaces (--no-space-around-ops).
pub fn no_space_around_ops_arg() -> Arg {
    Arg::new("no_space_around_ops")
        .long("no-space-around-ops")
        .action(ArgAction::SetTrue)
        .help("Don't put spaces around binary operators")
}

/// Keep everything on one line (--no-break).
pub fn no_break_arg() -> Arg {
    Arg::new("no_break")
        .long("no-break")
        .action(ArgAction::SetTrue)
        .help("Never break long expressions across lines")
}

/// JSON file with format options (--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON file with format options (flags take precedence)")
}
