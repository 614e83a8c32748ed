//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` mirror the command `*Args` but are populated from clap and keep
//! the raw `ColorChoice`; the `From` impls resolve it against the terminal.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::fmt::FmtArgs;
use crate::commands::lint::LintArgs;
use crate::commands::tokens::TokensArgs;
use crate::commands::tree::TreeArgs;

pub struct CheckParams {
    pub input_path: Option<PathBuf>,
    pub expr_text: Option<String>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            expr_text: m.get_one::<String>("expr_text").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input_path: p.input_path,
            expr_text: p.expr_text,
            color: p.color.should_colorize(),
        }
    }
}

pub struct LintParams {
    pub input_path: Option<PathBuf>,
    pub expr_text: Option<String>,
    pub json: bool,
    pub color: ColorChoice,
}

impl LintParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            expr_text: m.get_one::<String>("expr_text").cloned(),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<LintParams> for LintArgs {
    fn from(p: LintParams) -> Self {
        Self {
            input_path: p.input_path,
            expr_text: p.expr_text,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TokensParams {
    pub input_path: Option<PathBuf>,
    pub expr_text: Option<String>,
    pub json: bool,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            expr_text: m.get_one::<String>("expr_text").cloned(),
            json: m.get_flag("json"),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            input_path: p.input_path,
            expr_text: p.expr_text,
            json: p.json,
        }
    }
}

pub struct TreeParams {
    pub input_path: Option<PathBuf>,
    pub expr_text: Option<String>,
    pub json: bool,
    pub spans: bool,
    pub cst: bool,
    pub color: ColorChoice,
}

impl TreeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            expr_text: m.get_one::<String>("expr_text").cloned(),
            json: m.get_flag("json"),
            spans: m.get_flag("spans"),
            cst: m.get_flag("cst"),
            color: parse_color(m),
        }
    }
}

impl From<TreeParams> for TreeArgs {
    fn from(p: TreeParams) -> Self {
        Self {
            input_path: p.input_path,
            expr_text: p.expr_text,
            json: p.json,
            spans: p.spans,
            cst: p.cst,
            color: p.color.should_colorize(),
        }
    }
}

pub struct FmtParams {
    pub input_path: Option<PathBuf>,
    pub expr_text: Option<String>,
    pub config: Option<PathBuf>,
    pub indent_size: Option<u32>,
    pub max_line_length: Option<u32>,
    pub no_space_around_ops: bool,
    pub no_break: bool,
    pub color: ColorChoice,
}

impl FmtParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            expr_text: m.get_one::<String>("expr_text").cloned(),

            // Format options; unset flags fall back to --config, then defaults
            config: m.get_one::<PathBuf>("config").cloned(),
            indent_size: m.get_one::<u32>("indent_size").copied(),
            max_line_length: m.get_one::<u32>("max_line_length").copied(),
            no_space_around_ops: m.get_flag("no_space_around_ops"),
            no_break: m.get_flag("no_break"),

            color: parse_color(m),
        }
    }
}

impl From<FmtParams> for FmtArgs {
    fn from(p: FmtParams) -> Self {
        Self {
            input_path: p.input_path,
            expr_text: p.expr_text,
            config: p.config,
            indent_size: p.indent_size.map(|n| n as usize),
            max_line_length: p.max_line_length.map(|n| n as usize),
            space_around_operators: p.no_space_around_ops.then_some(false),
            break_long_expressions: p.no_break.then_some(false),
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
