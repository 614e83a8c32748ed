use std::fs;
use std::path::{Path, PathBuf};

use colex_lib::{DiagnosticsPrinter, FormatOptions, format, lint};

use super::expr_loader::load_or_exit;

pub struct FmtArgs {
    pub input_path: Option<PathBuf>,
    pub expr_text: Option<String>,
    pub config: Option<PathBuf>,
    pub indent_size: Option<usize>,
    pub max_line_length: Option<usize>,
    pub space_around_operators: Option<bool>,
    pub break_long_expressions: Option<bool>,
    pub color: bool,
}

pub fn run(args: FmtArgs) {
    let options = resolve_options(&args).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    });

    let expr = load_or_exit(args.input_path.as_deref(), args.expr_text.as_deref());

    // Invalid input comes back unchanged; say why on stderr.
    let diagnostics = lint(&expr.text);
    if !diagnostics.is_empty() {
        let mut printer = DiagnosticsPrinter::new(&diagnostics)
            .source(&expr.text)
            .colored(args.color);
        if let Some(origin) = expr.origin.as_deref() {
            printer = printer.path(origin);
        }
        eprintln!("{}", printer.render());
    }

    let formatted = format(&expr.text, &options);
    if formatted.ends_with('\n') {
        print!("{}", formatted);
    } else {
        println!("{}", formatted);
    }

    if !diagnostics.is_empty() {
        std::process::exit(1);
    }
}

/// `--config` file first, then individual flags on top.
pub fn resolve_options(args: &FmtArgs) -> Result<FormatOptions, String> {
    let mut options = match &args.config {
        Some(path) => load_config(path)?,
        None => FormatOptions::default(),
    };

    if let Some(n) = args.indent_size {
        options = options.with_indent_size(n);
    }
    if let Some(n) = args.max_line_length {
        options = options.with_max_line_length(n);
    }
    if let Some(flag) = args.space_around_operators {
        options = options.with_space_around_operators(flag);
    }
    if let Some(flag) = args.break_long_expressions {
        options = options.with_break_long_expressions(flag);
    }

    Ok(options)
}

fn load_config(path: &Path) -> Result<FormatOptions, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
    FormatOptions::from_json(&text).map_err(|e| format!("{}: {}", path.display(), e))
}
