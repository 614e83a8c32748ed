use std::path::PathBuf;

use colex_lib::{Diagnostic, DiagnosticsPrinter, lint};
use serde::Serialize;

use super::expr_loader::load_or_exit;

pub struct LintArgs {
    pub input_path: Option<PathBuf>,
    pub expr_text: Option<String>,
    pub json: bool,
    pub color: bool,
}

#[derive(Serialize)]
struct LintReport<'a> {
    valid: bool,
    diagnostics: &'a [Diagnostic],
}

pub fn run(args: LintArgs) {
    let expr = load_or_exit(args.input_path.as_deref(), args.expr_text.as_deref());
    let diagnostics = lint(&expr.text);

    if args.json {
        let report = LintReport {
            valid: diagnostics.is_empty(),
            diagnostics: &diagnostics,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    } else if !diagnostics.is_empty() {
        let mut printer = DiagnosticsPrinter::new(&diagnostics)
            .source(&expr.text)
            .colored(args.color);
        if let Some(origin) = expr.origin.as_deref() {
            printer = printer.path(origin);
        }
        println!("{}", printer.render());
        let noun = if diagnostics.len() == 1 { "error" } else { "errors" };
        eprintln!("{} {}", diagnostics.len(), noun);
    }

    if !diagnostics.is_empty() {
        std::process::exit(1);
    }
}
