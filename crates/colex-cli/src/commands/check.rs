use std::path::PathBuf;

use colex_lib::{DiagnosticsPrinter, lint};

use super::expr_loader::load_or_exit;

pub struct CheckArgs {
    pub input_path: Option<PathBuf>,
    pub expr_text: Option<String>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let expr = load_or_exit(args.input_path.as_deref(), args.expr_text.as_deref());

    let diagnostics = lint(&expr.text);
    if !diagnostics.is_empty() {
        let mut printer = DiagnosticsPrinter::new(&diagnostics)
            .source(&expr.text)
            .colored(args.color);
        if let Some(origin) = expr.origin.as_deref() {
            printer = printer.path(origin);
        }
        eprintln!("{}", printer.render());
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
