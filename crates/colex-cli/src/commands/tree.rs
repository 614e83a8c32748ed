use std::path::PathBuf;

use colex_lib::parser::parse;
use colex_lib::tree::TreePrinter;
use colex_lib::{DiagnosticsPrinter, parse_tree};

use super::expr_loader::load_or_exit;

pub struct TreeArgs {
    pub input_path: Option<PathBuf>,
    pub expr_text: Option<String>,
    pub json: bool,
    pub spans: bool,
    pub cst: bool,
    pub color: bool,
}

pub fn run(args: TreeArgs) {
    let expr = load_or_exit(args.input_path.as_deref(), args.expr_text.as_deref());

    if args.cst {
        let parsed = parse(&expr.text);
        print!(
            "{}",
            TreePrinter::cst(parsed.syntax())
                .with_spans(args.spans)
                .with_trivia(true)
                .dump()
        );
        return;
    }

    let result = parse_tree(&expr.text);

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Some(root) = &result.root {
        print!("{}", TreePrinter::new(root).with_spans(args.spans).dump());
    }

    if !result.diagnostics.is_empty() {
        let mut printer = DiagnosticsPrinter::new(&result.diagnostics)
            .source(&expr.text)
            .colored(args.color);
        if let Some(origin) = expr.origin.as_deref() {
            printer = printer.path(origin);
        }
        eprintln!("{}", printer.render());
    }
}
