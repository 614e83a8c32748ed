use std::path::PathBuf;

use colex_lib::{Token, tokenize};

use super::expr_loader::load_or_exit;

pub struct TokensArgs {
    pub input_path: Option<PathBuf>,
    pub expr_text: Option<String>,
    pub json: bool,
}

pub fn run(args: TokensArgs) {
    let expr = load_or_exit(args.input_path.as_deref(), args.expr_text.as_deref());
    let result = tokenize(&expr.text);

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

    for token in &result.tokens {
        println!("{}", render_token(token));
    }
    for diagnostic in &result.diagnostics {
        eprintln!("{}", diagnostic);
    }
}

/// One line per token: `line:col start..end kind "text"`, suffixed with
/// `invalid` for tokens covered by a diagnostic.
pub fn render_token(token: &Token) -> String {
    let mut line = format!(
        "{}:{} {}..{} {} {:?}",
        token.line, token.column, token.start, token.end, token.kind, token.text
    );
    if !token.is_valid {
        line.push_str(" invalid");
    }
    line
}
