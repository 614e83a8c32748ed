use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Expression text plus the name diagnostics should point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedExpr {
    pub text: String,
    pub origin: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("an expression is required: use a FILE argument, `-` for stdin, or -e/--expr")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn load_expr(input_path: Option<&Path>, expr_text: Option<&str>) -> Result<LoadedExpr, LoadError> {
    if let Some(text) = expr_text {
        return Ok(LoadedExpr {
            text: text.to_string(),
            origin: None,
        });
    }

    match input_path {
        Some(path) if path.as_os_str() == "-" => load_stdin(),
        Some(path) => load_file(path),
        None => Err(LoadError::Missing),
    }
}

fn load_stdin() -> Result<LoadedExpr, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(LoadedExpr {
        text: buf,
        origin: Some("<stdin>".to_string()),
    })
}

fn load_file(path: &Path) -> Result<LoadedExpr, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(LoadedExpr {
        text,
        origin: Some(path.to_string_lossy().into_owned()),
    })
}

/// Load the expression or exit with status 1.
pub fn load_or_exit(input_path: Option<&Path>, expr_text: Option<&str>) -> LoadedExpr {
    load_expr(input_path, expr_text).unwrap_or_else(|err| {
        eprintln!("error: {}", err);
        std::process::exit(1);
    })
}
