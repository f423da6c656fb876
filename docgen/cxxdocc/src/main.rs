//! Token dump tool for the cxxdoc pipeline.
//!
//! Reads one source file, tokenizes it, and prints one `kind: text` line
//! per token. By default only significant tokens are shown (whitespace and
//! ordinary comments skipped, the same view the parser gets); `--trivia`
//! switches to the raw stream.
//!
//! Enable diagnostics with `RUST_LOG=cxxdocc=debug`.

use std::process::ExitCode;
use std::sync::Once;

use cxxdoc_lexer_core::{Token, TokenKind, Tokenizer};
use cxxdoc_parse::Parser;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
enum AppError {
    #[error("failed to read `{path}`: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("`{path}` halted on an invalid construct")]
    Halted { path: String },
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing once, only when `RUST_LOG` asks for it.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut trivia = false;
    let mut path = None;
    for arg in &args {
        match arg.as_str() {
            "--trivia" => trivia = true,
            "--help" | "-h" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            _ if !arg.starts_with('-') && path.is_none() => path = Some(arg.as_str()),
            _ => {
                eprintln!("error: unexpected argument '{arg}'");
                print_usage();
                return ExitCode::FAILURE;
            }
        }
    }

    let Some(path) = path else {
        eprintln!("error: missing file path");
        print_usage();
        return ExitCode::FAILURE;
    };

    match dump_file(path, trivia) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    eprintln!("Usage: cxxdocc <file> [--trivia]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --trivia    Show whitespace and comment tokens too");
}

/// Read, tokenize, and print one file. I/O stays here; the tokenizer only
/// ever sees an in-memory string.
fn dump_file(path: &str, trivia: bool) -> Result<(), AppError> {
    let source = std::fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_owned(),
        source,
    })?;
    debug!(path, bytes = source.len(), trivia, "tokenizing");

    let tokens = if trivia {
        raw_tokens(&source)
    } else {
        significant_tokens(&source)
    };
    debug!(path, count = tokens.len(), "tokenized");

    for token in &tokens {
        println!("{}: {}", token.kind.name(), token.text.escape_debug());
    }

    if tokens.iter().any(|t| t.kind == TokenKind::Error) {
        return Err(AppError::Halted {
            path: path.to_owned(),
        });
    }
    Ok(())
}

/// The full stream, terminal included.
fn raw_tokens(source: &str) -> Vec<Token> {
    Tokenizer::new(source).collect()
}

/// The parser's view: trivia skipped, terminal included.
fn significant_tokens(source: &str) -> Vec<Token> {
    let mut parser = Parser::new(source);
    let mut tokens = Vec::new();
    while !parser.at_end() {
        tokens.push(parser.bump());
    }
    tokens.push(parser.peek().clone());
    tokens
}
