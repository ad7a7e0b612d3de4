//! miniexpr command-line evaluator
//!
//! Reads one whitespace-delimited expression token from stdin, evaluates it
//! and prints the integer result. Logging goes to stderr so stdout carries
//! only the result line.

use std::io::{self, Read, Write};

use anyhow::Result;
use tracing::debug;

use miniexpr_core::eval_expr;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .init();

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    // Only the first token counts; no token at all is a silent no-op.
    let Some(token) = first_token(&input) else {
        debug!("no input token");
        return Ok(());
    };

    debug!("evaluating: {}", token);
    let result = eval_expr(token)?;

    let mut stdout = io::stdout();
    writeln!(stdout, "{}", result)?;
    stdout.flush()?;

    Ok(())
}

/// First whitespace-delimited token of the input, if any
fn first_token(input: &str) -> Option<&str> {
    input.split_whitespace().next()
}
