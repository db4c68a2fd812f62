//! Inspection commands: `lex` and `parse`.

use super::read_file;
use crate::{parse_program, tokenize, Error};

/// Print the token stream of a file, one token per line.
pub fn lex_file(path: &str) {
    let source = read_file(path);
    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("{}", Error::from(err));
            std::process::exit(1);
        }
    };

    println!("Tokens for '{path}' ({} tokens):", tokens.len());
    for token in &tokens {
        println!(
            "  {}: {} @ {}",
            token.kind,
            token.literal.escape_debug(),
            token.line
        );
    }
}

/// Print a one-line summary of each top-level statement of a file.
pub fn parse_file(path: &str) {
    let source = read_file(path);
    let program = match parse_program(&source) {
        Ok(program) => program,
        Err(err) => {
            eprintln!("{}", Error::from(err));
            std::process::exit(1);
        }
    };

    println!("Parse result for '{path}' ({} statements):", program.len());
    for stmt in &program {
        println!("  {:>4} | {}", stmt.line(), stmt.describe());
    }
}
