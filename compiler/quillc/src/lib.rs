//! Quill driver.
//!
//! Wires the pipeline together (scan, parse, interpret) and hosts the
//! command handlers used by the `quill` binary. This is the only crate
//! that turns errors into output.

pub mod commands;

use std::sync::Once;

pub use quill_diagnostic::Error;
use quill_diagnostic::SyntaxError;
use quill_eval::{InterpreterBuilder, SharedPrintHandler};
use quill_ir::{Stmt, Token};
use tracing::debug;

/// Options for one program run.
#[derive(Clone, Debug, Default)]
pub struct InterpreterConfig {
    /// Maximum nesting of user function calls. `None` is unlimited.
    pub max_call_depth: Option<usize>,
    /// Where `print` writes. Defaults to stdout.
    pub print_handler: Option<SharedPrintHandler>,
}

/// Scan `source` into tokens.
pub fn tokenize(source: &str) -> Result<Vec<Token>, SyntaxError> {
    quill_lexer::scan(source)
}

/// Scan and parse `source` into top-level statements.
pub fn parse_program(source: &str) -> Result<Vec<Stmt>, SyntaxError> {
    let tokens = tokenize(source)?;
    quill_parse::parse(&tokens)
}

/// Run a complete program.
pub fn run_source(source: &str, config: &InterpreterConfig) -> Result<(), Error> {
    let program = parse_program(source)?;
    debug!(statements = program.len(), "running program");

    let mut builder = InterpreterBuilder::new();
    if let Some(handler) = &config.print_handler {
        builder = builder.print_handler(handler.clone());
    }
    if let Some(depth) = config.max_call_depth {
        builder = builder.max_call_depth(depth);
    }
    let mut interpreter = builder.build();
    interpreter.interpret(&program)?;
    Ok(())
}

static TRACING_INIT: Once = Once::new();

/// Install the diagnostics subscriber.
///
/// Does nothing unless `RUST_LOG` is set; safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
