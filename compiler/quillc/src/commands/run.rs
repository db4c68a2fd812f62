//! `quill run`: execute a program.

use tracing::info;

use super::read_file;
use crate::{run_source, InterpreterConfig};

/// Run the program at `path`, exiting with status 1 on any error.
pub fn run_file(path: &str, config: &InterpreterConfig) {
    let source = read_file(path);
    info!(path, bytes = source.len(), "run");
    if let Err(err) = run_source(&source, config) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
