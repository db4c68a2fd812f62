//! Command handlers for the `quill` CLI.
//!
//! Handlers print their results and exit the process with status 1 on
//! failure.

mod debug;
mod run;

pub use debug::{lex_file, parse_file};
pub use run::run_file;

/// Read a source file, or report why it could not be read and exit.
pub fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' is not valid UTF-8")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}
