//! `InterpreterBuilder` for configuring an [`Interpreter`].

use super::Interpreter;
use crate::{stdout_handler, MemoryScope, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// Defaults: output to stdout, no call-depth limit.
#[derive(Default)]
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: Option<usize>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where `print` writes to.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Fail with `RECURSION_LIMIT` once user function calls nest deeper
    /// than `depth`.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = Some(depth);
        self
    }

    pub fn build<'a>(self) -> Interpreter<'a> {
        Interpreter {
            memory: MemoryScope::new(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            max_call_depth: self.max_call_depth,
            call_depth: 0,
        }
    }
}
