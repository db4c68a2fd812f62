//! Stack growth for the recursive stages of the Quill pipeline.
//!
//! The parser recurses once per nesting level of expressions and blocks,
//! and the interpreter recurses once per nested block and per function
//! call. Deeply nested sources (or a runaway recursive Quill function)
//! would otherwise overflow the native stack before any error could be
//! reported.
//!
//! On native targets the stack is grown on demand through `stacker`;
//! on `wasm32` the wrapper is a plain call.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the
/// red zone.
///
/// Wrap the body of every function that recurses on user input:
///
/// ```text
/// fn eval_block(&mut self, block: &'a [Stmt]) -> Result<Flow, RuntimeError> {
///     ensure_sufficient_stack(|| self.eval_block_inner(block))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
