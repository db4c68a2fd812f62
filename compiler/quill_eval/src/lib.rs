//! Tree-walking interpreter for Quill.
//!
//! - [`MemoryScope`]: nested variable and function bindings
//! - [`NATIVE_FUNCTIONS`]: the built-ins (`print`, `pow`, `len`)
//! - [`PrintHandlerImpl`]: where program output goes
//! - [`Interpreter`]: executes a parsed program

mod interpreter;
mod memory;
mod native;
mod print_handler;

pub use interpreter::{Interpreter, InterpreterBuilder};
pub use memory::MemoryScope;
pub use native::{find_native, is_native, NativeFn, NativeFunction, NativeValue, NATIVE_FUNCTIONS};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
