//! Function call dispatch: natives first, then user functions.

use quill_diagnostic::{RuntimeError, RuntimeErrorKind};
use quill_ir::{FunctionCall, Literal};
use tracing::debug;

use super::Interpreter;
use crate::native::{find_native, NativeFunction, NativeValue};

impl<'a> Interpreter<'a> {
    /// Call a native or user function, returning its value if it has one.
    #[tracing::instrument(level = "debug", skip_all, fields(name = call.id.name(), line = call.id.line()))]
    pub fn call_function(&mut self, call: &'a FunctionCall) -> Result<Option<Literal>, RuntimeError> {
        if let Some(native) = find_native(call.id.name()) {
            return self.call_native(native, call);
        }

        let decl = self.memory.get_function(&call.id)?;
        let line = call.id.line();
        if decl.params.len() != call.args.len() {
            return Err(
                RuntimeError::new(RuntimeErrorKind::InvalidNumberOfArgs, line)
                    .with_found(call.id.name()),
            );
        }
        if self
            .max_call_depth
            .is_some_and(|limit| self.call_depth >= limit)
        {
            return Err(
                RuntimeError::new(RuntimeErrorKind::RecursionLimit, line).with_found(call.id.name()),
            );
        }

        let mut bindings = Vec::with_capacity(call.args.len());
        for (param, arg) in decl.params.iter().zip(&call.args) {
            bindings.push((param.id.name(), self.eval_expr(arg)?));
        }

        self.call_depth += 1;
        let result = self.interpret_block(&decl.body, bindings);
        self.call_depth -= 1;
        debug!(returned = result.as_ref().is_ok_and(Option::is_some), "call finished");
        result
    }

    fn call_native(
        &mut self,
        native: &NativeFunction,
        call: &'a FunctionCall,
    ) -> Result<Option<Literal>, RuntimeError> {
        let line = call.id.line();
        let fail = |kind| RuntimeError::new(kind, line).with_found(native.name);

        let mut args = Vec::with_capacity(call.args.len());
        for arg in &call.args {
            let literal = self.eval_expr(arg)?;
            args.push(NativeValue::from_literal(&literal));
        }

        let result = (native.call)(&args, &self.print_handler).map_err(fail)?;
        Ok(result.map(|value| value.into_literal(line)))
    }
}
