//! Expression evaluation.

use quill_diagnostic::{RuntimeError, RuntimeErrorKind};
use quill_ir::{Expr, Literal};
use quill_stack::ensure_sufficient_stack;

use super::{operators, Interpreter};

impl<'a> Interpreter<'a> {
    /// Evaluate an expression to a literal.
    pub fn eval_expr(&mut self, expr: &'a Expr) -> Result<Literal, RuntimeError> {
        ensure_sufficient_stack(|| match expr {
            Expr::Literal(literal) => Ok(literal.clone()),
            Expr::Identifier(id) => self.memory.get_variable(id).cloned(),
            Expr::Binary(binary) => {
                let left = self.eval_expr(&binary.left)?;
                let right = self.eval_expr(&binary.right)?;
                operators::apply_binary(&binary.operator, &left, &right)
            }
            Expr::Call(call) => self.call_function(call)?.ok_or_else(|| {
                RuntimeError::new(RuntimeErrorKind::ExpectedReturn, call.id.line())
                    .with_found(call.id.name())
            }),
        })
    }
}
