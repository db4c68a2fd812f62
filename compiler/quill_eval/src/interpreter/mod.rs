//! Tree-walking interpreter.
//!
//! Statements are executed in order against a [`MemoryScope`]. Every block
//! gets its own scope. Early exit is modelled by statements yielding a
//! value: a `return` stops its block, and a nested statement that yields a
//! value stops the enclosing block with that value.

mod builder;
mod expr;
mod function_call;
mod operators;
mod scope_guard;

pub use builder::InterpreterBuilder;

use quill_diagnostic::{RuntimeError, RuntimeErrorKind};
use quill_ir::{
    Assignment, Conditional, ElseBranch, FunctionDeclaration, Literal, Stmt, VariableDeclaration,
    WhileStatement,
};
use quill_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::native::is_native;
use crate::{MemoryScope, SharedPrintHandler};

/// Interpreter for one program.
///
/// `'a` is the lifetime of the program's syntax tree; function
/// declarations are borrowed from it rather than copied.
pub struct Interpreter<'a> {
    memory: MemoryScope<'a>,
    print_handler: SharedPrintHandler,
    /// `None` means unlimited.
    max_call_depth: Option<usize>,
    call_depth: usize,
}

impl<'a> Interpreter<'a> {
    /// An interpreter printing to stdout with no call-depth limit.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn memory(&self) -> &MemoryScope<'a> {
        &self.memory
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Run a whole program.
    ///
    /// Values produced by top-level statements are discarded. A `return`
    /// at the top level is `INVALID_STATEMENT`.
    pub fn interpret(&mut self, program: &'a [Stmt]) -> Result<(), RuntimeError> {
        debug!(statements = program.len(), "interpret");
        for stmt in program {
            if let Some(value) = self.interpret_statement(stmt)? {
                trace!(value = %value, "discarding top-level value");
            }
        }
        Ok(())
    }

    /// Execute one statement, returning the value it yields, if any.
    pub fn interpret_statement(
        &mut self,
        stmt: &'a Stmt,
    ) -> Result<Option<Literal>, RuntimeError> {
        trace!(line = stmt.line(), "statement");
        match stmt {
            Stmt::VariableDeclaration(decl) => {
                self.variable_declaration(decl)?;
                Ok(None)
            }
            Stmt::FunctionDeclaration(decl) => {
                self.function_declaration(decl)?;
                Ok(None)
            }
            Stmt::Assignment(assign) => {
                self.assignment(assign)?;
                Ok(None)
            }
            Stmt::Conditional(cond) => self.conditional(cond),
            Stmt::While(stmt) => self.while_loop(stmt),
            Stmt::Call(call) => self.call_function(call),
            Stmt::Return(ret) => Err(RuntimeError::new(
                RuntimeErrorKind::InvalidStatement,
                ret.line,
            )
            .with_found("return")),
        }
    }

    fn variable_declaration(&mut self, decl: &'a VariableDeclaration) -> Result<(), RuntimeError> {
        let name = decl.id.name();
        if self.memory.has_variable(name) {
            return Err(
                RuntimeError::new(RuntimeErrorKind::DeclaredVariable, decl.id.line())
                    .with_found(name),
            );
        }

        let value = self.eval_expr(&decl.init)?;
        if value.kind() != decl.ty.kind() {
            return Err(
                RuntimeError::new(RuntimeErrorKind::InvalidVariableType, decl.id.line())
                    .with_found(name),
            );
        }

        self.memory.set_variable(name, value);
        Ok(())
    }

    fn assignment(&mut self, assign: &'a Assignment) -> Result<(), RuntimeError> {
        let name = assign.id.name();
        if !self.memory.has_variable(name) {
            return Err(
                RuntimeError::new(RuntimeErrorKind::UndeclaredVariable, assign.id.line())
                    .with_found(name),
            );
        }
        let value = self.eval_expr(&assign.value)?;
        self.memory.set_variable(name, value);
        Ok(())
    }

    fn function_declaration(&mut self, decl: &'a FunctionDeclaration) -> Result<(), RuntimeError> {
        let name = decl.id.name();
        if self.memory.has_function(name) || is_native(name) {
            return Err(
                RuntimeError::new(RuntimeErrorKind::DeclaredFunction, decl.id.line())
                    .with_found(name),
            );
        }
        self.memory.set_function(decl);
        Ok(())
    }

    fn conditional(&mut self, cond: &'a Conditional) -> Result<Option<Literal>, RuntimeError> {
        let condition = self.eval_expr(&cond.condition)?;
        if operators::to_boolean(&condition) {
            return self.interpret_block(&cond.then_block, Vec::new());
        }
        match &cond.next {
            Some(ElseBranch::If(next)) => self.conditional(next),
            Some(ElseBranch::Block(block)) => self.interpret_block(block, Vec::new()),
            None => Ok(None),
        }
    }

    fn while_loop(&mut self, stmt: &'a WhileStatement) -> Result<Option<Literal>, RuntimeError> {
        loop {
            let condition = self.eval_expr(&stmt.condition)?;
            if !operators::to_boolean(&condition) {
                return Ok(None);
            }
            if let Some(value) = self.interpret_block(&stmt.body, Vec::new())? {
                return Ok(Some(value));
            }
        }
    }

    /// Run `block` in a fresh scope seeded with `bindings`.
    ///
    /// The scope is popped on every exit path, errors included.
    pub(crate) fn interpret_block(
        &mut self,
        block: &'a [Stmt],
        bindings: Vec<(&'a str, Literal)>,
    ) -> Result<Option<Literal>, RuntimeError> {
        ensure_sufficient_stack(|| {
            let mut scoped = self.scoped();
            for (name, value) in bindings {
                scoped.memory.set_in_current_scope(name, value);
            }
            for stmt in block {
                if let Stmt::Return(ret) = stmt {
                    return match &ret.value {
                        Some(expr) => scoped.eval_expr(expr).map(Some),
                        None => Ok(None),
                    };
                }
                if let Some(value) = scoped.interpret_statement(stmt)? {
                    return Ok(Some(value));
                }
            }
            Ok(None)
        })
    }
}

impl Default for Interpreter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
