//! Binding environment for the interpreter.
//!
//! Two parallel stacks of maps, one for variables and one for functions.
//! A scope is pushed for every block the interpreter enters and popped when
//! it leaves. Lookups walk from the innermost scope outwards.

use quill_diagnostic::{RuntimeError, RuntimeErrorKind};
use quill_ir::{FunctionDeclaration, Identifier, Literal};
use rustc_hash::FxHashMap;
use tracing::trace;

type VariableScope = FxHashMap<String, Literal>;
type FunctionScope<'a> = FxHashMap<String, &'a FunctionDeclaration>;

/// Scope stack for one interpreter run.
///
/// Function declarations are borrowed from the program being run, so the
/// scope cannot outlive it.
#[derive(Debug)]
pub struct MemoryScope<'a> {
    variables: Vec<VariableScope>,
    functions: Vec<FunctionScope<'a>>,
}

impl<'a> MemoryScope<'a> {
    /// Create a scope stack holding only the global scope.
    pub fn new() -> Self {
        let mut memory = MemoryScope {
            variables: Vec::new(),
            functions: Vec::new(),
        };
        memory.add_scope();
        memory
    }

    /// Number of scopes currently on the stack.
    #[inline]
    pub fn depth(&self) -> usize {
        self.variables.len()
    }

    pub fn add_scope(&mut self) {
        self.variables.push(VariableScope::default());
        self.functions.push(FunctionScope::default());
        trace!(depth = self.depth(), "push scope");
    }

    /// Pop the innermost scope. Popping an empty stack does nothing.
    pub fn remove_scope(&mut self) {
        self.variables.pop();
        self.functions.pop();
        trace!(depth = self.depth(), "pop scope");
    }

    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.iter().rev().any(|scope| scope.contains_key(name))
    }

    /// Look up a variable, innermost binding first.
    pub fn get_variable(&self, id: &Identifier) -> Result<&Literal, RuntimeError> {
        self.variables
            .iter()
            .rev()
            .find_map(|scope| scope.get(id.name()))
            .ok_or_else(|| {
                RuntimeError::new(RuntimeErrorKind::UndeclaredVariable, id.line())
                    .with_found(id.name())
            })
    }

    /// Overwrite the innermost existing binding of `name`, or declare it in
    /// the current scope if there is none.
    pub fn set_variable(&mut self, name: &str, value: Literal) {
        let existing = self
            .variables
            .iter_mut()
            .rev()
            .find_map(|scope| scope.get_mut(name));
        match existing {
            Some(slot) => *slot = value,
            None => self.set_in_current_scope(name, value),
        }
    }

    /// Bind `name` in the innermost scope, shadowing any outer binding.
    pub fn set_in_current_scope(&mut self, name: &str, value: Literal) {
        if self.variables.is_empty() {
            self.add_scope();
        }
        if let Some(scope) = self.variables.last_mut() {
            scope.insert(name.to_owned(), value);
        }
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.functions.iter().rev().any(|scope| scope.contains_key(name))
    }

    /// Look up a user function, innermost declaration first.
    pub fn get_function(&self, id: &Identifier) -> Result<&'a FunctionDeclaration, RuntimeError> {
        self.functions
            .iter()
            .rev()
            .find_map(|scope| scope.get(id.name()).copied())
            .ok_or_else(|| {
                RuntimeError::new(RuntimeErrorKind::UndeclaredFunction, id.line())
                    .with_found(id.name())
            })
    }

    /// Register a function in the current scope.
    pub fn set_function(&mut self, declaration: &'a FunctionDeclaration) {
        if self.functions.is_empty() {
            self.add_scope();
        }
        if let Some(scope) = self.functions.last_mut() {
            scope.insert(declaration.id.name().to_owned(), declaration);
        }
    }
}

impl Default for MemoryScope<'_> {
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
mod tests;
