//! RAII scope guard.
//!
//! Holding `&mut Interpreter` and derefing to it lets the block body keep
//! calling interpreter methods while the guard guarantees the scope is
//! popped when it goes out of scope, on `?` early returns and unwinding
//! alike.

use std::ops::{Deref, DerefMut};

use super::Interpreter;

pub(super) struct ScopedInterpreter<'guard, 'a> {
    interpreter: &'guard mut Interpreter<'a>,
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        self.interpreter.memory.remove_scope();
    }
}

impl<'a> Deref for ScopedInterpreter<'_, 'a> {
    type Target = Interpreter<'a>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Push a scope and return a guard that pops it on drop.
    pub(super) fn scoped(&mut self) -> ScopedInterpreter<'_, 'a> {
        self.memory.add_scope();
        ScopedInterpreter { interpreter: self }
    }
}
