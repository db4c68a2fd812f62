use super::*;
use pretty_assertions::assert_eq;
use quill_ir::{Token, TokenType};

fn id(name: &str) -> Identifier {
    Identifier::new(Token::new(TokenType::Id, name, 3))
}

fn function(name: &str) -> FunctionDeclaration {
    FunctionDeclaration {
        id: id(name),
        params: Vec::new(),
        body: Vec::new(),
    }
}

#[test]
fn test_starts_with_global_scope() {
    let memory = MemoryScope::new();
    assert_eq!(memory.depth(), 1);
}

#[test]
fn test_undeclared_variable() {
    let memory = MemoryScope::new();
    let err = memory.get_variable(&id("x")).unwrap_err();
    assert_eq!(err.kind, RuntimeErrorKind::UndeclaredVariable);
    assert_eq!(err.line, 3);
    assert_eq!(err.found.as_deref(), Some("x"));
}

#[test]
fn test_inner_scope_sees_outer_bindings() {
    let mut memory = MemoryScope::new();
    memory.set_variable("a", Literal::int(1, 1));
    memory.add_scope();
    assert!(memory.has_variable("a"));
    assert_eq!(memory.get_variable(&id("a")).unwrap().text(), "1");
}

#[test]
fn test_bindings_vanish_with_their_scope() {
    let mut memory = MemoryScope::new();
    memory.add_scope();
    memory.set_variable("tmp", Literal::int(1, 1));
    assert!(memory.has_variable("tmp"));
    memory.remove_scope();
    assert!(!memory.has_variable("tmp"));
}

#[test]
fn test_assignment_updates_outer_binding() {
    let mut memory = MemoryScope::new();
    memory.set_variable("a", Literal::int(1, 1));
    memory.add_scope();
    memory.set_variable("a", Literal::int(2, 2));
    memory.remove_scope();
    assert_eq!(memory.get_variable(&id("a")).unwrap().text(), "2");
}

#[test]
fn test_current_scope_binding_shadows() {
    let mut memory = MemoryScope::new();
    memory.set_variable("a", Literal::int(1, 1));
    memory.add_scope();
    memory.set_in_current_scope("a", Literal::string("inner", 2));
    assert_eq!(memory.get_variable(&id("a")).unwrap().text(), "inner");
    memory.remove_scope();
    assert_eq!(memory.get_variable(&id("a")).unwrap().text(), "1");
}

#[test]
fn test_remove_scope_on_empty_stack_is_noop() {
    let mut memory = MemoryScope::new();
    memory.remove_scope();
    memory.remove_scope();
    assert_eq!(memory.depth(), 0);
    memory.set_variable("a", Literal::int(1, 1));
    assert!(memory.has_variable("a"));
    assert_eq!(memory.depth(), 1);
}

#[test]
fn test_functions_follow_scopes() {
    let outer = function("outer");
    let inner = function("inner");
    let mut memory = MemoryScope::new();
    memory.set_function(&outer);
    memory.add_scope();
    memory.set_function(&inner);
    assert!(memory.has_function("outer"));
    assert!(memory.has_function("inner"));
    assert_eq!(memory.get_function(&id("inner")).unwrap().id.name(), "inner");
    memory.remove_scope();
    assert!(!memory.has_function("inner"));

    let err = memory.get_function(&id("inner")).unwrap_err();
    assert_eq!(err.kind, RuntimeErrorKind::UndeclaredFunction);
}
