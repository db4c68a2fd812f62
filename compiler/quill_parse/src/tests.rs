use super::*;
use pretty_assertions::assert_eq;
use quill_ir::{ElseBranch, Expr};

fn parse_source(source: &str) -> Result<Vec<Stmt>, SyntaxError> {
    let tokens = quill_lexer::scan(source).unwrap();
    parse(&tokens)
}

fn parse_ok(source: &str) -> Vec<Stmt> {
    parse_source(source).unwrap()
}

fn parse_err(source: &str) -> SyntaxError {
    parse_source(source).unwrap_err()
}

/// Initializer of the single declaration in `source`.
fn init_of(source: &str) -> Expr {
    let mut program = parse_ok(source);
    assert_eq!(program.len(), 1);
    match program.remove(0) {
        Stmt::VariableDeclaration(decl) => decl.init,
        other => panic!("expected a declaration, got {other:?}"),
    }
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let Expr::Binary(sum) = init_of("int a = 1 + 2 * 3") else {
        panic!("expected a binary expression");
    };
    assert_eq!(sum.operator.kind, TokenType::Plus);
    let Expr::Binary(product) = sum.right.as_ref() else {
        panic!("expected the product on the right");
    };
    assert_eq!(product.operator.kind, TokenType::Mult);
}

#[test]
fn test_levels_are_left_associative() {
    assert_eq!(init_of("int a = 1 - 2 - 3").to_string(), "((1 - 2) - 3)");
    assert_eq!(init_of("int a = 8 / 4 % 3").to_string(), "((8 / 4) % 3)");
}

#[test]
fn test_full_precedence_ladder() {
    assert_eq!(
        init_of("bool a = x || y && b < c + d * e == true").to_string(),
        "(x || (y && ((b < (c + (d * e))) == true)))"
    );
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(init_of("int a = (1 + 2) * 3").to_string(), "((1 + 2) * 3)");
}

#[test]
fn test_call_expression_with_arguments() {
    assert_eq!(
        init_of("int a = add(1, mul(2, b)) + 1").to_string(),
        "(add(1, mul(2, b)) + 1)"
    );
}

#[test]
fn test_program_with_blank_lines_and_comments() {
    let program = parse_ok("\n\n# header\nint a = 1\n\n\nstr s = \"x\"\n");
    assert_eq!(program.len(), 2);
    assert_eq!(program[0].line(), 4);
    assert_eq!(program[1].line(), 7);
}

#[test]
fn test_empty_program() {
    assert!(parse_ok("").is_empty());
    assert!(parse_ok("\n\n").is_empty());
}

#[test]
fn test_function_declaration() {
    let program = parse_ok("fun add(int a, int b) {\n    return a + b\n}\n");
    let [Stmt::FunctionDeclaration(decl)] = program.as_slice() else {
        panic!("expected one function declaration");
    };
    assert_eq!(decl.id.name(), "add");
    let names: Vec<&str> = decl.params.iter().map(|p| p.id.name()).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(decl.body.len(), 1);
}

#[test]
fn test_function_without_parameters() {
    let program = parse_ok("fun hello() {\n    print(\"hi\")\n}\nhello()\n");
    assert_eq!(program.len(), 2);
    assert!(matches!(&program[1], Stmt::Call(call) if call.args.is_empty()));
}

#[test]
fn test_bare_return_before_newline_and_brace() {
    let program = parse_ok("fun f() {\n    return\n}\nfun g() { return }\n");
    for stmt in &program {
        let Stmt::FunctionDeclaration(decl) = stmt else {
            panic!("expected function declarations");
        };
        assert!(matches!(
            decl.body.as_slice(),
            [Stmt::Return(ret)] if ret.value.is_none()
        ));
    }
}

#[test]
fn test_else_on_following_line() {
    let program = parse_ok("if a {\n    x = 1\n}\nelse {\n    x = 2\n}\n");
    let [Stmt::Conditional(cond)] = program.as_slice() else {
        panic!("expected one conditional");
    };
    assert!(matches!(&cond.next, Some(ElseBranch::Block(block)) if block.len() == 1));
}

#[test]
fn test_else_if_chain() {
    let program = parse_ok("if a {\n} else if b {\n} else if c {\n} else {\n}\n");
    assert_eq!(
        program[0].describe(),
        "Conditional a { 0 statements } else if b { 0 statements } \
         else if c { 0 statements } else { 0 statements }"
    );
}

#[test]
fn test_conditional_without_else_keeps_next_statement() {
    let program = parse_ok("if a {\n}\n\nx = 1\n");
    assert_eq!(program.len(), 2);
    assert!(matches!(&program[0], Stmt::Conditional(cond) if cond.next.is_none()));
}

#[test]
fn test_while_loop() {
    let program = parse_ok("while i < 10 {\n    i = i + 1\n}\n");
    assert_eq!(
        program[0].describe(),
        "WhileStatement (i < 10) { 1 statement }"
    );
}

#[test]
fn test_last_statement_needs_no_newline() {
    assert_eq!(parse_ok("int a = 1").len(), 1);
}

#[test]
fn test_parsing_is_deterministic() {
    let source = "fun f(int n) {\n    if n < 2 {\n        return n\n    }\n    return n * 2\n}\nprint(f(3))\n";
    let tokens = quill_lexer::scan(source).unwrap();
    assert_eq!(parse(&tokens).unwrap(), parse(&tokens).unwrap());
}

#[test]
fn test_expect_id() {
    let err = parse_err("int = 4");
    assert_eq!(err.kind, SyntaxErrorKind::ExpectId);
    assert_eq!(err.line, 1);
}

#[test]
fn test_expect_assign() {
    let err = parse_err("\nint a 4\n");
    assert_eq!(err.kind, SyntaxErrorKind::ExpectAssign);
    assert_eq!(err.line, 2);
    assert_eq!(err.found.as_deref(), Some("4"));
}

#[test]
fn test_expect_newline() {
    let err = parse_err("int a = 4 5\n");
    assert_eq!(err.kind, SyntaxErrorKind::ExpectNewline);
}

#[test]
fn test_expect_type() {
    let err = parse_err("fun f(a) {\n}\n");
    assert_eq!(err.kind, SyntaxErrorKind::ExpectType);
    assert_eq!(err.found.as_deref(), Some("a"));
}

#[test]
fn test_expect_opening_paren() {
    let err = parse_err("fun f {\n}\n");
    assert_eq!(err.kind, SyntaxErrorKind::ExpectOpeningParen);
}

#[test]
fn test_expect_closing_paren() {
    let err = parse_err("x = (1 + 2\n");
    assert_eq!(err.kind, SyntaxErrorKind::ExpectClosingParen);
    assert_eq!(err.line, 1);
    assert_eq!(err.found, None);
}

#[test]
fn test_expect_opening_brace() {
    let err = parse_err("while true\n{\n}\n");
    assert_eq!(err.kind, SyntaxErrorKind::ExpectOpeningBrace);
}

#[test]
fn test_expect_closing_brace() {
    let err = parse_err("while true {\n    x = 1\n    5\n}\n");
    assert_eq!(err.kind, SyntaxErrorKind::ExpectClosingBrace);
    assert_eq!(err.line, 3);
    assert_eq!(err.found.as_deref(), Some("5"));
}

#[test]
fn test_unclosed_block_is_unexpected_eof() {
    let err = parse_err("while true {\n    x = 1\n");
    assert_eq!(err.kind, SyntaxErrorKind::UnexpectedEof);
    assert_eq!(err.line, 2);

    let err = parse_err("fun f() {");
    assert_eq!(err.kind, SyntaxErrorKind::UnexpectedEof);
    assert_eq!(err.line, 1);
}

#[test]
fn test_invalid_expression() {
    let err = parse_err("x = +\n");
    assert_eq!(err.kind, SyntaxErrorKind::InvalidExpression);
    assert_eq!(err.found.as_deref(), Some("+"));
}

#[test]
fn test_unexpected_character() {
    let err = parse_err("int a = 1\n}\n");
    assert_eq!(err.kind, SyntaxErrorKind::UnexpectedCharacter);
    assert_eq!(err.line, 2);
}

#[test]
fn test_unexpected_eof() {
    let err = parse_err("int a =");
    assert_eq!(err.kind, SyntaxErrorKind::UnexpectedEof);
    assert_eq!(err.line, 1);
}
