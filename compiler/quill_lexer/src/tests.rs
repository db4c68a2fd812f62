use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(source: &str) -> Vec<TokenType> {
    scan(source).unwrap().into_iter().map(|t| t.kind).collect()
}

fn literals(source: &str) -> Vec<String> {
    scan(source).unwrap().into_iter().map(|t| t.literal).collect()
}

#[test]
fn test_declaration_and_call() {
    let source = "\n    str helloWorld = \"Hello World!\"\n    \n    print(helloWorld)\n";
    let tokens = scan(source).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenType::Newline, "\n", 1),
            Token::new(TokenType::StrType, "str", 2),
            Token::new(TokenType::Id, "helloWorld", 2),
            Token::new(TokenType::Assign, "=", 2),
            Token::new(TokenType::StringConstant, "Hello World!", 2),
            Token::new(TokenType::Newline, "\n", 2),
            Token::new(TokenType::Newline, "\n", 3),
            Token::new(TokenType::Id, "print", 4),
            Token::new(TokenType::LeftParen, "(", 4),
            Token::new(TokenType::Id, "helloWorld", 4),
            Token::new(TokenType::RightParen, ")", 4),
            Token::new(TokenType::Newline, "\n", 4),
        ]
    );
}

#[test]
fn test_unknown_character_reports_line_and_text() {
    let err = scan("int a = 1\nint b = 2 @x y\n").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnknownCharacter);
    assert_eq!(err.line, 2);
    assert_eq!(err.found.as_deref(), Some("@x"));
}

#[test]
fn test_semicolon_is_unknown() {
    let err = scan("\n    int str a = \"Not a valid character\";\n").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnknownCharacter);
    assert_eq!(err.line, 2);
}

#[test]
fn test_equality_is_not_two_assignments() {
    assert_eq!(
        kinds("a == b = c"),
        vec![
            TokenType::Id,
            TokenType::Eq,
            TokenType::Id,
            TokenType::Assign,
            TokenType::Id,
        ]
    );
}

#[test]
fn test_compound_operators_win_over_prefixes() {
    assert_eq!(
        kinds(">= > <= < != ! && ||"),
        vec![
            TokenType::Geq,
            TokenType::Gt,
            TokenType::Leq,
            TokenType::Lt,
            TokenType::Neq,
            TokenType::Not,
            TokenType::And,
            TokenType::Or,
        ]
    );
}

#[test]
fn test_type_keywords_need_whitespace() {
    assert_eq!(kinds("int x"), vec![TokenType::IntType, TokenType::Id]);
    assert_eq!(kinds("integer"), vec![TokenType::Id]);
    assert_eq!(kinds("strange"), vec![TokenType::Id]);
    assert_eq!(kinds("fun"), vec![TokenType::Id]);
}

#[test]
fn test_keyword_lookahead_does_not_consume() {
    let tokens = scan("return\n").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenType::Return, "return", 1),
            Token::new(TokenType::Newline, "\n", 1),
        ]
    );
}

#[test]
fn test_keywords_without_boundary_split_identifiers() {
    assert_eq!(kinds("elsewhere"), vec![TokenType::Else, TokenType::Id]);
    assert_eq!(literals("elsewhere"), vec!["else", "where"]);
    assert_eq!(kinds("format"), vec![TokenType::For, TokenType::Id]);
    assert_eq!(kinds("iffy"), vec![TokenType::If, TokenType::Id]);
}

#[test]
fn test_string_constant_stops_at_next_quote() {
    let tokens = scan("\"a\" + \"b\"").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenType::StringConstant, "a", 1),
            Token::new(TokenType::Plus, "+", 1),
            Token::new(TokenType::StringConstant, "b", 1),
        ]
    );
}

#[test]
fn test_unterminated_string_is_unknown() {
    let err = scan("str s = \"abc\nx").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnknownCharacter);
    assert_eq!(err.line, 1);
    assert_eq!(err.found.as_deref(), Some("\"abc"));
}

#[test]
fn test_empty_string_constant() {
    let tokens = scan("\"\"").unwrap();
    assert_eq!(tokens, vec![Token::new(TokenType::StringConstant, "", 1)]);
}

#[test]
fn test_comments_and_whitespace_are_dropped() {
    assert_eq!(
        kinds("int a = 1 # trailing comment\n\t# whole line\n"),
        vec![
            TokenType::IntType,
            TokenType::Id,
            TokenType::Assign,
            TokenType::IntConstant,
            TokenType::Newline,
            TokenType::Newline,
        ]
    );
}

#[test]
fn test_newline_carries_the_line_it_ends() {
    let lines: Vec<usize> = scan("a\n\nb\n").unwrap().iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 1, 2, 3, 3]);
}

#[test]
fn test_empty_source() {
    assert!(scan("").unwrap().is_empty());
    assert!(scan("  \t ").unwrap().is_empty());
}

fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z]{1,8}",
        "[0-9]{1,6}",
        prop::sample::select(vec![
            "&&", "=", ",", "/", ".", "==", ">=", ">", "{", "<=", "(", "<", "-", "%", "*",
            "!=", "!", "||", "+", "}", ")",
        ])
        .prop_map(String::from),
    ]
}

proptest! {
    #[test]
    fn test_literals_reconstruct_source(
        parts in prop::collection::vec(fragment(), 1..24),
        sep in prop::sample::select(vec![" ", "\t", "  "]),
    ) {
        let source = parts.join(sep);
        let tokens = scan(&source).unwrap();
        let rebuilt: String = tokens.iter().map(|t| t.literal.as_str()).collect();
        prop_assert_eq!(rebuilt, parts.concat());
    }

    #[test]
    fn test_one_newline_token_per_line_break(
        lines in prop::collection::vec("[a-z]{1,5}( [0-9]{1,3})?", 1..12),
    ) {
        let source = lines.join("\n");
        let tokens = scan(&source).unwrap();
        let newlines = tokens.iter().filter(|t| t.kind == TokenType::Newline).count();
        prop_assert_eq!(newlines, lines.len() - 1);
        let last_line = tokens.last().map_or(0, |t| t.line);
        prop_assert_eq!(last_line, lines.len());
    }
}
