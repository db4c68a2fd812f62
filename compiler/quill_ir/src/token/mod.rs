//! Token types for the Quill scanner.
//!
//! `TokenType` names every lexical category. The matching rules that
//! recognise each category live in `quill_lexer`, which owns the ordered
//! rule table; this module only carries identity and classification.

use std::fmt;

/// Lexical category of a token.
///
/// Variant order follows the scanner's match priority.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenType {
    Newline,
    Whitespace,
    Comment,

    // Reserved words
    BoolType,
    Else,
    False,
    For,
    Fun,
    If,
    IntType,
    Null,
    Return,
    StrType,
    True,
    While,

    // Operators and punctuation
    And,
    Assign,
    Comma,
    Div,
    Dot,
    Eq,
    Geq,
    Gt,
    LeftBrace,
    Leq,
    LeftParen,
    Lt,
    Minus,
    Mod,
    Mult,
    Neq,
    Not,
    Or,
    Plus,
    RightBrace,
    RightParen,

    // Constants
    StringConstant,
    IntConstant,

    Id,
}

impl TokenType {
    /// The category's name as shown in token dumps and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TokenType::Newline => "T_NEWLINE",
            TokenType::Whitespace => "T_WHITESPACE",
            TokenType::Comment => "T_COMMENT",
            TokenType::BoolType => "T_BOOLTYPE",
            TokenType::Else => "T_ELSE",
            TokenType::False => "T_FALSE",
            TokenType::For => "T_FOR",
            TokenType::Fun => "T_FUN",
            TokenType::If => "T_IF",
            TokenType::IntType => "T_INTTYPE",
            TokenType::Null => "T_NULL",
            TokenType::Return => "T_RETURN",
            TokenType::StrType => "T_STRINGTYPE",
            TokenType::True => "T_TRUE",
            TokenType::While => "T_WHILE",
            TokenType::And => "T_AND",
            TokenType::Assign => "T_ASSIGN",
            TokenType::Comma => "T_COMMA",
            TokenType::Div => "T_DIV",
            TokenType::Dot => "T_DOT",
            TokenType::Eq => "T_EQ",
            TokenType::Geq => "T_GEQ",
            TokenType::Gt => "T_GT",
            TokenType::LeftBrace => "T_LCB",
            TokenType::Leq => "T_LEQ",
            TokenType::LeftParen => "T_LPAREN",
            TokenType::Lt => "T_LT",
            TokenType::Minus => "T_MINUS",
            TokenType::Mod => "T_MOD",
            TokenType::Mult => "T_MULT",
            TokenType::Neq => "T_NEQ",
            TokenType::Not => "T_NOT",
            TokenType::Or => "T_OR",
            TokenType::Plus => "T_PLUS",
            TokenType::RightBrace => "T_RCB",
            TokenType::RightParen => "T_RPAREN",
            TokenType::StringConstant => "T_STRINGCONSTANT",
            TokenType::IntConstant => "T_INTCONSTANT",
            TokenType::Id => "T_ID",
        }
    }

    /// Whether this token starts a variable declaration (`int`, `str`, `bool`).
    #[inline]
    pub fn is_type_keyword(self) -> bool {
        matches!(
            self,
            TokenType::IntType | TokenType::StrType | TokenType::BoolType
        )
    }

    /// Whether the scanner drops tokens of this category.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenType::Whitespace | TokenType::Comment)
    }

    /// The runtime kind of a constant token, or `None` for non-constants.
    pub fn literal_kind(self) -> Option<LiteralKind> {
        match self {
            TokenType::IntConstant => Some(LiteralKind::Int),
            TokenType::StringConstant => Some(LiteralKind::Str),
            TokenType::True | TokenType::False => Some(LiteralKind::Bool),
            TokenType::Null => Some(LiteralKind::Null),
            _ => None,
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runtime kind of a constant value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Int,
    Str,
    Bool,
    Null,
}

impl LiteralKind {
    /// Keyword spelling of the kind (`null` has no type keyword but still prints).
    pub fn keyword(self) -> &'static str {
        match self {
            LiteralKind::Int => "int",
            LiteralKind::Str => "str",
            LiteralKind::Bool => "bool",
            LiteralKind::Null => "null",
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A classified, line-tagged fragment of source text.
///
/// `literal` is the matched text; string constants have their quotes
/// stripped.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenType,
    pub literal: String,
    pub line: usize,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenType, literal: impl Into<String>, line: usize) -> Self {
        Token {
            kind,
            literal: literal.into(),
            line,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.literal)
    }
}
