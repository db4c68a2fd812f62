//! Error types for the Quill pipeline.
//!
//! Two families, one per phase:
//! - `SyntaxError`: raised while scanning or parsing
//! - `RuntimeError`: raised while interpreting
//!
//! Both carry a reason (`*Kind`), the source line, and optionally the
//! offending text. Errors are plain values propagated with `?`; no stage
//! recovers from them, and only the driver turns them into output.

use thiserror::Error;

/// Reason codes for scan and parse failures.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SyntaxErrorKind {
    UnknownCharacter,
    ExpectAssign,
    ExpectId,
    ExpectNewline,
    ExpectType,
    ExpectOpeningParen,
    ExpectClosingParen,
    ExpectOpeningBrace,
    ExpectClosingBrace,
    InvalidExpression,
    InvalidStatement,
    UnexpectedCharacter,
    UnexpectedEof,
    UnknownError,
}

impl SyntaxErrorKind {
    /// Human-readable reason.
    pub fn message(self) -> &'static str {
        match self {
            SyntaxErrorKind::UnknownCharacter => "UNKNOWN CHARACTER",
            SyntaxErrorKind::ExpectAssign => "EXPECTED ASSIGNMENT",
            SyntaxErrorKind::ExpectId => "EXPECTED IDENTIFIER",
            SyntaxErrorKind::ExpectNewline => "EXPECTED NEWLINE",
            SyntaxErrorKind::ExpectType => "EXPECTED TYPE",
            SyntaxErrorKind::ExpectOpeningParen => "EXPECTED OPENING PARENTHESIS",
            SyntaxErrorKind::ExpectClosingParen => "EXPECTED CLOSING PARENTHESIS",
            SyntaxErrorKind::ExpectOpeningBrace => "EXPECTED OPENING BRACE",
            SyntaxErrorKind::ExpectClosingBrace => "EXPECTED CLOSING BRACE",
            SyntaxErrorKind::InvalidExpression => "INVALID EXPRESSION",
            SyntaxErrorKind::InvalidStatement => "INVALID STATEMENT",
            SyntaxErrorKind::UnexpectedCharacter => "UNEXPECTED CHARACTER",
            SyntaxErrorKind::UnexpectedEof => "UNEXPECTED END OF FILE",
            SyntaxErrorKind::UnknownError => "UNKNOWN ERROR",
        }
    }

    /// Stable code name, e.g. `EXPECT_NEWLINE`.
    pub fn code(self) -> &'static str {
        match self {
            SyntaxErrorKind::UnknownCharacter => "UNKNOWN_CHARACTER",
            SyntaxErrorKind::ExpectAssign => "EXPECT_ASSIGN",
            SyntaxErrorKind::ExpectId => "EXPECT_ID",
            SyntaxErrorKind::ExpectNewline => "EXPECT_NEWLINE",
            SyntaxErrorKind::ExpectType => "EXPECT_TYPE",
            SyntaxErrorKind::ExpectOpeningParen => "EXPECT_OPENING_PAREN",
            SyntaxErrorKind::ExpectClosingParen => "EXPECT_CLOSING_PAREN",
            SyntaxErrorKind::ExpectOpeningBrace => "EXPECT_OPENING_BRACE",
            SyntaxErrorKind::ExpectClosingBrace => "EXPECT_CLOSING_BRACE",
            SyntaxErrorKind::InvalidExpression => "INVALID_EXPRESSION",
            SyntaxErrorKind::InvalidStatement => "INVALID_STATEMENT",
            SyntaxErrorKind::UnexpectedCharacter => "UNEXPECTED_CHARACTER",
            SyntaxErrorKind::UnexpectedEof => "UNEXPECTED_EOF",
            SyntaxErrorKind::UnknownError => "UNKNOWN_ERROR",
        }
    }
}

impl std::fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Reason codes for interpretation failures.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RuntimeErrorKind {
    DeclaredFunction,
    DeclaredVariable,
    DivisionByZero,
    ExpectedBoolean,
    ExpectedInteger,
    ExpectedReturn,
    ExpectedString,
    IntegerOverflow,
    InvalidExpression,
    InvalidNumberOfArgs,
    InvalidStatement,
    InvalidVariableType,
    RecursionLimit,
    UndeclaredFunction,
    UndeclaredVariable,
    UnknownError,
}

impl RuntimeErrorKind {
    /// Human-readable reason.
    pub fn message(self) -> &'static str {
        match self {
            RuntimeErrorKind::DeclaredFunction => "FUNCTION ALREADY DECLARED",
            RuntimeErrorKind::DeclaredVariable => "VARIABLE ALREADY DECLARED",
            RuntimeErrorKind::DivisionByZero => "DIVISION BY ZERO",
            RuntimeErrorKind::ExpectedBoolean => "EXPECTED A BOOLEAN VALUE",
            RuntimeErrorKind::ExpectedInteger => "EXPECTED A INTEGER VALUE",
            RuntimeErrorKind::ExpectedReturn => "EXPECTED A RETURN VALUE",
            RuntimeErrorKind::ExpectedString => "EXPECTED A STRING VALUE",
            RuntimeErrorKind::IntegerOverflow => "INTEGER OVERFLOW",
            RuntimeErrorKind::InvalidExpression => "INVALID EXPRESSION",
            RuntimeErrorKind::InvalidNumberOfArgs => "INVALID NUMBER OF ARGS",
            RuntimeErrorKind::InvalidStatement => "INVALID STATEMENT",
            RuntimeErrorKind::InvalidVariableType => "INVALID VARIABLE TYPE",
            RuntimeErrorKind::RecursionLimit => "MAXIMUM CALL DEPTH EXCEEDED",
            RuntimeErrorKind::UndeclaredFunction => "UNDECLARED FUNCTION",
            RuntimeErrorKind::UndeclaredVariable => "UNDECLARED VARIABLE",
            RuntimeErrorKind::UnknownError => "UNKNOWN ERROR",
        }
    }

    /// Stable code name, e.g. `UNDECLARED_VARIABLE`.
    pub fn code(self) -> &'static str {
        match self {
            RuntimeErrorKind::DeclaredFunction => "DECLARED_FUNCTION",
            RuntimeErrorKind::DeclaredVariable => "DECLARED_VARIABLE",
            RuntimeErrorKind::DivisionByZero => "DIVISION_BY_ZERO",
            RuntimeErrorKind::ExpectedBoolean => "EXPECTED_BOOLEAN",
            RuntimeErrorKind::ExpectedInteger => "EXPECTED_INTEGER",
            RuntimeErrorKind::ExpectedReturn => "EXPECTED_RETURN",
            RuntimeErrorKind::ExpectedString => "EXPECTED_STRING",
            RuntimeErrorKind::IntegerOverflow => "INTEGER_OVERFLOW",
            RuntimeErrorKind::InvalidExpression => "INVALID_EXPRESSION",
            RuntimeErrorKind::InvalidNumberOfArgs => "INVALID_NUMBER_OF_ARGS",
            RuntimeErrorKind::InvalidStatement => "INVALID_STATEMENT",
            RuntimeErrorKind::InvalidVariableType => "INVALID_VARIABLE_TYPE",
            RuntimeErrorKind::RecursionLimit => "RECURSION_LIMIT",
            RuntimeErrorKind::UndeclaredFunction => "UNDECLARED_FUNCTION",
            RuntimeErrorKind::UndeclaredVariable => "UNDECLARED_VARIABLE",
            RuntimeErrorKind::UnknownError => "UNKNOWN_ERROR",
        }
    }
}

impl std::fmt::Display for RuntimeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Renders ` 'text'` when the offending text is known.
fn found_suffix(found: &Option<String>) -> String {
    match found {
        Some(text) => format!(" '{text}'"),
        None => String::new(),
    }
}

/// A scan or parse failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}{} AT LINE {line}", found_suffix(.found))]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub line: usize,
    /// The offending source text, when there is one to show.
    pub found: Option<String>,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, line: usize) -> Self {
        SyntaxError {
            kind,
            line,
            found: None,
        }
    }

    #[must_use]
    pub fn with_found(mut self, found: impl Into<String>) -> Self {
        self.found = Some(found.into());
        self
    }
}

/// An interpretation failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}{} AT LINE {line}", found_suffix(.found))]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
    pub line: usize,
    /// The name or text involved (variable, function, operand).
    pub found: Option<String>,
}

impl RuntimeError {
    pub fn new(kind: RuntimeErrorKind, line: usize) -> Self {
        RuntimeError {
            kind,
            line,
            found: None,
        }
    }

    #[must_use]
    pub fn with_found(mut self, found: impl Into<String>) -> Self {
        self.found = Some(found.into());
        self
    }
}

/// Any failure of a full pipeline run.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("SYNTAX ERROR: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("RUNTIME ERROR: {0}")]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Line the failure was reported at.
    pub fn line(&self) -> usize {
        match self {
            Error::Syntax(err) => err.line,
            Error::Runtime(err) => err.line,
        }
    }

    /// Code name of the underlying reason.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Syntax(err) => err.kind.code(),
            Error::Runtime(err) => err.kind.code(),
        }
    }
}
