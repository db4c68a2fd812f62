//! Recursive descent parser for Quill.
//!
//! Input is the scanner's token list (newlines included, trivia removed);
//! output is the list of top-level statements. The first syntax error
//! aborts the parse; there is no recovery.
//!
//! Expression precedence, lowest first, each level left-associative:
//!
//! | Level | Operators |
//! |-------|-----------|
//! | or | `\|\|` |
//! | and | `&&` |
//! | equality | `==` `!=` |
//! | comparison | `<=` `>=` `>` `<` |
//! | additive | `+` `-` |
//! | multiplicative | `*` `/` `%` |

mod cursor;
mod grammar;

use cursor::Cursor;
use quill_diagnostic::{SyntaxError, SyntaxErrorKind};
use quill_ir::{Stmt, Token, TokenType};
use tracing::debug;

/// Parse a token list into top-level statements.
pub fn parse(tokens: &[Token]) -> Result<Vec<Stmt>, SyntaxError> {
    Parser::new(tokens).parse()
}

/// Parser state: a cursor over borrowed tokens.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse the whole token list.
    pub fn parse(mut self) -> Result<Vec<Stmt>, SyntaxError> {
        let mut program = Vec::new();
        loop {
            self.cursor.skip_newlines();
            if self.cursor.is_at_end() {
                break;
            }
            program.push(self.statement()?);
        }
        debug!(statements = program.len(), "parsed program");
        Ok(program)
    }

    /// Error located at `token`, quoting its text unless it is a newline.
    fn error_at(kind: SyntaxErrorKind, token: &Token) -> SyntaxError {
        let err = SyntaxError::new(kind, token.line);
        if token.kind == TokenType::Newline {
            err
        } else {
            err.with_found(token.literal.clone())
        }
    }

    fn unexpected_eof(&self) -> SyntaxError {
        SyntaxError::new(SyntaxErrorKind::UnexpectedEof, self.cursor.last_line())
    }

    /// The current token, or `UNEXPECTED_EOF`.
    fn current(&self) -> Result<&'a Token, SyntaxError> {
        self.cursor.peek().ok_or_else(|| self.unexpected_eof())
    }

    /// Consume a token of type `kind`, or fail with `err`.
    fn expect(&mut self, kind: TokenType, err: SyntaxErrorKind) -> Result<&'a Token, SyntaxError> {
        let token = self.current()?;
        if token.kind != kind {
            return Err(Self::error_at(err, token));
        }
        self.cursor.advance();
        Ok(token)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
