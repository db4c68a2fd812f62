//! Scanner for Quill.
//!
//! Turns source text into a `Vec<Token>` by repeatedly taking the first
//! rule in [`rules::RULES`] that matches at the current position. There is
//! no longest-match and no backtracking. Whitespace and comments are
//! dropped; newlines are kept because they terminate statements.

mod rules;

use quill_diagnostic::{SyntaxError, SyntaxErrorKind};
use quill_ir::{Token, TokenType};
use tracing::{debug, trace};

/// Scan `source` into tokens.
pub fn scan(source: &str) -> Result<Vec<Token>, SyntaxError> {
    Scanner::new(source).scan()
}

/// Left-to-right scanner over one source text.
pub struct Scanner<'src> {
    source: &'src str,
    pos: usize,
    line: usize,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Scanner {
            source,
            pos: 0,
            line: 1,
        }
    }

    /// Consume the whole source.
    ///
    /// # Errors
    ///
    /// `UNKNOWN_CHARACTER` when no rule matches, carrying the text up to
    /// the next whitespace.
    pub fn scan(mut self) -> Result<Vec<Token>, SyntaxError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            if token.kind.is_trivia() {
                continue;
            }
            tokens.push(token);
        }
        debug!(tokens = tokens.len(), lines = self.line, "scanned source");
        Ok(tokens)
    }

    /// Next token including trivia, or `None` at end of input.
    fn next_token(&mut self) -> Result<Option<Token>, SyntaxError> {
        let rest = &self.source[self.pos..];
        if rest.is_empty() {
            return Ok(None);
        }

        let Some((kind, len)) = rules::first_match(rest) else {
            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            return Err(
                SyntaxError::new(SyntaxErrorKind::UnknownCharacter, self.line)
                    .with_found(&rest[..end]),
            );
        };

        let matched = &rest[..len];
        let literal = if kind == TokenType::StringConstant {
            &matched[1..matched.len() - 1]
        } else {
            matched
        };
        let token = Token::new(kind, literal, self.line);
        trace!(kind = %kind, line = self.line, "token");

        self.pos += len;
        if kind == TokenType::Newline {
            self.line += 1;
        }
        Ok(Some(token))
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
