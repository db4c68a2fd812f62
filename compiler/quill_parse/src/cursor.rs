//! Token cursor for the parser.

use quill_ir::{Token, TokenType};
use tracing::trace;

/// Position in a token slice, with lookahead.
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub(crate) fn peek_kind(&self) -> Option<TokenType> {
        self.peek().map(|t| t.kind)
    }

    /// Token `n` positions ahead of the current one.
    #[inline]
    pub(crate) fn peek_nth(&self, n: usize) -> Option<&'a Token> {
        self.tokens.get(self.pos + n)
    }

    #[inline]
    pub(crate) fn check(&self, kind: TokenType) -> bool {
        self.peek_kind() == Some(kind)
    }

    pub(crate) fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Consume the current token if it has the given type.
    pub(crate) fn eat(&mut self, kind: TokenType) -> Option<&'a Token> {
        if self.check(kind) {
            self.advance()
        } else {
            None
        }
    }

    pub(crate) fn skip_newlines(&mut self) {
        let start = self.pos;
        while self.check(TokenType::Newline) {
            self.pos += 1;
        }
        if self.pos > start {
            trace!(skipped = self.pos - start, "newlines");
        }
    }

    /// Type of the first token at or after the cursor that is not a newline.
    pub(crate) fn peek_past_newlines(&self) -> Option<TokenType> {
        self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .map(|t| t.kind)
            .find(|&kind| kind != TokenType::Newline)
    }

    /// Line to blame when input runs out: the last token's line.
    pub(crate) fn last_line(&self) -> usize {
        self.tokens.last().map_or(1, |t| t.line)
    }
}
