//! Statement and block productions.

use quill_diagnostic::{SyntaxError, SyntaxErrorKind};
use quill_ir::{
    Assignment, Block, Conditional, ElseBranch, FunctionDeclaration, Identifier, Parameter,
    ReturnStatement, Stmt, TokenType, TypeSpecifier, VariableDeclaration, WhileStatement,
};
use quill_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::Parser;

impl Parser<'_> {
    /// Parse one statement. The cursor must be on a non-newline token.
    pub(crate) fn statement(&mut self) -> Result<Stmt, SyntaxError> {
        ensure_sufficient_stack(|| self.statement_inner())
    }

    fn statement_inner(&mut self) -> Result<Stmt, SyntaxError> {
        let token = self.current()?;
        trace!(kind = %token.kind, line = token.line, "statement");
        let stmt = match token.kind {
            kind if kind.is_type_keyword() => Stmt::VariableDeclaration(self.variable_declaration()?),
            TokenType::Fun => Stmt::FunctionDeclaration(self.function_declaration()?),
            TokenType::Id => {
                if self.cursor.peek_nth(1).map(|t| t.kind) == Some(TokenType::LeftParen) {
                    Stmt::Call(self.function_call()?)
                } else {
                    Stmt::Assignment(self.assignment()?)
                }
            }
            TokenType::Return => Stmt::Return(self.return_statement()?),
            TokenType::If => {
                self.cursor.advance();
                Stmt::Conditional(self.conditional()?)
            }
            TokenType::While => Stmt::While(self.while_statement()?),
            _ => return Err(Self::error_at(SyntaxErrorKind::UnexpectedCharacter, token)),
        };
        self.terminator()?;
        Ok(stmt)
    }

    /// A newline (consumed), or a `}` / end of input (left in place).
    fn terminator(&mut self) -> Result<(), SyntaxError> {
        match self.cursor.peek() {
            None => Ok(()),
            Some(token) => match token.kind {
                TokenType::Newline => {
                    self.cursor.advance();
                    Ok(())
                }
                TokenType::RightBrace => Ok(()),
                _ => Err(Self::error_at(SyntaxErrorKind::ExpectNewline, token)),
            },
        }
    }

    fn at_terminator(&self) -> bool {
        matches!(
            self.cursor.peek_kind(),
            None | Some(TokenType::Newline | TokenType::RightBrace)
        )
    }

    fn type_specifier(&mut self) -> Result<TypeSpecifier, SyntaxError> {
        let token = self.current()?;
        match TypeSpecifier::new(token.clone()) {
            Some(ty) => {
                self.cursor.advance();
                Ok(ty)
            }
            None => Err(Self::error_at(SyntaxErrorKind::ExpectType, token)),
        }
    }

    fn identifier(&mut self) -> Result<Identifier, SyntaxError> {
        let token = self.expect(TokenType::Id, SyntaxErrorKind::ExpectId)?;
        Ok(Identifier::new(token.clone()))
    }

    /// `type name = expr`
    fn variable_declaration(&mut self) -> Result<VariableDeclaration, SyntaxError> {
        let ty = self.type_specifier()?;
        let id = self.identifier()?;
        self.expect(TokenType::Assign, SyntaxErrorKind::ExpectAssign)?;
        let init = self.expression()?;
        Ok(VariableDeclaration { ty, id, init })
    }

    /// `fun name(type a, type b) { ... }`
    fn function_declaration(&mut self) -> Result<FunctionDeclaration, SyntaxError> {
        self.expect(TokenType::Fun, SyntaxErrorKind::UnexpectedCharacter)?;
        let id = self.identifier()?;
        self.expect(TokenType::LeftParen, SyntaxErrorKind::ExpectOpeningParen)?;

        let mut params = Vec::new();
        if !self.cursor.check(TokenType::RightParen) {
            loop {
                let ty = self.type_specifier()?;
                let id = self.identifier()?;
                params.push(Parameter { ty, id });
                if self.cursor.eat(TokenType::Comma).is_none() {
                    break;
                }
            }
        }
        self.expect(TokenType::RightParen, SyntaxErrorKind::ExpectClosingParen)?;

        let body = self.block()?;
        Ok(FunctionDeclaration { id, params, body })
    }

    /// `name = expr`
    fn assignment(&mut self) -> Result<Assignment, SyntaxError> {
        let id = self.identifier()?;
        self.expect(TokenType::Assign, SyntaxErrorKind::ExpectAssign)?;
        let value = self.expression()?;
        Ok(Assignment { id, value })
    }

    /// `return` or `return expr`
    fn return_statement(&mut self) -> Result<ReturnStatement, SyntaxError> {
        let keyword = self.expect(TokenType::Return, SyntaxErrorKind::UnexpectedCharacter)?;
        let value = if self.at_terminator() {
            None
        } else {
            Some(self.expression()?)
        };
        Ok(ReturnStatement {
            line: keyword.line,
            value,
        })
    }

    /// Everything after `if`: condition, block, and an optional `else`
    /// that may sit on a later line than the closing brace.
    fn conditional(&mut self) -> Result<Conditional, SyntaxError> {
        let condition = self.expression()?;
        let then_block = self.block()?;

        let next = if self.cursor.peek_past_newlines() == Some(TokenType::Else) {
            self.cursor.skip_newlines();
            self.cursor.advance();
            if self.cursor.eat(TokenType::If).is_some() {
                Some(ElseBranch::If(Box::new(self.conditional()?)))
            } else {
                Some(ElseBranch::Block(self.block()?))
            }
        } else {
            None
        };

        Ok(Conditional {
            condition,
            then_block,
            next,
        })
    }

    /// `while cond { ... }`
    fn while_statement(&mut self) -> Result<WhileStatement, SyntaxError> {
        self.expect(TokenType::While, SyntaxErrorKind::UnexpectedCharacter)?;
        let condition = self.expression()?;
        let body = self.block()?;
        Ok(WhileStatement { condition, body })
    }

    /// `{` statements `}`, with blank lines allowed anywhere inside.
    ///
    /// Running out of input is `UNEXPECTED_EOF`; any other token that can
    /// neither start a statement nor close the block is
    /// `EXPECT_CLOSING_BRACE`.
    pub(crate) fn block(&mut self) -> Result<Block, SyntaxError> {
        self.expect(TokenType::LeftBrace, SyntaxErrorKind::ExpectOpeningBrace)?;
        let mut block = Vec::new();
        loop {
            self.cursor.skip_newlines();
            let token = self.current()?;
            match token.kind {
                TokenType::RightBrace => {
                    self.cursor.advance();
                    return Ok(block);
                }
                kind if starts_statement(kind) => block.push(self.statement()?),
                _ => return Err(Self::error_at(SyntaxErrorKind::ExpectClosingBrace, token)),
            }
        }
    }
}

fn starts_statement(kind: TokenType) -> bool {
    kind.is_type_keyword()
        || matches!(
            kind,
            TokenType::Fun | TokenType::Id | TokenType::Return | TokenType::If | TokenType::While
        )
}
