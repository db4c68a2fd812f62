//! Expression productions.

use quill_diagnostic::{SyntaxError, SyntaxErrorKind};
use quill_ir::{Binary, Expr, FunctionCall, Identifier, Literal, TokenType};
use quill_stack::ensure_sufficient_stack;

use crate::Parser;

/// Operators of one binary precedence level.
type Level = &'static [TokenType];

const OR: Level = &[TokenType::Or];
const AND: Level = &[TokenType::And];
const EQUALITY: Level = &[TokenType::Eq, TokenType::Neq];
const COMPARISON: Level = &[TokenType::Leq, TokenType::Geq, TokenType::Gt, TokenType::Lt];
const ADDITIVE: Level = &[TokenType::Plus, TokenType::Minus];
const MULTIPLICATIVE: Level = &[TokenType::Mult, TokenType::Div, TokenType::Mod];

impl Parser<'_> {
    /// Parse an expression at the lowest precedence.
    pub(crate) fn expression(&mut self) -> Result<Expr, SyntaxError> {
        ensure_sufficient_stack(|| self.or_expr())
    }

    fn or_expr(&mut self) -> Result<Expr, SyntaxError> {
        self.binary_level(OR, Self::and_expr)
    }

    fn and_expr(&mut self) -> Result<Expr, SyntaxError> {
        self.binary_level(AND, Self::equality_expr)
    }

    fn equality_expr(&mut self) -> Result<Expr, SyntaxError> {
        self.binary_level(EQUALITY, Self::comparison_expr)
    }

    fn comparison_expr(&mut self) -> Result<Expr, SyntaxError> {
        self.binary_level(COMPARISON, Self::additive_expr)
    }

    fn additive_expr(&mut self) -> Result<Expr, SyntaxError> {
        self.binary_level(ADDITIVE, Self::multiplicative_expr)
    }

    fn multiplicative_expr(&mut self) -> Result<Expr, SyntaxError> {
        self.binary_level(MULTIPLICATIVE, Self::primary)
    }

    /// `operand (op operand)*`, folded to the left.
    fn binary_level(
        &mut self,
        operators: Level,
        mut operand: impl FnMut(&mut Self) -> Result<Expr, SyntaxError>,
    ) -> Result<Expr, SyntaxError> {
        let mut left = operand(self)?;
        while let Some(kind) = self.cursor.peek_kind() {
            if !operators.contains(&kind) {
                break;
            }
            let Some(operator) = self.cursor.advance() else {
                break;
            };
            let right = operand(self)?;
            left = Expr::Binary(Binary {
                left: Box::new(left),
                operator: operator.clone(),
                right: Box::new(right),
            });
        }
        Ok(left)
    }

    fn primary(&mut self) -> Result<Expr, SyntaxError> {
        let token = self.current()?;
        match token.kind {
            TokenType::StringConstant
            | TokenType::IntConstant
            | TokenType::True
            | TokenType::False
            | TokenType::Null => {
                let literal = Literal::from_token(token.clone())
                    .ok_or_else(|| Self::error_at(SyntaxErrorKind::UnknownError, token))?;
                self.cursor.advance();
                Ok(Expr::Literal(literal))
            }
            TokenType::Id => {
                if self.cursor.peek_nth(1).map(|t| t.kind) == Some(TokenType::LeftParen) {
                    Ok(Expr::Call(self.function_call()?))
                } else {
                    self.cursor.advance();
                    Ok(Expr::Identifier(Identifier::new(token.clone())))
                }
            }
            TokenType::LeftParen => {
                self.cursor.advance();
                let inner = self.expression()?;
                self.expect(TokenType::RightParen, SyntaxErrorKind::ExpectClosingParen)?;
                Ok(inner)
            }
            _ => Err(Self::error_at(SyntaxErrorKind::InvalidExpression, token)),
        }
    }

    /// `name(arg, ...)`. The cursor must be on the name.
    pub(crate) fn function_call(&mut self) -> Result<FunctionCall, SyntaxError> {
        let name = self.expect(TokenType::Id, SyntaxErrorKind::ExpectId)?;
        self.expect(TokenType::LeftParen, SyntaxErrorKind::ExpectOpeningParen)?;

        let mut args = Vec::new();
        if !self.cursor.check(TokenType::RightParen) {
            loop {
                args.push(self.expression()?);
                if self.cursor.eat(TokenType::Comma).is_none() {
                    break;
                }
            }
        }
        self.expect(TokenType::RightParen, SyntaxErrorKind::ExpectClosingParen)?;

        Ok(FunctionCall {
            id: Identifier::new(name.clone()),
            args,
        })
    }
}
