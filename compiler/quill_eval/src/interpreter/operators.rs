//! Coercions and binary operators.
//!
//! All operators work on the textual form of their operands. Booleans are
//! "is the text `true`", integers are a decimal parse of the text, and
//! equality compares text directly, so `4 == 04` is false.

use quill_diagnostic::{RuntimeError, RuntimeErrorKind};
use quill_ir::{Literal, LiteralKind, Token, TokenType};

pub(crate) fn to_boolean(literal: &Literal) -> bool {
    literal.text() == "true"
}

/// Parse the literal's text as an `i64`, reporting failures at `line`.
pub(crate) fn to_integer(literal: &Literal, line: usize) -> Result<i64, RuntimeError> {
    literal.text().parse().map_err(|_| {
        RuntimeError::new(RuntimeErrorKind::ExpectedInteger, line).with_found(literal.text())
    })
}

/// Apply `operator` to two evaluated operands. The result sits on the
/// operator's line.
pub(crate) fn apply_binary(
    operator: &Token,
    left: &Literal,
    right: &Literal,
) -> Result<Literal, RuntimeError> {
    let line = operator.line;
    let int = |lit: &Literal| to_integer(lit, line);
    let error = |kind: RuntimeErrorKind| RuntimeError::new(kind, line).with_found(&operator.literal);

    let result = match operator.kind {
        TokenType::Or => Literal::boolean(to_boolean(left) || to_boolean(right), line),
        TokenType::And => Literal::boolean(to_boolean(left) && to_boolean(right), line),
        TokenType::Eq => Literal::boolean(left.text() == right.text(), line),
        TokenType::Neq => Literal::boolean(left.text() != right.text(), line),
        TokenType::Leq => Literal::boolean(int(left)? <= int(right)?, line),
        TokenType::Geq => Literal::boolean(int(left)? >= int(right)?, line),
        TokenType::Gt => Literal::boolean(int(left)? > int(right)?, line),
        TokenType::Lt => Literal::boolean(int(left)? < int(right)?, line),
        TokenType::Plus => {
            if left.kind() == LiteralKind::Str || right.kind() == LiteralKind::Str {
                Literal::string(format!("{}{}", left.text(), right.text()), line)
            } else {
                let sum = int(left)?
                    .checked_add(int(right)?)
                    .ok_or_else(|| error(RuntimeErrorKind::IntegerOverflow))?;
                Literal::int(sum, line)
            }
        }
        TokenType::Minus => Literal::int(
            int(left)?
                .checked_sub(int(right)?)
                .ok_or_else(|| error(RuntimeErrorKind::IntegerOverflow))?,
            line,
        ),
        TokenType::Mult => Literal::int(
            int(left)?
                .checked_mul(int(right)?)
                .ok_or_else(|| error(RuntimeErrorKind::IntegerOverflow))?,
            line,
        ),
        TokenType::Div | TokenType::Mod => {
            let (lhs, rhs) = (int(left)?, int(right)?);
            if rhs == 0 {
                return Err(error(RuntimeErrorKind::DivisionByZero));
            }
            let value = if operator.kind == TokenType::Div {
                lhs.checked_div(rhs)
            } else {
                lhs.checked_rem(rhs)
            };
            Literal::int(
                value.ok_or_else(|| error(RuntimeErrorKind::IntegerOverflow))?,
                line,
            )
        }
        _ => return Err(error(RuntimeErrorKind::InvalidExpression)),
    };
    Ok(result)
}
