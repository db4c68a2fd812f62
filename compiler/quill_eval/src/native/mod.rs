//! Built-in functions.
//!
//! Natives see plain host values rather than literals: arguments are
//! unwrapped into [`NativeValue`] before the call and the result, if any,
//! is wrapped back into a literal on the call's line. The table is fixed
//! at compile time.

use std::fmt;

use quill_diagnostic::RuntimeErrorKind;
use quill_ir::{Literal, LiteralKind};

use crate::PrintHandlerImpl;

/// A runtime value as seen by a native function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NativeValue {
    Int(i64),
    /// An integer constant that does not fit in `i64`, kept as its text.
    WideInt(String),
    Bool(bool),
    Str(String),
    Null,
}

impl NativeValue {
    /// Unwrap a literal. Integer text that does not fit in `i64` is kept
    /// verbatim; only natives doing arithmetic reject it.
    pub fn from_literal(literal: &Literal) -> Self {
        let text = literal.text();
        match literal.kind() {
            LiteralKind::Int => match text.parse() {
                Ok(value) => NativeValue::Int(value),
                Err(_) => NativeValue::WideInt(text.to_owned()),
            },
            LiteralKind::Bool => NativeValue::Bool(text == "true"),
            LiteralKind::Str => NativeValue::Str(text.to_owned()),
            LiteralKind::Null => NativeValue::Null,
        }
    }

    /// True for integers of any width.
    pub fn is_integer(&self) -> bool {
        matches!(self, NativeValue::Int(_) | NativeValue::WideInt(_))
    }

    /// Wrap into a literal. Anything that is not an integer or boolean
    /// becomes a string constant.
    pub fn into_literal(self, line: usize) -> Literal {
        match self {
            NativeValue::Int(value) => Literal::int(value, line),
            NativeValue::WideInt(text) => Literal::int_text(text, line),
            NativeValue::Bool(value) => Literal::boolean(value, line),
            NativeValue::Str(value) => Literal::string(value, line),
            NativeValue::Null => Literal::string("null", line),
        }
    }
}

impl fmt::Display for NativeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeValue::Int(value) => write!(f, "{value}"),
            NativeValue::Bool(value) => write!(f, "{value}"),
            NativeValue::WideInt(value) | NativeValue::Str(value) => f.write_str(value),
            NativeValue::Null => f.write_str("null"),
        }
    }
}

/// Signature shared by every native.
pub type NativeFn =
    fn(&[NativeValue], &PrintHandlerImpl) -> Result<Option<NativeValue>, RuntimeErrorKind>;

/// A named built-in.
#[derive(Clone, Copy)]
pub struct NativeFunction {
    pub name: &'static str,
    pub call: NativeFn,
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Every built-in, looked up by name before user functions.
pub static NATIVE_FUNCTIONS: &[NativeFunction] = &[
    NativeFunction {
        name: "print",
        call: native_print,
    },
    NativeFunction {
        name: "pow",
        call: native_pow,
    },
    NativeFunction {
        name: "len",
        call: native_len,
    },
];

pub fn find_native(name: &str) -> Option<&'static NativeFunction> {
    NATIVE_FUNCTIONS.iter().find(|native| native.name == name)
}

pub fn is_native(name: &str) -> bool {
    find_native(name).is_some()
}

/// `print(args...)`: textual forms joined by single spaces.
fn native_print(
    args: &[NativeValue],
    out: &PrintHandlerImpl,
) -> Result<Option<NativeValue>, RuntimeErrorKind> {
    let line = args
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    out.println(&line);
    Ok(None)
}

/// `pow(base, exponent)`. Negative exponents yield `1 / base^|exponent|`
/// truncated toward zero. Operands wider than `i64` overflow.
fn native_pow(
    args: &[NativeValue],
    _out: &PrintHandlerImpl,
) -> Result<Option<NativeValue>, RuntimeErrorKind> {
    let [base, exponent] = args else {
        return Err(RuntimeErrorKind::InvalidNumberOfArgs);
    };
    let (NativeValue::Int(base), NativeValue::Int(exponent)) = (base, exponent) else {
        return Err(if base.is_integer() && exponent.is_integer() {
            RuntimeErrorKind::IntegerOverflow
        } else {
            RuntimeErrorKind::ExpectedInteger
        });
    };
    let odd = exponent % 2 != 0;
    let value = match (*base, *exponent >= 0) {
        (0, false) => return Err(RuntimeErrorKind::DivisionByZero),
        (1, _) => 1,
        (-1, _) => {
            if odd {
                -1
            } else {
                1
            }
        }
        (_, false) => 0,
        (0, true) => i64::from(*exponent == 0),
        (base, true) => u32::try_from(*exponent)
            .ok()
            .and_then(|exp| base.checked_pow(exp))
            .ok_or(RuntimeErrorKind::IntegerOverflow)?,
    };
    Ok(Some(NativeValue::Int(value)))
}

/// `len(value)`: character count of the textual form.
fn native_len(
    args: &[NativeValue],
    _out: &PrintHandlerImpl,
) -> Result<Option<NativeValue>, RuntimeErrorKind> {
    let [value] = args else {
        return Err(RuntimeErrorKind::InvalidNumberOfArgs);
    };
    let count = match value {
        NativeValue::Str(text) => text.chars().count(),
        other => other.to_string().chars().count(),
    };
    let count = i64::try_from(count).map_err(|_| RuntimeErrorKind::IntegerOverflow)?;
    Ok(Some(NativeValue::Int(count)))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
