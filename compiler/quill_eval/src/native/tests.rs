use super::*;
use crate::buffer_handler;
use pretty_assertions::assert_eq;

fn call(name: &str, args: &[NativeValue]) -> Result<Option<NativeValue>, RuntimeErrorKind> {
    let native = find_native(name).unwrap();
    (native.call)(args, &PrintHandlerImpl::Silent)
}

fn int(value: i64) -> NativeValue {
    NativeValue::Int(value)
}

#[test]
fn test_registry_names() {
    let names: Vec<&str> = NATIVE_FUNCTIONS.iter().map(|n| n.name).collect();
    assert_eq!(names, vec!["print", "pow", "len"]);
    assert!(is_native("print"));
    assert!(!is_native("printf"));
}

#[test]
fn test_print_joins_with_spaces() {
    let out = buffer_handler();
    let print = find_native("print").unwrap();
    let args = [
        NativeValue::Str("x =".to_string()),
        int(4),
        NativeValue::Bool(true),
        NativeValue::Null,
    ];
    assert_eq!((print.call)(&args, &out), Ok(None));
    (print.call)(&[], &out).unwrap();
    assert_eq!(out.output(), "x = 4 true null\n\n");
}

#[test]
fn test_pow() {
    assert_eq!(call("pow", &[int(2), int(10)]), Ok(Some(int(1024))));
    assert_eq!(call("pow", &[int(-3), int(3)]), Ok(Some(int(-27))));
    assert_eq!(call("pow", &[int(7), int(0)]), Ok(Some(int(1))));
    assert_eq!(call("pow", &[int(0), int(0)]), Ok(Some(int(1))));
    assert_eq!(call("pow", &[int(0), int(5)]), Ok(Some(int(0))));
}

#[test]
fn test_pow_negative_exponent_truncates() {
    assert_eq!(call("pow", &[int(2), int(-1)]), Ok(Some(int(0))));
    assert_eq!(call("pow", &[int(1), int(-5)]), Ok(Some(int(1))));
    assert_eq!(call("pow", &[int(-1), int(-3)]), Ok(Some(int(-1))));
    assert_eq!(call("pow", &[int(-1), int(-4)]), Ok(Some(int(1))));
    assert_eq!(
        call("pow", &[int(0), int(-1)]),
        Err(RuntimeErrorKind::DivisionByZero)
    );
}

#[test]
fn test_pow_errors() {
    assert_eq!(
        call("pow", &[int(2), int(64)]),
        Err(RuntimeErrorKind::IntegerOverflow)
    );
    assert_eq!(
        call("pow", &[int(2)]),
        Err(RuntimeErrorKind::InvalidNumberOfArgs)
    );
    assert_eq!(
        call("pow", &[int(2), NativeValue::Str("3".to_string())]),
        Err(RuntimeErrorKind::ExpectedInteger)
    );
}

#[test]
fn test_len() {
    assert_eq!(
        call("len", &[NativeValue::Str("héllo".to_string())]),
        Ok(Some(int(5)))
    );
    assert_eq!(call("len", &[int(-120)]), Ok(Some(int(4))));
    assert_eq!(call("len", &[NativeValue::Bool(false)]), Ok(Some(int(5))));
    assert_eq!(call("len", &[]), Err(RuntimeErrorKind::InvalidNumberOfArgs));
}

#[test]
fn test_literal_round_trip_kinds() {
    assert_eq!(NativeValue::from_literal(&Literal::int(12, 1)), int(12));
    assert_eq!(
        NativeValue::from_literal(&Literal::boolean(true, 1)),
        NativeValue::Bool(true)
    );
    let null_token = quill_ir::Token::new(quill_ir::TokenType::Null, "null", 1);
    let null = Literal::from_token(null_token).unwrap();
    assert_eq!(NativeValue::from_literal(&null), NativeValue::Null);

    let wrapped = NativeValue::Null.into_literal(9);
    assert_eq!(wrapped.kind(), LiteralKind::Str);
    assert_eq!(wrapped.line(), 9);
    assert_eq!(NativeValue::Bool(false).into_literal(1).kind(), LiteralKind::Bool);
}

#[test]
fn test_oversized_integer_keeps_text() {
    let literal = Literal::int_text("99999999999999999999", 1);
    let value = NativeValue::from_literal(&literal);
    assert_eq!(value, NativeValue::WideInt("99999999999999999999".to_string()));
    assert!(value.is_integer());
    assert_eq!(value.to_string(), "99999999999999999999");
    assert_eq!(call("len", &[value.clone()]), Ok(Some(int(20))));

    let back = value.clone().into_literal(4);
    assert_eq!(back.kind(), LiteralKind::Int);
    assert_eq!(back.text(), "99999999999999999999");

    assert_eq!(
        call("pow", &[value.clone(), int(2)]),
        Err(RuntimeErrorKind::IntegerOverflow)
    );
    assert_eq!(
        call("pow", &[int(2), value]),
        Err(RuntimeErrorKind::IntegerOverflow)
    );
}
