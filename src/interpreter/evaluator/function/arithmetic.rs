use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_same_kind},
        value::core::Object,
    },
};

/// Kinds accepted by `+`.
const ADDABLE: &[&str] = &["int", "float", "complex", "str"];
/// Kinds accepted by `-`, `*` and `/`.
const NUMERIC: &[&str] = &["int", "float", "complex"];

/// Checks the operands shared by all folding operators: every operand must
/// have the first operand's kind, and that kind must be one of `kinds`.
fn check_operands(name: &str, args: &[Object], kinds: &[&str]) -> EvalResult<()> {
    check_same_kind(name, args)?;
    match args.first() {
        Some(first) if !kinds.contains(&first.type_name()) => {
            Err(RuntimeError::TypeMismatch { details: format!("'{name}' is not defined for {}",
                                                              first.type_name()) })
        },
        _ => Ok(()),
    }
}

/// Folds `step` over the operands from left to right.
fn fold(name: &str,
        args: &[Object],
        kinds: &[&str],
        step: fn(Object, &Object) -> EvalResult<Object>)
        -> EvalResult<Object> {
    check_operands(name, args, kinds)?;

    let Some((first, rest)) = args.split_first() else {
        return Err(RuntimeError::InvalidArgument { details: format!("'{name}' needs at least one operand") });
    };
    rest.iter().try_fold(first.clone(), step)
}

/// Adds numbers or concatenates strings.
///
/// `(+ 1 2 3)` is `6`, `(+ "a" "b")` is `"ab"`. All operands must have the same
/// kind.
///
/// # Errors
/// - `TypeMismatch` for mixed kinds or kinds without addition.
/// - `Overflow` if integer addition overflows.
///
/// # Example
/// ```
/// use gysp::interpreter::{evaluator::function::arithmetic::add, value::core::Object};
///
/// assert_eq!(add(&[1.into(), 2.into(), 3.into()]).unwrap(), Object::Int(6));
/// assert_eq!(add(&["a".into(), "b".into()]).unwrap(), Object::from("ab"));
/// assert!(add(&[1.into(), 1.0.into()]).is_err());
/// ```
pub fn add(args: &[Object]) -> EvalResult<Object> {
    fold("+", args, ADDABLE, |acc, rhs| match (acc, rhs) {
        (Object::Int(a), Object::Int(b)) => a.checked_add(*b).map(Object::Int).ok_or(RuntimeError::Overflow),
        (Object::Float(a), Object::Float(b)) => Ok(Object::Float(a + b)),
        (Object::Complex(a), Object::Complex(b)) => Ok(Object::Complex(a + *b)),
        (Object::Str(a), Object::Str(b)) => Ok(Object::from(format!("{a}{b}"))),
        (acc, _) => Err(mismatch("+", &acc, rhs)),
    })
}

/// Subtracts every later operand from the first one. With a single operand,
/// negates it.
///
/// # Errors
/// - `TypeMismatch` for mixed kinds or non-numeric operands.
/// - `Overflow` if integer subtraction or negation overflows.
pub fn sub(args: &[Object]) -> EvalResult<Object> {
    if let [operand] = args {
        check_operands("-", args, NUMERIC)?;
        return negate(operand);
    }

    fold("-", args, NUMERIC, |acc, rhs| match (acc, rhs) {
        (Object::Int(a), Object::Int(b)) => a.checked_sub(*b).map(Object::Int).ok_or(RuntimeError::Overflow),
        (Object::Float(a), Object::Float(b)) => Ok(Object::Float(a - b)),
        (Object::Complex(a), Object::Complex(b)) => Ok(Object::Complex(a - *b)),
        (acc, _) => Err(mismatch("-", &acc, rhs)),
    })
}

/// Negates a single number.
fn negate(operand: &Object) -> EvalResult<Object> {
    match operand {
        Object::Int(n) => n.checked_neg().map(Object::Int).ok_or(RuntimeError::Overflow),
        Object::Float(x) => Ok(Object::Float(-x)),
        Object::Complex(c) => Ok(Object::Complex(-*c)),
        other => Err(RuntimeError::TypeMismatch { details: format!("'-' cannot negate {}",
                                                                   other.type_name()) }),
    }
}

/// Multiplies the operands.
///
/// # Errors
/// - `TypeMismatch` for mixed kinds or non-numeric operands.
/// - `Overflow` if integer multiplication overflows.
pub fn mul(args: &[Object]) -> EvalResult<Object> {
    fold("*", args, NUMERIC, |acc, rhs| match (acc, rhs) {
        (Object::Int(a), Object::Int(b)) => a.checked_mul(*b).map(Object::Int).ok_or(RuntimeError::Overflow),
        (Object::Float(a), Object::Float(b)) => Ok(Object::Float(a * b)),
        (Object::Complex(a), Object::Complex(b)) => Ok(Object::Complex(a * *b)),
        (acc, _) => Err(mismatch("*", &acc, rhs)),
    })
}

/// Divides the first operand by every later one.
///
/// Integer division truncates toward zero. A single operand is returned
/// unchanged.
///
/// # Errors
/// - `TypeMismatch` for mixed kinds or non-numeric operands.
/// - `DivisionByZero` for a zero divisor of any kind.
/// - `Overflow` for `i64::MIN / -1`.
pub fn div(args: &[Object]) -> EvalResult<Object> {
    fold("/", args, NUMERIC, |acc, rhs| match (acc, rhs) {
        (Object::Int(_), Object::Int(0)) => Err(RuntimeError::DivisionByZero),
        (Object::Int(a), Object::Int(b)) => a.checked_div(*b).map(Object::Int).ok_or(RuntimeError::Overflow),
        (Object::Float(_), Object::Float(b)) if *b == 0.0 => Err(RuntimeError::DivisionByZero),
        (Object::Float(a), Object::Float(b)) => Ok(Object::Float(a / b)),
        (Object::Complex(_), Object::Complex(b)) if b.is_zero() => Err(RuntimeError::DivisionByZero),
        (Object::Complex(a), Object::Complex(b)) => Ok(Object::Complex(a / *b)),
        (acc, _) => Err(mismatch("/", &acc, rhs)),
    })
}

/// Remainder of two ints or two floats. The result has the sign of the
/// dividend.
///
/// # Errors
/// - `TypeMismatch` for mixed kinds or kinds other than int and float.
/// - `DivisionByZero` for a zero divisor.
/// - `Overflow` for `(% i64::MIN -1)`.
pub fn rem(args: &[Object]) -> EvalResult<Object> {
    check_operands("%", args, &["int", "float"])?;

    match args {
        [Object::Int(_), Object::Int(0)] => Err(RuntimeError::DivisionByZero),
        [Object::Int(a), Object::Int(b)] => a.checked_rem(*b).map(Object::Int).ok_or(RuntimeError::Overflow),
        [Object::Float(_), Object::Float(b)] if *b == 0.0 => Err(RuntimeError::DivisionByZero),
        [Object::Float(a), Object::Float(b)] => Ok(Object::Float(a % b)),
        _ => Err(RuntimeError::InvalidArgument { details: format!("'%' expects two operands, found {}",
                                                                  args.len()) }),
    }
}

fn mismatch(name: &str, lhs: &Object, rhs: &Object) -> RuntimeError {
    RuntimeError::TypeMismatch { details: format!("'{name}' is not defined for {} and {}",
                                                  lhs.type_name(),
                                                  rhs.type_name()) }
}
