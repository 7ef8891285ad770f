use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::expect_int},
        value::core::Object,
    },
};

/// Builds a list of successive integers.
///
/// Accepts `stop`, `start stop` or `start stop step`; `start` defaults to 0 and
/// `step` to 1. A positive step counts up while the value is below `stop`, a
/// negative step counts down while it is above `stop`. `stop` itself is never
/// included.
///
/// # Errors
/// - `TypeMismatch` if an argument is not an int.
/// - `InvalidArgument` if `step` is zero.
///
/// # Example
/// ```
/// use gysp::interpreter::{evaluator::function::range::range, value::core::Object};
///
/// let list = range(&[0.into(), 10.into(), 3.into()]).unwrap();
/// assert_eq!(list.to_string(), "[0 3 6 9]");
///
/// assert_eq!(range(&[5.into()]).unwrap().to_string(), "[0 1 2 3 4]");
/// ```
pub fn range(args: &[Object]) -> EvalResult<Object> {
    let ints = args.iter()
                   .map(|arg| expect_int("range", arg))
                   .collect::<EvalResult<Vec<_>>>()?;

    let (start, stop, step) = match ints[..] {
        [stop] => (0, stop, 1),
        [start, stop] => (start, stop, 1),
        [start, stop, step] => (start, stop, step),
        _ => {
            return Err(RuntimeError::InvalidArgument { details: format!("'range' expects 1 to 3 arguments, found {}",
                                                                        ints.len()) });
        },
    };

    if step == 0 {
        return Err(RuntimeError::InvalidArgument { details: "'range' step must not be zero".to_string() });
    }

    let mut items = Vec::new();
    let mut current = start;
    while (step > 0 && current < stop) || (step < 0 && current > stop) {
        items.push(Object::Int(current));
        match current.checked_add(step) {
            Some(next) => current = next,
            None => break,
        }
    }

    Ok(items.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(args: &[i64]) -> EvalResult<Vec<i64>> {
        let args: Vec<Object> = args.iter().map(|n| Object::Int(*n)).collect();
        match range(&args)? {
            Object::List(items) => Ok(items.iter()
                                           .map(|item| match item {
                                               Object::Int(n) => *n,
                                               other => panic!("not an int: {other}"),
                                           })
                                           .collect()),
            other => panic!("not a list: {other}"),
        }
    }

    #[test]
    fn stop_only_and_start_stop() {
        assert_eq!(ints(&[5]), Ok(vec![0, 1, 2, 3, 4]));
        assert_eq!(ints(&[2, 5]), Ok(vec![2, 3, 4]));
        assert_eq!(ints(&[0]), Ok(vec![]));
        assert_eq!(ints(&[5, 2]), Ok(vec![]));
    }

    #[test]
    fn stepping_up_and_down() {
        assert_eq!(ints(&[0, 10, 3]), Ok(vec![0, 3, 6, 9]));
        assert_eq!(ints(&[10, 0, -4]), Ok(vec![10, 6, 2]));
        assert_eq!(ints(&[0, 5, -1]), Ok(vec![]));
    }

    #[test]
    fn no_overflow_near_the_limit() {
        assert_eq!(ints(&[i64::MAX - 1, i64::MAX, 5]), Ok(vec![i64::MAX - 1]));
    }

    #[test]
    fn zero_step_is_invalid() {
        assert!(matches!(ints(&[0, 10, 0]), Err(RuntimeError::InvalidArgument { .. })));
    }

    #[test]
    fn non_int_arguments_are_type_errors() {
        assert!(matches!(range(&[1.5.into()]), Err(RuntimeError::TypeMismatch { .. })));
        assert!(matches!(range(&[0.into(), "x".into()]), Err(RuntimeError::TypeMismatch { .. })));
    }
}
