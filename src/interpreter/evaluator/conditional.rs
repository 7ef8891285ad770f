use crate::{
    ast::Node,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{EvalResult, eval},
            utils::check_form_arity,
        },
        value::core::Object,
    },
};

/// Expands an `if` form: `(if cond then [else])`.
///
/// `cond` is evaluated now. Only `nil` counts as false; every other object,
/// including `false`, `0` and the empty list, selects `then`. The chosen branch
/// is returned unevaluated so the evaluator runs it in tail position. With no
/// `else` branch, a false condition yields `nil`.
///
/// # Errors
/// `InvalidSpecialForm` unless there are two or three arguments, and anything
/// raised while evaluating `cond`.
pub fn if_form(args: &[Node], env: &Environment) -> EvalResult<Node> {
    check_form_arity("if", args, 2, Some(3), "a condition, a branch and an optional else branch")?;

    let condition = eval(&args[0], env)?;
    if condition.is_nil() {
        Ok(args.get(2).cloned().unwrap_or(Node::Wrapped(Object::NIL)))
    } else {
        Ok(args[1].clone())
    }
}
