use crate::{
    ast::Node,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{EvalResult, eval},
            utils::{binding_pairs, check_form_arity, eval_block},
        },
    },
};

/// Expands a `let` form: `(let [name1 expr1 name2 expr2 ...] body...)`.
///
/// Every `expr` is evaluated in the enclosing environment, so the bindings
/// cannot see each other. All names are then bound in one new child frame and
/// the body runs there. Nothing bound by the form is visible after it.
///
/// # Returns
/// The value of the last body statement (or `nil`), wrapped.
///
/// # Errors
/// `InvalidSpecialForm` for a missing or malformed binding vector, and
/// anything raised by the bindings or the body.
pub fn let_form(args: &[Node], env: &Environment) -> EvalResult<Node> {
    check_form_arity("let", args, 1, None, "a binding vector followed by a body")?;

    let pairs = binding_pairs("let", &args[0])?;
    let values = pairs.iter()
                      .map(|(_, expr)| eval(expr, env))
                      .collect::<EvalResult<Vec<_>>>()?;

    let frame = env.child();
    for ((name, _), value) in pairs.iter().zip(values) {
        frame.declare_and_set(name, value);
    }

    eval_block(&args[1..], &frame).map(Node::Wrapped)
}

/// Expands a `do` form: `(do body...)`.
///
/// The body runs in one new child frame, so `def` inside it does not leak
/// into the enclosing scope.
///
/// # Returns
/// The value of the last body statement (or `nil`), wrapped.
pub fn do_form(args: &[Node], env: &Environment) -> EvalResult<Node> {
    eval_block(args, &env.child()).map(Node::Wrapped)
}
