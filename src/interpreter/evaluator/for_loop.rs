use std::rc::Rc;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{EvalResult, eval},
            utils::{binding_pairs, check_form_arity, eval_block},
        },
        generator::Generator,
        value::core::Object,
    },
};

/// Expands a `for` form: `(for [var1 list1 var2 list2 ...] body...)`.
///
/// Every source is evaluated once, in the enclosing environment, and must be a
/// list. The body then runs once per combination of elements, in odometer
/// order: the last variable varies fastest.
///
/// ```text
/// (for [a [1 2] b [10 20]] (println a b))
/// ; 1 10
/// ; 1 20
/// ; 2 10
/// ; 2 20
/// ```
///
/// All loop variables live in one child frame shared by every iteration; each
/// iteration rebinds all of them before the body runs. If any source is empty
/// the body never runs.
///
/// # Returns
/// `nil`. The values of the body are discarded.
///
/// # Errors
/// - `InvalidSpecialForm` for a missing or malformed binding vector.
/// - `TypeMismatch` if a source is not a list.
/// - The first error raised by the body; the loop stops there.
pub fn for_form(args: &[Node], env: &Environment) -> EvalResult<Node> {
    check_form_arity("for", args, 1, None, "a binding vector followed by a body")?;

    let pairs = binding_pairs("for", &args[0])?;
    let mut names = Vec::with_capacity(pairs.len());
    let mut sources: Vec<Rc<Vec<Object>>> = Vec::with_capacity(pairs.len());

    for (name, expr) in pairs {
        match eval(expr, env)? {
            Object::List(items) => sources.push(items),
            other => {
                return Err(RuntimeError::TypeMismatch { details: format!("'for' source for '{name}' must be a list, found {}",
                                                                         other.type_name()) });
            },
        }
        names.push(name);
    }

    let mut generator: Generator<Object> = Generator::new();
    for source in &sources {
        generator.add_source(source.as_slice());
    }

    let frame = env.child();
    let body = &args[1..];
    let iterations = generator.generate(|combination| {
                                  for (name, value) in names.iter().zip(combination) {
                                      frame.declare_and_set(name, (*value).clone());
                                  }
                                  eval_block(body, &frame).map(|_| ())
                              })?;

    tracing::trace!(iterations, "for loop finished");
    Ok(Node::Wrapped(Object::NIL))
}
