use indexmap::IndexMap;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::utils::{check_unqualified, eval_all},
        value::{
            callable::{Arity, Function},
            core::Object,
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The outcome of one evaluation step.
///
/// A step either finishes with a value, or hands back a node that still has
/// to be evaluated in some environment. Handing back the node instead of
/// recursing lets [`eval`] run macro expansions and the last statement of a
/// function body in its own loop, so tail calls do not grow the host stack.
pub enum Tail {
    /// Evaluation is complete.
    Value(Object),
    /// Evaluate this node in this environment next.
    Eval(Node, Environment),
}

/// Evaluates a node and returns the resulting object.
///
/// This is the main entry point for evaluation. Dispatch is by node kind:
/// literals and wrapped objects yield themselves, list and dict constructors
/// evaluate their items in order, symbols are looked up in `env`, and calls
/// evaluate their head and apply it (see [`apply`]).
///
/// # Parameters
/// - `node`: Node to evaluate.
/// - `env`: The environment the node is evaluated in.
///
/// # Returns
/// The object the node evaluates to.
///
/// # Example
/// ```
/// use gysp::{
///     ast::Node,
///     interpreter::{
///         evaluator::{core::eval, function::core::standard_environment},
///         value::core::Object,
///     },
/// };
///
/// let env = standard_environment();
/// let node = Node::Call { head: Box::new(Node::symbol("*")),
///                         args: vec![Node::Literal(6.into()), Node::Literal(7.into())], };
///
/// assert_eq!(eval(&node, &env).unwrap(), Object::Int(42));
/// ```
pub fn eval(node: &Node, env: &Environment) -> EvalResult<Object> {
    let mut step = eval_step(node, env)?;
    loop {
        match step {
            Tail::Value(value) => return Ok(value),
            Tail::Eval(next, next_env) => step = eval_step(&next, &next_env)?,
        }
    }
}

/// Runs a parsed program.
///
/// The root `List` produced by the parser is not a list constructor: its
/// children are executed in order and only the last child's value is kept.
/// An empty program yields `nil`. Any other node is simply evaluated.
///
/// # Errors
/// The first runtime error raised by any top-level form; later forms do not
/// run.
pub fn eval_program(root: &Node, env: &Environment) -> EvalResult<Object> {
    let Node::List(forms) = root else {
        return eval(root, env);
    };

    let mut result = Object::NIL;
    for form in forms {
        result = eval(form, env)?;
    }
    Ok(result)
}

/// Performs one evaluation step.
fn eval_step(node: &Node, env: &Environment) -> EvalResult<Tail> {
    match node {
        Node::Literal(value) => Ok(Tail::Value(value.into())),
        Node::Wrapped(object) => Ok(Tail::Value(object.clone())),
        Node::Symbol(name) => lookup(name, env).map(Tail::Value),
        Node::List(items) => Ok(Tail::Value(eval_all(items, env)?.into())),
        Node::Dict(entries) => {
            let mut map = IndexMap::with_capacity(entries.len());
            for (key, value) in entries {
                let key = eval(key, env)?;
                let value = eval(value, env)?;
                map.insert(key, value);
            }
            Ok(Tail::Value(map.into()))
        },
        Node::Call { head, args } => {
            let callee = eval(head, env)?;
            apply(&callee, args, env)
        },
    }
}

/// Resolves a symbol.
///
/// Names containing `.` or `/` are qualified names; resolving them is not
/// supported. The bare `/` is the division primitive and resolves normally.
fn lookup(name: &str, env: &Environment) -> EvalResult<Object> {
    check_unqualified(name)?;
    env.get(name)
}

/// Applies a callable to unevaluated argument nodes.
///
/// - Primitives receive the arguments evaluated left to right in `env`.
/// - Macros receive the nodes themselves plus `env`; their expansion is
///   evaluated in `env` as the next step.
/// - Functions check the argument count, evaluate the arguments in `env`, and
///   run their body in a child of the environment they were defined in.
///
/// # Errors
/// `NotCallable` if `callee` is none of the above, `ArityMismatch` for a wrong
/// argument count, and anything the arguments or the callee raise.
pub fn apply(callee: &Object, args: &[Node], env: &Environment) -> EvalResult<Tail> {
    match callee {
        Object::Prim(prim) => {
            let values = eval_all(args, env)?;
            tracing::trace!(name = prim.name, args = values.len(), "calling primitive");
            prim.call(&values).map(Tail::Value)
        },
        Object::Macro(mac) => {
            tracing::trace!(name = mac.name, "expanding special form");
            let expansion = (mac.func)(args, env)?;
            Ok(Tail::Eval(expansion, env.clone()))
        },
        Object::Func(func) => call_function(func, args, env),
        other => Err(RuntimeError::NotCallable { found: format!("{other:?}") }),
    }
}

/// Calls a user-defined function.
///
/// All statements but the last run here; the last one is handed back as a
/// tail step.
fn call_function(func: &Function, args: &[Node], env: &Environment) -> EvalResult<Tail> {
    if args.len() != func.params.len() {
        return Err(RuntimeError::ArityMismatch { name:     func.display_name().to_string(),
                                                 expected: Arity::Exact(func.params.len()),
                                                 found:    args.len(), });
    }

    let values = eval_all(args, env)?;
    tracing::trace!(name = func.display_name(), "calling function");

    let frame = func.env.child();
    for (param, value) in func.params.iter().zip(values) {
        frame.declare_and_set(param, value);
    }

    let Some((last, init)) = func.body.split_last() else {
        return Ok(Tail::Value(Object::NIL));
    };
    for statement in init {
        eval(statement, &frame)?;
    }
    Ok(Tail::Eval(last.clone(), frame))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::LiteralValue,
        interpreter::evaluator::function::core::standard_environment,
    };

    fn call(head: &str, args: Vec<Node>) -> Node {
        Node::Call { head: Box::new(Node::symbol(head)),
                     args }
    }

    fn int(n: i64) -> Node {
        Node::Literal(LiteralValue::Integer(n))
    }

    #[test]
    fn literals_evaluate_to_matching_objects() {
        let env = Environment::new();
        assert_eq!(eval(&int(42), &env), Ok(Object::Int(42)));
        assert_eq!(eval(&Node::Literal(LiteralValue::Float(3.5)), &env), Ok(Object::Float(3.5)));
        assert_eq!(eval(&Node::Literal("a\tb".into()), &env), Ok(Object::from("a\tb")));
    }

    #[test]
    fn wrapped_objects_are_not_evaluated_again() {
        let env = Environment::new();
        let wrapped = Node::Wrapped(Object::from(vec![Object::from("x")]));
        assert_eq!(eval(&wrapped, &env), Ok(Object::from(vec![Object::from("x")])));
    }

    #[test]
    fn program_returns_the_last_form() {
        let env = standard_environment();
        let root = Node::List(vec![int(1), int(2), call("+", vec![int(3), int(4)])]);
        assert_eq!(eval_program(&root, &env), Ok(Object::Int(7)));
        assert_eq!(eval_program(&Node::List(vec![]), &env), Ok(Object::NIL));
    }

    #[test]
    fn dict_later_keys_overwrite_earlier_ones() {
        let env = Environment::new();
        let dict = Node::Dict(vec![(int(1), int(10)), (int(2), int(20)), (int(1), int(30))]);
        let Ok(Object::Dict(map)) = eval(&dict, &env) else {
            panic!("expected a dict");
        };
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&Object::Int(1)), Some(&Object::Int(30)));
    }

    #[test]
    fn qualified_names_are_not_implemented() {
        let env = standard_environment();
        for name in ["math.pi", "str/join", "a.b.c"] {
            assert_eq!(eval(&Node::symbol(name), &env),
                       Err(RuntimeError::NotImplemented { name: name.to_string() }));
        }
        assert!(matches!(eval(&Node::symbol("/"), &env), Ok(Object::Prim(_))));
    }

    #[test]
    fn non_callable_head_fails() {
        let env = standard_environment();
        assert_eq!(eval(&Node::Call { head: Box::new(int(1)),
                                      args: vec![], },
                        &env),
                   Err(RuntimeError::NotCallable { found: "1".to_string() }));
    }
}
