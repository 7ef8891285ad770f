use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, eval},
        value::core::Object,
    },
};

/// Evaluates every node in order and collects the results.
///
/// # Errors
/// The first error raised; later nodes are not evaluated.
pub fn eval_all(nodes: &[Node], env: &Environment) -> EvalResult<Vec<Object>> {
    nodes.iter().map(|node| eval(node, env)).collect()
}

/// Evaluates a block of statements in order and returns the value of the last
/// one, or `nil` for an empty block.
///
/// # Example
/// ```
/// use gysp::{
///     ast::Node,
///     interpreter::{evaluator::utils::eval_block, environment::Environment, value::core::Object},
/// };
///
/// let env = Environment::new();
/// let body = [Node::Literal(1.into()), Node::Literal(2.into())];
///
/// assert_eq!(eval_block(&body, &env).unwrap(), Object::Int(2));
/// assert_eq!(eval_block(&[], &env).unwrap(), Object::NIL);
/// ```
pub fn eval_block(body: &[Node], env: &Environment) -> EvalResult<Object> {
    let mut last = Object::NIL;
    for statement in body {
        last = eval(statement, env)?;
    }
    Ok(last)
}

/// Builds the error for a special form used with syntax it does not accept.
pub fn invalid_form(form: &'static str, details: impl Into<String>) -> RuntimeError {
    RuntimeError::InvalidSpecialForm { form,
                                       details: details.into() }
}

/// Rejects qualified names: names containing `.` or `/`, other than the bare
/// `/` of the division primitive.
///
/// # Errors
/// `NotImplemented` for a qualified name.
pub fn check_unqualified(name: &str) -> EvalResult<()> {
    if name != "/" && name.contains(['.', '/']) {
        return Err(RuntimeError::NotImplemented { name: name.to_string() });
    }
    Ok(())
}

/// Returns the name of a symbol node about to be bound.
///
/// # Errors
/// - `InvalidSpecialForm` naming `what` was expected if `node` is not a
///   symbol.
/// - `NotImplemented` if the name is qualified.
pub fn expect_symbol<'a>(form: &'static str, node: &'a Node, what: &str) -> EvalResult<&'a str> {
    let name = node.as_symbol().ok_or_else(|| {
                                   invalid_form(form,
                                                format!("expected {what} to be a symbol, found {node}"))
                               })?;
    check_unqualified(name)?;
    Ok(name)
}

/// Splits a binding vector `[name1 expr1 name2 expr2 ...]` into pairs.
///
/// # Parameters
/// - `form`: The special form, for error messages.
/// - `node`: The binding vector.
///
/// # Errors
/// `InvalidSpecialForm` if `node` is not a list, has an odd number of items,
/// or binds something other than a symbol.
pub fn binding_pairs<'a>(form: &'static str, node: &'a Node) -> EvalResult<Vec<(&'a str, &'a Node)>> {
    let Node::List(items) = node else {
        return Err(invalid_form(form, format!("expected a binding vector, found {node}")));
    };
    if items.len() % 2 != 0 {
        return Err(invalid_form(form,
                                format!("binding vector needs an even number of items, found {}",
                                        items.len())));
    }

    items.chunks_exact(2)
         .map(|pair| -> EvalResult<(&'a str, &'a Node)> {
             Ok((expect_symbol(form, &pair[0], "a binding name")?, &pair[1]))
         })
         .collect()
}

/// Checks that a special form received an argument count in `min..=max`.
///
/// # Errors
/// `InvalidSpecialForm` describing the expected shape.
pub fn check_form_arity(form: &'static str,
                        args: &[Node],
                        min: usize,
                        max: Option<usize>,
                        shape: &str)
                        -> EvalResult<()> {
    let too_many = max.is_some_and(|max| args.len() > max);
    if args.len() < min || too_many {
        return Err(invalid_form(form, format!("expected {shape}, found {} argument(s)", args.len())));
    }
    Ok(())
}

/// Requires every argument to have the same kind as the first one.
///
/// Primitives never convert between kinds, so `(+ 1 1.0)` is an error rather
/// than a float.
///
/// # Errors
/// `TypeMismatch` naming the first offending argument.
pub fn check_same_kind(name: &str, args: &[Object]) -> EvalResult<()> {
    let Some(first) = args.first() else {
        return Ok(());
    };
    match args.iter().find(|arg| arg.type_name() != first.type_name()) {
        Some(other) => Err(RuntimeError::TypeMismatch { details: format!("'{name}' expects every operand to be {}, found {}",
                                                                         first.type_name(),
                                                                         other.type_name()) }),
        None => Ok(()),
    }
}

/// Extracts an integer argument.
///
/// # Errors
/// `TypeMismatch` if `value` is not an int.
pub fn expect_int(name: &str, value: &Object) -> EvalResult<i64> {
    match value {
        Object::Int(n) => Ok(*n),
        other => Err(RuntimeError::TypeMismatch { details: format!("'{name}' expects int arguments, found {}",
                                                                   other.type_name()) }),
    }
}
