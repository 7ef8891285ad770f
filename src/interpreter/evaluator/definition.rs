use std::rc::Rc;

use indexmap::IndexMap;

use crate::{
    ast::Node,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{EvalResult, eval},
            utils::{binding_pairs, check_form_arity, expect_symbol, invalid_form},
        },
        value::{callable::Function, class::Class, core::Object},
    },
};

/// Expands a `fn` form.
///
/// - `(fn name [params...] body...)` defines a named function and binds it in
///   the current frame.
/// - `(fn [params...] body...)` yields an anonymous function.
///
/// The function captures the current environment. A named function is bound
/// in that same environment, so it can call itself.
///
/// # Errors
/// `InvalidSpecialForm` if the parameter vector is missing or holds anything
/// other than symbols.
pub fn fn_form(args: &[Node], env: &Environment) -> EvalResult<Node> {
    check_form_arity("fn", args, 1, None, "an optional name, a parameter vector and a body")?;

    let (name, rest) = match &args[0] {
        Node::Symbol(_) => {
            (Some(expect_symbol("fn", &args[0], "the name")?.to_string()), &args[1..])
        },
        _ => (None, args),
    };
    let Some((Node::List(params), body)) = rest.split_first() else {
        return Err(invalid_form("fn", "expected a parameter vector"));
    };

    let params = params.iter()
                       .map(|param| expect_symbol("fn", param, "a parameter").map(str::to_string))
                       .collect::<EvalResult<Vec<_>>>()?;

    let func = Object::Func(Rc::new(Function { name: name.clone(),
                                               params,
                                               body: body.to_vec(),
                                               env: env.clone() }));
    if let Some(name) = name {
        env.declare_and_set(&name, func.clone());
    }
    Ok(Node::Wrapped(func))
}

/// Expands a `def` form.
///
/// - `(def name)` declares `name` as `nil` in the current frame.
/// - `(def name expr)` evaluates `expr` and binds the result in the current
///   frame, shadowing any outer binding.
///
/// # Returns
/// The bound value, wrapped.
pub fn def_form(args: &[Node], env: &Environment) -> EvalResult<Node> {
    check_form_arity("def", args, 1, Some(2), "a name and an optional value")?;
    let name = expect_symbol("def", &args[0], "the name")?;

    match args.get(1) {
        None => {
            env.declare(name);
            Ok(Node::Wrapped(Object::NIL))
        },
        Some(expr) => {
            let value = eval(expr, env)?;
            env.declare_and_set(name, value.clone());
            Ok(Node::Wrapped(value))
        },
    }
}

/// Expands a `set` form: `(set name expr)`.
///
/// Replaces the nearest existing binding of `name`; it never creates one.
///
/// # Errors
/// `UnboundVariable` if no frame binds `name`.
pub fn set_form(args: &[Node], env: &Environment) -> EvalResult<Node> {
    check_form_arity("set", args, 2, Some(2), "a name and a value")?;
    let name = expect_symbol("set", &args[0], "the name")?;

    let value = eval(&args[1], env)?;
    env.set(name, value.clone())?;
    Ok(Node::Wrapped(value))
}

/// Expands a `class` form: `(class Name [field1 init1 field2 init2 ...])`.
///
/// The initializers are evaluated once, now, in the current environment. The
/// class is bound to `Name` in the current frame; `(new Name)` creates
/// instances of it.
pub fn class_form(args: &[Node], env: &Environment) -> EvalResult<Node> {
    check_form_arity("class", args, 2, Some(2), "a name and a field vector")?;
    let name = expect_symbol("class", &args[0], "the class name")?;

    let mut fields = IndexMap::new();
    for (field, init) in binding_pairs("class", &args[1])? {
        fields.insert(field.to_string(), eval(init, env)?);
    }

    let class = Object::Class(Rc::new(Class { name: name.to_string(),
                                              fields }));
    env.declare_and_set(name, class.clone());
    Ok(Node::Wrapped(class))
}
