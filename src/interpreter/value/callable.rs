use std::fmt;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::EvalResult, value::core::Object},
};

/// Signature of a primitive: evaluated arguments in, one object out.
pub type PrimitiveFn = fn(&[Object]) -> EvalResult<Object>;

/// Signature of a special form: the unevaluated argument nodes and the
/// caller's environment in, a replacement node out. The evaluator evaluates
/// the replacement in the caller's environment.
pub type MacroFn = fn(&[Node], &Environment) -> EvalResult<Node>;

/// Specifies the allowed number of arguments for a primitive.
///
/// - `Exact(n)` means the primitive must receive exactly `n` arguments.
/// - `OneOf(slice)` means the primitive accepts any count listed in `slice`.
/// - `AtLeast(n)` means the primitive accepts `n` or more arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// # Example
    /// ```
    /// use gysp::interpreter::value::callable::Arity;
    ///
    /// assert!(Arity::OneOf(&[1, 2, 3]).check(2));
    /// assert!(!Arity::AtLeast(1).check(0));
    /// ```
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(counts) => counts.contains(&n),
            Self::AtLeast(m) => n >= *m,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::OneOf(counts) => match counts.split_last() {
                Some((last, [])) => write!(f, "{last}"),
                Some((last, rest)) => {
                    let rest = rest.iter().map(ToString::to_string).collect::<Vec<_>>();
                    write!(f, "{} or {last}", rest.join(", "))
                },
                None => write!(f, "no"),
            },
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// A native function of the standard library.
pub struct Primitive {
    /// The name the primitive is bound to in the standard environment.
    pub name:  &'static str,
    /// Accepted argument counts.
    pub arity: Arity,
    /// The implementation.
    pub func:  PrimitiveFn,
}

impl Primitive {
    /// Checks the argument count and invokes the primitive.
    ///
    /// # Errors
    /// `RuntimeError::ArityMismatch` if the argument count is not accepted,
    /// otherwise whatever the primitive itself reports.
    pub fn call(&self, args: &[Object]) -> EvalResult<Object> {
        if !self.arity.check(args.len()) {
            return Err(RuntimeError::ArityMismatch { name:     self.name.to_string(),
                                                     expected: self.arity,
                                                     found:    args.len(), });
        }
        (self.func)(args)
    }
}

/// A native special form of the standard library.
pub struct Macro {
    /// The keyword the form is bound to in the standard environment.
    pub name: &'static str,
    /// The expansion function.
    pub func: MacroFn,
}

/// A user-defined function.
///
/// The function keeps its defining environment alive; calls bind the
/// parameters in a fresh child of that environment.
pub struct Function {
    /// The name given by a named `fn` form, `None` for anonymous functions.
    pub name:   Option<String>,
    /// Parameter names, in order.
    pub params: Vec<String>,
    /// The body statements. The value of the last one is the call's result.
    pub body:   Vec<Node>,
    /// The environment the function was defined in.
    pub env:    Environment,
}

impl Function {
    /// The name used in error messages.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<fn>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_renders_for_messages() {
        assert_eq!(Arity::Exact(2).to_string(), "2");
        assert_eq!(Arity::OneOf(&[1, 2, 3]).to_string(), "1, 2 or 3");
        assert_eq!(Arity::AtLeast(1).to_string(), "at least 1");
    }

    #[test]
    fn primitive_checks_arity_before_running() {
        static FIRST: Primitive = Primitive { name:  "first",
                                              arity: Arity::Exact(1),
                                              func:  |args| Ok(args[0].clone()), };

        assert_eq!(FIRST.call(&[Object::Int(4)]), Ok(Object::Int(4)));
        assert_eq!(FIRST.call(&[]),
                   Err(RuntimeError::ArityMismatch { name:     "first".to_string(),
                                                     expected: Arity::Exact(1),
                                                     found:    0, }));
    }
}
