use std::fmt;

use crate::interpreter::value::{complex::ComplexNumber, core::Object};

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constants that can be written directly in source
/// code: integers, floats, complex numbers and strings. Evaluating a literal
/// never fails and always yields the object of the matching kind.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Float(f64),
    /// A complex number literal, with real and imaginary parts.
    Complex(ComplexNumber),
    /// A string literal with its escapes already decoded.
    Str(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<ComplexNumber> for LiteralValue {
    fn from(value: ComplexNumber) -> Self {
        Self::Complex(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Complex(c) => write!(f, "{c}"),
            Self::Str(s) => write!(f, "{s:?}"),
        }
    }
}

/// A node of the syntax tree produced by the parser.
///
/// Every bracket family has its own variant: `( )` builds a [`Node::Call`],
/// `[ ]` a [`Node::List`] and `{ }` a [`Node::Dict`]. The tree is strict (no
/// node is shared), and the parser always returns a `List` as its root whose
/// children are the top-level forms of the program.
///
/// # Example
/// ```
/// use gysp::ast::{LiteralValue, Node};
///
/// let node = Node::Call { head: Box::new(Node::Symbol("+".into())),
///                         args: vec![Node::Literal(1.into()), Node::Literal(2.into())], };
/// assert_eq!(node.to_string(), "(+ 1 2)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A reference to a variable or special-form keyword.
    Symbol(String),
    /// An application; `head` must evaluate to something callable.
    Call {
        /// The callee.
        head: Box<Node>,
        /// The arguments, in source order.
        args: Vec<Node>,
    },
    /// A list constructor.
    List(Vec<Node>),
    /// A dict constructor. Entries keep source order so that later duplicate
    /// keys overwrite earlier ones on evaluation.
    Dict(Vec<(Node, Node)>),
    /// A constant leaf.
    Literal(LiteralValue),
    /// An already-evaluated object put back into the tree. Evaluating it
    /// returns the object unchanged.
    Wrapped(Object),
}

impl Node {
    /// Shorthand for a symbol node.
    #[must_use]
    pub fn symbol(name: &str) -> Self {
        Self::Symbol(name.to_string())
    }

    /// Returns the symbol's name if this node is a symbol.
    #[must_use]
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(name) => Some(name),
            _ => None,
        }
    }
}

impl From<LiteralValue> for Node {
    fn from(value: LiteralValue) -> Self {
        Self::Literal(value)
    }
}

impl From<Object> for Node {
    fn from(value: Object) -> Self {
        Self::Wrapped(value)
    }
}

/// Writes `items` separated by single spaces.
fn write_spaced<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(name) => write!(f, "{name}"),
            Self::Call { head, args } => {
                write!(f, "({head}")?;
                for arg in args {
                    write!(f, " {arg}")?;
                }
                write!(f, ")")
            },
            Self::List(items) => {
                write!(f, "[")?;
                write_spaced(f, items)?;
                write!(f, "]")
            },
            Self::Dict(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{key} {value}")?;
                }
                write!(f, "}}")
            },
            Self::Literal(value) => write!(f, "{value}"),
            Self::Wrapped(object) => write!(f, "{object:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_source_like() {
        let node = Node::List(vec![Node::Call { head: Box::new(Node::symbol("f")),
                                                args: vec![Node::Literal(1.5.into())], },
                                   Node::Dict(vec![(Node::Literal("k".into()),
                                                    Node::Literal(ComplexNumber::new(1.0, -2.0).into()))]),
                                   Node::List(vec![])]);
        assert_eq!(node.to_string(), r#"[(f 1.5) {"k" 1-2j} []]"#);
    }

    #[test]
    fn wrapped_objects_render_their_debug_form() {
        assert_eq!(Node::Wrapped(Object::Str("a\tb".into())).to_string(), r#""a\tb""#);
        assert_eq!(Node::Wrapped(Object::NIL).to_string(), "nil");
    }
}
