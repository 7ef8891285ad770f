use std::{
    fmt,
    hash::{DefaultHasher, Hash, Hasher},
    rc::Rc,
};

use indexmap::IndexMap;
use ordered_float::OrderedFloat;

use crate::{
    ast::LiteralValue,
    interpreter::value::{
        callable::{Function, Macro, Primitive},
        class::{Class, Instance},
        complex::ComplexNumber,
    },
};

/// Represents a runtime value in the interpreter.
///
/// Containers and callables are reference counted, so cloning an `Object` is
/// cheap and never copies a list, dict or function body. Published objects are
/// never mutated in place; assigning to a variable replaces the slot's object.
///
/// Equality and hashing are by value for data (`[1 2]` equals `[1 2]`, and
/// floats compare through [`OrderedFloat`]) and by identity for user-defined
/// functions, classes and instances. Native callables compare by name.
#[derive(Clone)]
pub enum Object {
    /// The absence of a value. The only falsy object.
    Nil,
    /// `true` or `false`.
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// A complex number.
    Complex(ComplexNumber),
    /// An immutable string.
    Str(Rc<str>),
    /// An ordered sequence of objects.
    List(Rc<Vec<Self>>),
    /// A mapping with value-equal keys. Insertion order only affects rendering.
    Dict(Rc<IndexMap<Self, Self>>),
    /// A native function receiving evaluated arguments.
    Prim(&'static Primitive),
    /// A native special form receiving unevaluated argument nodes.
    Macro(&'static Macro),
    /// A user-defined function closing over its defining environment.
    Func(Rc<Function>),
    /// A user-defined class.
    Class(Rc<Class>),
    /// An instance of a user-defined class.
    Instance(Rc<Instance>),
}

impl Object {
    /// The `nil` singleton.
    pub const NIL: Self = Self::Nil;
    /// The `true` singleton.
    pub const TRUE: Self = Self::Bool(true);
    /// The `false` singleton.
    pub const FALSE: Self = Self::Bool(false);

    /// Returns `true` only for `nil`.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns the name of the object's kind, as used in error messages.
    ///
    /// # Example
    /// ```
    /// use gysp::interpreter::value::core::Object;
    ///
    /// assert_eq!(Object::Int(3).type_name(), "int");
    /// assert_eq!(Object::from("hi").type_name(), "str");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Complex(_) => "complex",
            Self::Str(_) => "str",
            Self::List(_) => "list",
            Self::Dict(_) => "dict",
            Self::Prim(_) => "prim",
            Self::Macro(_) => "macro",
            Self::Func(_) => "fn",
            Self::Class(_) => "class",
            Self::Instance(_) => "instance",
        }
    }

    /// Renders the object. With `repr` set, strings are quoted and escaped;
    /// elements of containers are always rendered that way.
    fn render(&self, f: &mut fmt::Formatter<'_>, repr: bool) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Complex(c) => write!(f, "{c}"),
            Self::Str(s) if repr => write!(f, "{:?}", &**s),
            Self::Str(s) => write!(f, "{s}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item:?}")?;
                }
                write!(f, "]")
            },
            Self::Dict(map) => {
                write!(f, "{{")?;
                for (index, (key, value)) in map.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{key:?} {value:?}")?;
                }
                write!(f, "}}")
            },
            Self::Prim(prim) => write!(f, "<prim {}>", prim.name),
            Self::Macro(mac) => write!(f, "<macro {}>", mac.name),
            Self::Func(func) => match &func.name {
                Some(name) => write!(f, "<fn {name}>"),
                None => write!(f, "<fn>"),
            },
            Self::Class(class) => write!(f, "<class {}>", class.name),
            Self::Instance(instance) => write!(f, "{instance}"),
        }
    }
}

impl fmt::Display for Object {
    /// Renders strings raw, the way `print` shows them.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, false)
    }
}

impl fmt::Debug for Object {
    /// Renders strings quoted, the way they are written in source.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, true)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => OrderedFloat(*a) == OrderedFloat(*b),
            (Self::Complex(a), Self::Complex(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Dict(a), Self::Dict(b)) => a == b,
            (Self::Prim(a), Self::Prim(b)) => a.name == b.name,
            (Self::Macro(a), Self::Macro(b)) => a.name == b.name,
            (Self::Func(a), Self::Func(b)) => Rc::ptr_eq(a, b),
            (Self::Class(a), Self::Class(b)) => Rc::ptr_eq(a, b),
            (Self::Instance(a), Self::Instance(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Object {}

impl Hash for Object {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Nil => {},
            Self::Bool(b) => b.hash(state),
            Self::Int(n) => n.hash(state),
            Self::Float(x) => OrderedFloat(*x).hash(state),
            Self::Complex(c) => c.hash(state),
            Self::Str(s) => s.hash(state),
            Self::List(items) => items.hash(state),
            Self::Dict(map) => {
                // Dict equality ignores order, so entries are combined
                // with a commutative sum.
                let combined = map.iter().fold(0u64, |acc, entry| {
                                             let mut hasher = DefaultHasher::new();
                                             entry.hash(&mut hasher);
                                             acc.wrapping_add(hasher.finish())
                                         });
                map.len().hash(state);
                combined.hash(state);
            },
            Self::Prim(prim) => prim.name.hash(state),
            Self::Macro(mac) => mac.name.hash(state),
            Self::Func(func) => std::ptr::hash(Rc::as_ptr(func), state),
            Self::Class(class) => std::ptr::hash(Rc::as_ptr(class), state),
            Self::Instance(instance) => std::ptr::hash(Rc::as_ptr(instance), state),
        }
    }
}

impl From<&LiteralValue> for Object {
    fn from(value: &LiteralValue) -> Self {
        match value {
            LiteralValue::Integer(n) => Self::Int(*n),
            LiteralValue::Float(x) => Self::Float(*x),
            LiteralValue::Complex(c) => Self::Complex(*c),
            LiteralValue::Str(s) => Self::Str(s.as_str().into()),
        }
    }
}

impl From<bool> for Object {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Object {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Object {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<ComplexNumber> for Object {
    fn from(c: ComplexNumber) -> Self {
        Self::Complex(c)
    }
}

impl From<&str> for Object {
    fn from(s: &str) -> Self {
        Self::Str(s.into())
    }
}

impl From<String> for Object {
    fn from(s: String) -> Self {
        Self::Str(s.into())
    }
}

impl From<Vec<Self>> for Object {
    fn from(items: Vec<Self>) -> Self {
        Self::List(Rc::new(items))
    }
}

impl From<IndexMap<Self, Self>> for Object {
    fn from(map: IndexMap<Self, Self>) -> Self {
        Self::Dict(Rc::new(map))
    }
}
