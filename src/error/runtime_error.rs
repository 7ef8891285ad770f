use crate::interpreter::value::callable::Arity;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to read or assign a name that no frame binds.
    UnboundVariable {
        /// The name of the variable.
        name: String,
    },
    /// A callable received the wrong number of arguments.
    ArityMismatch {
        /// The name of the callable, or `<fn>` for anonymous functions.
        name:     String,
        /// The accepted argument counts.
        expected: Arity,
        /// The number of arguments actually supplied.
        found:    usize,
    },
    /// Operand types did not line up, or a value of the wrong type was used.
    TypeMismatch {
        /// Details about the type mismatch.
        details: String,
    },
    /// The head of a call form evaluated to something that cannot be called.
    NotCallable {
        /// The rendering of the offending value.
        found: String,
    },
    /// Qualified (dotted or slashed) names are reserved and not resolvable yet.
    NotImplemented {
        /// The name that was looked up.
        name: String,
    },
    /// An argument was invalid or out of range.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
    /// A special form was used with syntax it does not accept.
    InvalidSpecialForm {
        /// The special form's name.
        form:    &'static str,
        /// What was wrong with it.
        details: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Integer arithmetic overflowed.
    Overflow,
    /// Writing program output failed.
    Io {
        /// The underlying I/O error message.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundVariable { name } => write!(f, "Variable '{name}' is not defined."),
            Self::ArityMismatch { name, expected, found } => write!(f,
                                                                    "'{name}' expects {expected} argument(s), but {found} were given."),
            Self::TypeMismatch { details } => write!(f, "Type error: {details}."),
            Self::NotCallable { found } => write!(f, "Cannot call {found}: it is not a function."),
            Self::NotImplemented { name } => {
                write!(f, "Qualified name '{name}' cannot be resolved: not implemented.")
            },
            Self::InvalidArgument { details } => write!(f, "Invalid argument: {details}."),
            Self::InvalidSpecialForm { form, details } => {
                write!(f, "Invalid '{form}' form: {details}.")
            },
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::Overflow => write!(f, "Integer overflow while trying to compute result."),
            Self::Io { details } => write!(f, "Failed to write output: {details}."),
        }
    }
}

impl std::error::Error for RuntimeError {}

impl From<std::io::Error> for RuntimeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io { details: e.to_string() }
    }
}
