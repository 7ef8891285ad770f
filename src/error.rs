/// Lexing errors.
///
/// Raised while turning source text into tokens: input that no token pattern
/// recognizes, and string literals whose escape sequences are malformed.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while grouping tokens into the node
/// tree: unbalanced or mismatched brackets, empty call forms, odd-length dict
/// literals, and literals that do not fit their runtime representation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unbound
/// names, arity and type mismatches, calls of non-callable values, malformed
/// special forms and arithmetic failures.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error produced while running source text through the whole pipeline.
///
/// Each phase reports its own error type; this enum lets callers that drive
/// every phase at once (such as [`crate::run`]) propagate all of them with `?`.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The tokenizer rejected the input.
    Lex(LexError),
    /// The parser rejected the token stream.
    Parse(ParseError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
