#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexError {
    /// No token pattern matched at the current position.
    UnrecognizedInput {
        /// The text that could not be tokenized.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal contained an escape sequence that cannot be decoded.
    MalformedEscape {
        /// The offending escape sequence, including the backslash.
        escape: String,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedInput { text, line } => {
                write!(f, "Error on line {line}: Cannot identify the next token: '{text}'.")
            },
            Self::MalformedEscape { escape, line } => {
                write!(f, "Error on line {line}: Malformed escape sequence '{escape}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
