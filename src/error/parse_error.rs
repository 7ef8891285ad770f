#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while building the node tree.
pub enum ParseError {
    /// The token stream ended while a bracket was still open, or right after a
    /// quote marker.
    UnexpectedEndOfInput {
        /// The bracket or marker that was left without its counterpart.
        expected: String,
        /// The source line of the bracket or marker left open.
        line:     usize,
    },
    /// A closing bracket did not match the innermost open bracket, or there
    /// was no open bracket at all.
    UnexpectedClosingBracket {
        /// The closing bracket found.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A call form `()` had no head.
    EmptyCall {
        /// The source line of the closing parenthesis.
        line: usize,
    },
    /// A dict literal had an odd number of items.
    OddDictEntries {
        /// How many items the literal held.
        count: usize,
        /// The source line of the closing brace.
        line:  usize,
    },
    /// Brackets or quote markers were nested deeper than the parser allows.
    NestingTooDeep {
        /// The deepest nesting accepted.
        limit: usize,
        /// The source line of the form that went past the limit.
        line:  usize,
    },
    /// A literal value was too large to be represented safely.
    LiteralTooLarge {
        /// The literal text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedEndOfInput { expected, line } => write!(f,
                                                                    "Error on line {line}: Premature end of input, expected {expected}."),
            Self::UnexpectedClosingBracket { found, line } => {
                write!(f, "Error on line {line}: Unexpected closing bracket '{found}'.")
            },
            Self::EmptyCall { line } => {
                write!(f, "Error on line {line}: A call form needs at least a head.")
            },
            Self::OddDictEntries { count, line } => write!(f,
                                                           "Error on line {line}: A dict literal needs an even number of items, found {count}."),
            Self::NestingTooDeep { limit, line } => write!(f,
                                                           "Error on line {line}: Forms are nested deeper than {limit} levels."),
            Self::LiteralTooLarge { text, line } => {
                write!(f, "Error on line {line}: Literal {text} is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
