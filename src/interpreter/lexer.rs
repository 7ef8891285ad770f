use logos::Logos;

use crate::error::LexError;

mod escape;

/// The kind of a lexical token.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Symbols can never start the way a number does, so the longest-match rule
/// of the generated lexer classifies `1+2j` as one complex literal, `3.0` as a
/// float and `3abc` as the integer `3` followed by the symbol `abc`.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    CallOpen,
    /// `)`
    #[token(")")]
    CallClose,
    /// `[`
    #[token("[")]
    ListOpen,
    /// `]`
    #[token("]")]
    ListClose,
    /// `{`
    #[token("{")]
    DictOpen,
    /// `}`
    #[token("}")]
    DictClose,
    /// String literal tokens, such as `"a\tb"`. Escapes are decoded by
    /// [`tokenize`].
    #[regex(r#""([^"\\]|\\[\s\S])*""#, count_lines, allow_greedy = true)]
    Str,
    /// Complex literal tokens with a real and an imaginary part, such as
    /// `1+2j` or `-.5-3.25j`.
    #[regex(r"[+\-]?([0-9]*\.)?[0-9]+[+\-]([0-9]*\.)?[0-9]+j")]
    Complex,
    /// Floating-point literal tokens, such as `3.14`, `.5` or `-0.25`.
    #[regex(r"[+\-]?[0-9]*\.[0-9]+")]
    Float,
    /// Integer literal tokens, such as `42` or `-7`.
    #[regex(r"[+\-]?[0-9]+")]
    Integer,
    /// `'`
    #[token("'")]
    Quote,
    /// `` ` ``
    #[token("`")]
    Quasiquote,
    /// `~`
    #[token("~")]
    Unquote,
    /// `~@`
    #[token("~@")]
    UnquoteSplice,
    /// Symbol tokens; names such as `x`, `+`, `println` or `a.b`.
    #[regex(r#"[^\s\[\](){}'";`~0-9+\-.][^\s\[\](){}'";]*"#, allow_greedy = true)]
    #[regex(r#"[+\-]([^\s\[\](){}'";0-9.][^\s\[\](){}'";]*)?"#, allow_greedy = true)]
    #[regex(r#"[+\-]?\.([^\s\[\](){}'";0-9][^\s\[\](){}'";]*)?"#, allow_greedy = true)]
    Symbol,
    /// `; Comments.`
    #[regex(r";[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Spaces, tabs and newlines.
    #[regex(r"\s+", |lex| {
        count_lines(lex);
        logos::Skip
    })]
    Whitespace,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Advances the line counter past every newline in the current slice.
fn count_lines(lex: &mut logos::Lexer<TokenKind>) {
    lex.extras.line += lex.slice().matches('\n').count();
}

impl TokenKind {
    /// Returns the closing bracket that ends a form opened by this token, or
    /// `None` if this token does not open a form.
    #[must_use]
    pub const fn closer(self) -> Option<Self> {
        match self {
            Self::CallOpen => Some(Self::CallClose),
            Self::ListOpen => Some(Self::ListClose),
            Self::DictOpen => Some(Self::DictClose),
            _ => None,
        }
    }

    /// Returns `true` for the three closing brackets.
    #[must_use]
    pub const fn is_closer(self) -> bool {
        matches!(self, Self::CallClose | Self::ListClose | Self::DictClose)
    }

    /// Returns the name of the reader macro a quote marker stands for.
    #[must_use]
    pub const fn quote_symbol(self) -> Option<&'static str> {
        match self {
            Self::Quote => Some("quote"),
            Self::Quasiquote => Some("quasiquote"),
            Self::Unquote => Some("unquote"),
            Self::UnquoteSplice => Some("unquote-splice"),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::CallOpen => "(",
            Self::CallClose => ")",
            Self::ListOpen => "[",
            Self::ListClose => "]",
            Self::DictOpen => "{",
            Self::DictClose => "}",
            Self::Str => "string",
            Self::Complex => "complex",
            Self::Float => "float",
            Self::Integer => "integer",
            Self::Quote => "'",
            Self::Quasiquote => "`",
            Self::Unquote => "~",
            Self::UnquoteSplice => "~@",
            Self::Symbol => "symbol",
            Self::Comment => "comment",
            Self::Whitespace => "whitespace",
        };
        write!(f, "{text}")
    }
}

/// A token: its kind, its text and the line it starts on.
///
/// For string literals `text` holds the decoded contents without the
/// surrounding quotes; for every other kind it is the matched source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// The token's text.
    pub text: String,
    /// The 1-based source line the token starts on.
    pub line: usize,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{} {}}}", self.kind, self.text)
    }
}

/// Converts source text into an ordered sequence of tokens.
///
/// Whitespace and `;` comments are skipped. String literals have their quotes
/// stripped and their escape sequences decoded.
///
/// # Errors
/// - `LexError::UnrecognizedInput` if no token pattern matches.
/// - `LexError::MalformedEscape` if a string literal holds an escape sequence
///   that cannot be decoded.
///
/// # Example
/// ```
/// use gysp::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("(+ 1 2.5 \"hi\")").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::CallOpen,
///             TokenKind::Symbol,
///             TokenKind::Integer,
///             TokenKind::Float,
///             TokenKind::Str,
///             TokenKind::CallClose]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        let slice = lexer.slice();
        let line = lexer.extras.line.saturating_sub(slice.matches('\n').count());

        let Ok(kind) = kind else {
            return Err(LexError::UnrecognizedInput { text: slice.to_string(),
                                                     line });
        };

        let text = match kind {
            TokenKind::Str => escape::decode(&slice[1..slice.len() - 1], line)?,
            _ => slice.to_string(),
        };
        tokens.push(Token { kind, text, line });
    }

    tracing::debug!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}
