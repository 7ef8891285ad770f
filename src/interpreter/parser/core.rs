use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::utils::{build_form, parse_literal},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deeply brackets and quote markers may nest.
pub const MAX_NESTING: usize = 256;

/// Parses a whole program.
///
/// The result is always a `Node::List` whose children are the top-level forms
/// in source order.
///
/// # Errors
/// - `UnexpectedEndOfInput` if a bracket is never closed or a quote marker is
///   the last token.
/// - `UnexpectedClosingBracket` for a closing bracket that does not match the
///   innermost open bracket.
/// - `EmptyCall`, `OddDictEntries` and `LiteralTooLarge` for malformed forms
///   and literals.
/// - `NestingTooDeep` once forms nest more than [`MAX_NESTING`] levels.
///
/// # Example
/// ```
/// use gysp::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let root = parse(&tokenize("(+ 1 2) [x {\"k\" 3}]").unwrap()).unwrap();
/// assert_eq!(root.to_string(), "[(+ 1 2) [x {\"k\" 3}]]");
///
/// assert!(parse(&tokenize("(+ 1 2").unwrap()).is_err());
/// assert!(parse(&tokenize("(+ 1 2))").unwrap()).is_err());
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Node> {
    let root = parse_sequence(&mut tokens.iter(), None, 0)?;

    if let Node::List(forms) = &root {
        tracing::debug!(forms = forms.len(), "parsed program");
    }
    Ok(root)
}

/// Parses items until the closing bracket that matches `opener`.
///
/// With no opener this is the top level, which runs until the end of input
/// and yields the root `List`. Otherwise the accumulated items become the node
/// of the opener's bracket family.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `opener`.
/// - `opener`: The opening bracket, or `None` at the top level.
/// - `depth`: How many forms enclose the items about to be parsed.
fn parse_sequence<'a, I>(tokens: &mut I,
                         opener: Option<&'a Token>,
                         depth: usize)
                         -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let closer = opener.and_then(|token| token.kind.closer());
    let mut items = Vec::new();

    while let Some(token) = tokens.next() {
        if token.kind.is_closer() {
            if closer != Some(token.kind) {
                return Err(ParseError::UnexpectedClosingBracket { found: token.text.clone(),
                                                                  line:  token.line, });
            }
            return build_form(token, items);
        }
        items.push(parse_item(tokens, token, depth)?);
    }

    match (opener, closer) {
        (Some(open), Some(close)) => {
            Err(ParseError::UnexpectedEndOfInput { expected: format!("'{close}' to close '{}'",
                                                                     open.text),
                                                   line:     open.line, })
        },
        _ => Ok(Node::List(items)),
    }
}

/// Parses one expression starting at `token`, which has already been taken
/// from the iterator.
///
/// Opening brackets recurse into [`parse_sequence`]; quote markers wrap the
/// following expression in a call to `quote`, `quasiquote`, `unquote` or
/// `unquote-splice`; everything else is a leaf.
fn parse_item<'a, I>(tokens: &mut I, token: &'a Token, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let nested = token.kind.closer().is_some() || token.kind.quote_symbol().is_some();
    if nested && depth >= MAX_NESTING {
        return Err(ParseError::NestingTooDeep { limit: MAX_NESTING,
                                                line:  token.line, });
    }

    if token.kind.closer().is_some() {
        return parse_sequence(tokens, Some(token), depth + 1);
    }

    if let Some(name) = token.kind.quote_symbol() {
        let quoted = match tokens.next() {
            Some(next) if next.kind.is_closer() => {
                return Err(ParseError::UnexpectedClosingBracket { found: next.text.clone(),
                                                                  line:  next.line, });
            },
            Some(next) => parse_item(tokens, next, depth + 1)?,
            None => {
                return Err(ParseError::UnexpectedEndOfInput { expected:
                                                                  format!("an expression after '{}'",
                                                                          token.text),
                                                              line:     token.line, });
            },
        };
        return Ok(Node::Call { head: Box::new(Node::symbol(name)),
                               args: vec![quoted], });
    }

    match token.kind {
        TokenKind::Symbol => Ok(Node::Symbol(token.text.clone())),
        _ => parse_literal(token).map(Node::Literal),
    }
}
