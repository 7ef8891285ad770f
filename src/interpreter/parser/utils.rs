use crate::{
    ast::{LiteralValue, Node},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
        value::complex::ComplexNumber,
    },
};

/// Builds the node for a bracketed form once its closing bracket is reached.
///
/// - `)` yields a `Call` whose head is the first item.
/// - `]` yields a `List` of the items unchanged.
/// - `}` yields a `Dict`, pairing items up as key, value, key, value.
///
/// # Parameters
/// - `closer`: The closing bracket token.
/// - `items`: Everything parsed between the brackets.
///
/// # Errors
/// - `EmptyCall` for `()`.
/// - `OddDictEntries` for a dict with an odd number of items.
pub(in crate::interpreter::parser) fn build_form(closer: &Token,
                                                 items: Vec<Node>)
                                                 -> ParseResult<Node> {
    match closer.kind {
        TokenKind::CallClose => {
            let mut items = items.into_iter();
            let Some(head) = items.next() else {
                return Err(ParseError::EmptyCall { line: closer.line });
            };
            Ok(Node::Call { head: Box::new(head),
                            args: items.collect(), })
        },
        TokenKind::DictClose => {
            if items.len() % 2 != 0 {
                return Err(ParseError::OddDictEntries { count: items.len(),
                                                        line:  closer.line, });
            }
            let mut entries = Vec::with_capacity(items.len() / 2);
            let mut items = items.into_iter();
            while let (Some(key), Some(value)) = (items.next(), items.next()) {
                entries.push((key, value));
            }
            Ok(Node::Dict(entries))
        },
        _ => Ok(Node::List(items)),
    }
}

/// Converts a literal token into its value.
///
/// String tokens already carry decoded text. Complex literals are split at the
/// sign that separates the real part from the imaginary part.
///
/// # Errors
/// `LiteralTooLarge` if an integer does not fit in 64 bits.
pub(in crate::interpreter::parser) fn parse_literal(token: &Token) -> ParseResult<LiteralValue> {
    let too_large = || ParseError::LiteralTooLarge { text: token.text.clone(),
                                                     line: token.line, };

    match token.kind {
        TokenKind::Integer => token.text.parse().map(LiteralValue::Integer).map_err(|_| too_large()),
        TokenKind::Float => token.text.parse().map(LiteralValue::Float).map_err(|_| too_large()),
        TokenKind::Complex => parse_complex(&token.text).map(LiteralValue::Complex)
                                                        .ok_or_else(too_large),
        _ => Ok(LiteralValue::Str(token.text.clone())),
    }
}

/// Splits `a+bj` / `a-bj` into its parts.
fn parse_complex(text: &str) -> Option<ComplexNumber> {
    let body = text.strip_suffix('j')?;
    let split = body[1..].rfind(['+', '-'])? + 1;

    let real = body[..split].parse().ok()?;
    let imaginary = body[split..].parse().ok()?;
    Some(ComplexNumber::new(real, imaginary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complex_literals_split_at_the_middle_sign() {
        assert_eq!(parse_complex("1+2j"), Some(ComplexNumber::new(1.0, 2.0)));
        assert_eq!(parse_complex("-1.5-.5j"), Some(ComplexNumber::new(-1.5, -0.5)));
        assert_eq!(parse_complex("+3-0j"), Some(ComplexNumber::new(3.0, 0.0)));
    }

    #[test]
    fn integer_overflow_is_reported() {
        let token = Token { kind: TokenKind::Integer,
                            text: "9223372036854775808".to_string(),
                            line: 4, };
        assert_eq!(parse_literal(&token),
                   Err(ParseError::LiteralTooLarge { text: "9223372036854775808".to_string(),
                                                     line: 4, }));

        let token = Token { kind: TokenKind::Integer,
                            text: "-9223372036854775808".to_string(),
                            line: 4, };
        assert_eq!(parse_literal(&token), Ok(LiteralValue::Integer(i64::MIN)));
    }
}
