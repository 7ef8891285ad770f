use crate::error::LexError;

/// Decodes the escape sequences in the body of a string literal.
///
/// Handles the single-character escapes `\" \\ \a \b \e \f \n \r \t \v` and
/// the numeric escapes `\xHH`, `\uHHHH`, `\UHHHHHHHH` and `\OOO` (one to three
/// octal digits). The body is scanned once from left to right, so a decoded
/// character is never decoded again.
///
/// # Parameters
/// - `body`: The literal without its surrounding quotes.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// `LexError::MalformedEscape` for unknown escape letters, hexadecimal escapes
/// with the wrong number of digits, and values that are not Unicode scalars.
pub(super) fn decode(body: &str, line: usize) -> Result<String, LexError> {
    let mut decoded = String::with_capacity(body.len());
    let mut rest = body;

    while let Some(pos) = rest.find('\\') {
        decoded.push_str(&rest[..pos]);
        let escape = &rest[pos..];
        let (ch, len) =
            decode_escape(escape).ok_or_else(|| LexError::MalformedEscape { escape:
                                                                                escape.chars()
                                                                                      .take(10)
                                                                                      .collect(),
                                                                            line })?;
        decoded.push(ch);
        rest = &escape[len..];
    }

    decoded.push_str(rest);
    Ok(decoded)
}

/// Decodes one escape sequence at the start of `escape`, returning the
/// character and the number of bytes consumed.
fn decode_escape(escape: &str) -> Option<(char, usize)> {
    let kind = escape[1..].chars().next()?;

    let simple = match kind {
        '"' => Some('"'),
        '\\' => Some('\\'),
        'a' => Some('\x07'),
        'b' => Some('\x08'),
        'e' => Some('\x1b'),
        'f' => Some('\x0c'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'v' => Some('\x0b'),
        _ => None,
    };
    if let Some(ch) = simple {
        return Some((ch, 1 + kind.len_utf8()));
    }

    // (radix, minimum digits, maximum digits, offset of the first digit)
    let (radix, min, max, start) = match kind {
        'x' => (16, 2, 2, 2),
        'u' => (16, 4, 4, 2),
        'U' => (16, 8, 8, 2),
        '0'..='7' => (8, 1, 3, 1),
        _ => return None,
    };

    let candidates = &escape[start..];
    let count = candidates.chars().take(max).take_while(|c| c.is_digit(radix)).count();
    if count < min {
        return None;
    }

    let code = u32::from_str_radix(&candidates[..count], radix).ok()?;
    Some((char::from_u32(code)?, start + count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(decode("hello, world", 1).unwrap(), "hello, world");
    }

    #[test]
    fn simple_escapes() {
        assert_eq!(decode(r#"\"\a\b\e\f\n\r\t\v\\"#, 1).unwrap(),
                   "\"\x07\x08\x1b\x0c\n\r\t\x0b\\");
    }

    #[test]
    fn numeric_escapes() {
        assert_eq!(decode(r"\x41é\U0001F600\101\7", 1).unwrap(), "A\u{e9}\u{1F600}A\x07");
    }

    #[test]
    fn octal_takes_at_most_three_digits() {
        assert_eq!(decode(r"\1011", 1).unwrap(), "A1");
    }

    #[test]
    fn hex_takes_exactly_its_digit_count() {
        assert_eq!(decode(r"\x414", 1).unwrap(), "A4");
        assert!(decode(r"\xg1", 1).is_err());
    }

    #[test]
    fn decoded_backslash_is_not_decoded_again() {
        assert_eq!(decode(r"\x5cn", 1).unwrap(), "\\n");
    }

    #[test]
    fn malformed_escape_reports_line() {
        let err = decode(r"ok \z", 7).unwrap_err();
        assert_eq!(err,
                   LexError::MalformedEscape { escape: r"\z".to_string(),
                                               line:   7, });
    }

    #[test]
    fn trailing_backslash_is_malformed() {
        assert!(decode("abc\\", 1).is_err());
    }
}
