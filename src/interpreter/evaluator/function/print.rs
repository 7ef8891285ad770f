use std::io::{self, Write};

use crate::interpreter::{evaluator::core::EvalResult, value::core::Object};

/// Writes the display renderings of `args` separated by single spaces.
fn write_joined(out: &mut impl Write, args: &[Object]) -> io::Result<()> {
    for (index, arg) in args.iter().enumerate() {
        if index > 0 {
            write!(out, " ")?;
        }
        write!(out, "{arg}")?;
    }
    Ok(())
}

/// Writes the source-like rendering of each argument on its own line.
fn write_debug(out: &mut impl Write, args: &[Object]) -> io::Result<()> {
    for arg in args {
        writeln!(out, "{arg:?}")?;
    }
    Ok(())
}

/// Prints the arguments separated by spaces, without a trailing newline.
///
/// Strings are printed raw. Returns `nil`.
///
/// # Errors
/// `RuntimeError::Io` if stdout cannot be written, for example when it is a
/// closed pipe.
///
/// # Example
/// ```
/// use gysp::interpreter::{evaluator::function::print::print, value::core::Object};
///
/// // The function writes to stdout, but the doctest
/// // only checks the returned result.
/// let result = print(&[Object::Int(42), Object::from("apples")]).unwrap();
///
/// assert_eq!(result, Object::NIL);
/// ```
pub fn print(args: &[Object]) -> EvalResult<Object> {
    let mut stdout = io::stdout().lock();
    write_joined(&mut stdout, args)?;
    stdout.flush()?;
    Ok(Object::NIL)
}

/// Prints the arguments separated by spaces, followed by a newline.
///
/// Returns `nil`.
///
/// # Errors
/// `RuntimeError::Io` if stdout cannot be written.
pub fn println(args: &[Object]) -> EvalResult<Object> {
    let mut stdout = io::stdout().lock();
    write_joined(&mut stdout, args)?;
    writeln!(stdout)?;
    Ok(Object::NIL)
}

/// Prints the source-like rendering of each argument on its own line, so
/// strings show their quotes and escapes.
///
/// Returns `nil`.
///
/// # Errors
/// `RuntimeError::Io` if stdout cannot be written.
pub fn debug(args: &[Object]) -> EvalResult<Object> {
    write_debug(&mut io::stdout().lock(), args)?;
    Ok(Object::NIL)
}
