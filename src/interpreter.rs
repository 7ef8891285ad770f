/// The environment module implements lexical scope.
///
/// An environment is a chain of frames, each mapping names to objects. Frames
/// are created for the standard library, for every function call, and for
/// every `let`, `do` and `for` form.
///
/// # Responsibilities
/// - Declares, looks up and reassigns variables along the scope chain.
/// - Keeps defining frames alive for closures that captured them.
pub mod environment;
/// The evaluator module executes the node tree and computes results.
///
/// The evaluator walks nodes against an environment, dispatches calls to
/// primitives, special forms and user-defined functions, and hosts the
/// standard library.
///
/// # Responsibilities
/// - Evaluates every node kind, running tail calls in a loop.
/// - Checks arity and operand types, reporting runtime errors.
/// - Provides the standard environment with its primitives and special forms.
pub mod evaluator;
/// The generator module enumerates Cartesian products.
///
/// Drives the `for` special form, which visits every combination of elements
/// of its sources.
pub mod generator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens:
/// brackets, literals, quote markers and symbols. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, text and
///   source line.
/// - Decodes escape sequences in string literals.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the node tree from tokens.
///
/// The parser matches the three bracket families, expands the quote reader
/// markers into calls, and turns literal tokens into leaves.
///
/// # Responsibilities
/// - Converts tokens into a single root node holding every top-level form.
/// - Reports unbalanced brackets, empty calls and odd dict literals with line
///   information.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares every kind of object a program can produce: nil,
/// booleans, numbers, strings, lists, dicts, callables, classes and
/// instances.
///
/// # Responsibilities
/// - Defines the `Object` enum and its rendering.
/// - Implements value equality and hashing for dict keys.
/// - Defines callables and the arity rules they are checked against.
pub mod value;
