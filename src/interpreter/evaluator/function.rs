/// The standard library tables.
///
/// Declares every primitive and special form with its name and arity, and
/// builds the root environment that binds them.
pub mod core;
/// Arithmetic primitives: `+ - * / %`.
///
/// Operands must all share one kind; there is no implicit widening.
pub mod arithmetic;
/// The `range` primitive.
pub mod range;
/// The `print`, `println` and `debug` primitives.
///
/// Output goes to standard output.
pub mod print;
/// The `new` primitive, which instantiates a class.
pub mod instance;
