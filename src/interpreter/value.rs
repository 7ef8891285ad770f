/// Complex number support.
///
/// Defines the `ComplexNumber` type used for arithmetic with real and imaginary
/// parts, with equality and hashing that make it usable as a dict key.
pub mod complex;

/// The runtime object.
///
/// Defines the `Object` enum covering every value a program can produce, its
/// source-like rendering, and the deep equality and hashing used by dict keys.
pub mod core;

/// Callable objects.
///
/// Native primitives and special forms, the `Arity` constraint they are
/// checked against, and user-defined functions.
pub mod callable;

/// User-defined classes and their instances.
pub mod class;
