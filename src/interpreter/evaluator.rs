/// Core evaluation logic.
///
/// Contains the evaluation loop, call dispatch for primitives, special forms
/// and user-defined functions, and the entry point for whole programs.
pub mod core;

/// Primitive functions and the standard environment.
///
/// Handles the table of native functions and special forms, argument
/// checking, and the implementations of the primitives.
pub mod function;

/// The `if` special form.
pub mod conditional;

/// The `let` and `do` special forms.
///
/// Both run their body in a fresh child frame.
pub mod block;

/// The `for` special form.
///
/// Iterates over the Cartesian product of its sources with a
/// [`Generator`](crate::interpreter::generator::Generator).
pub mod for_loop;

/// The `fn`, `def`, `set` and `class` special forms.
pub mod definition;

/// Utility functions for evaluation.
///
/// Provides helpers and reusable routines shared by the evaluation loop, the
/// primitives and the special forms.
pub mod utils;

pub use self::{
    core::{eval, eval_program},
    function::core::standard_environment,
};
