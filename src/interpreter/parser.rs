/// Core parsing logic.
///
/// Contains the recursive descent over the three bracket families and the
/// quote reader markers, and the public `parse` entry point.
pub mod core;

/// Utility functions for the parser.
///
/// Converts literal tokens into literal values and builds call and dict
/// nodes once their closing bracket is reached.
pub mod utils;
