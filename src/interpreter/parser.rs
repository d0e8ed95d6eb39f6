/// Infix operator parsing.
///
/// Implements precedence climbing for `=`, `+`, `-`, `*`, `/` and calls, and
/// defines the precedence ladder.
pub mod binary;

/// Block parsing.
///
/// Parses braced sequences of forms and single bare forms.
pub mod block;

/// Parser state and program parsing.
///
/// Contains the [`core::Parser`] with its three-token window, the result type
/// shared by all parsing routines and the top-level loop over forms.
pub mod core;

/// Statement-like forms.
///
/// Dispatches each form to assignment, conditional, loop or expression
/// parsing.
pub mod statement;

/// Prefix expressions.
///
/// Literals, identifiers, grouping, unary minus, `no` and function literals.
pub mod unary;

/// Helpers shared by the parsing routines.
///
/// Parses parenthesized parameter and argument lists.
pub mod utils;

pub use self::core::Parser;
