/// Parsing errors.
///
/// Defines all error types that can stop the parser: unexpected tokens,
/// missing closers, malformed parameter lists, oversized literals and illegal
/// characters.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the diagnostics recorded while evaluating: unknown identifiers,
/// operands of the wrong kind, bad calls and division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
