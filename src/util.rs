/// Integer helpers.
///
/// This module turns integer literals into values and performs the integer
/// operations whose edge cases (overflow, division by zero) need care, so
/// the parser and evaluator share one definition of them.
pub mod num;
/// Stack growth for recursive tree walks.
///
/// Parsing, evaluating and rendering recurse once per nesting level of the
/// tree. These helpers move the recursion onto heap-allocated stack segments
/// when the native stack runs low.
pub mod stack;
