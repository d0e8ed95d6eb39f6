/// Infix operator evaluation.
///
/// Implements equality and integer arithmetic, including the kind checks on
/// both operands.
pub mod binary;

/// Conditional evaluation.
///
/// Evaluates `si` nodes and the boolean conditions shared with loops.
pub mod conditional;

/// Core evaluation logic.
///
/// Contains the [`core::Evaluator`], node dispatch, block evaluation and the
/// recording of diagnostics.
pub mod core;

/// Function call evaluation.
///
/// Resolves the callee, checks arity, binds arguments in a fresh environment
/// and runs the body.
pub mod function;

/// Unary operator evaluation.
///
/// Handles arithmetic negation and `no`.
pub mod unary;

/// Evaluation of `mientras` loops.
pub mod while_loop;

pub use self::core::Evaluator;
