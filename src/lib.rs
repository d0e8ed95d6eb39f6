//! # castellano
//!
//! castellano is an interpreter for a small imperative language written with
//! Spanish keywords (`si`, `sino`, `mientras`, `función`, ...).
//! It lexes and parses source text into a syntax tree and evaluates the tree
//! to the value of its last form.
//!
//! ```text
//! a := 0. b := verdadero
//! mientras b {a := a + 1. b := falso}
//! a
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{evaluator::Evaluator, lexer::Lexer, parser::Parser},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and the `Program`, `Block` and
/// `FunctionLiteral` types that represent source code as a tree. The tree is
/// built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines a variant for every language construct.
/// - Attaches source positions to nodes for diagnostics.
/// - Renders trees back as fully parenthesized source text.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for every failure of the parser and the evaluator.
/// - Attaches line and column to every error.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the language pipeline.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Provides the entry points for parsing and evaluating user code.
pub mod interpreter;
/// Interactive sessions.
///
/// Accumulates the lines typed so far and re-evaluates them as a whole after
/// every new line.
pub mod repl;
/// General integer helpers shared by the parser and the evaluator.
pub mod util;

/// The outcome of interpreting a source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// The rendered value of the last form, if it produced one.
    pub output:         Option<String>,
    /// The error that stopped parsing, if any. The forms before it were still
    /// evaluated.
    pub parse_error:    Option<ParseError>,
    /// Errors recorded during evaluation, in the order they happened.
    pub runtime_errors: Vec<RuntimeError>,
}

impl Report {
    /// Whether the source parsed and evaluated without any error.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.parse_error.is_none() && self.runtime_errors.is_empty()
    }
}

/// Interprets a complete source text.
///
/// The source is parsed as far as possible and the parsed forms are evaluated
/// in a fresh environment.
///
/// # Examples
/// ```
/// use castellano::interpret;
///
/// let report = interpret("8/4+7*2.");
/// assert_eq!(report.output.as_deref(), Some("16"));
/// assert!(report.is_clean());
///
/// // 'x' is not bound: no value, and a diagnostic explains why.
/// let report = interpret("x + 1");
/// assert_eq!(report.output, None);
/// assert_eq!(report.runtime_errors.len(), 1);
/// ```
#[must_use]
pub fn interpret(source: &str) -> Report {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    let mut evaluator = Evaluator::new();
    let output = evaluator.evaluate_program(&program).map(|value| value.to_string());

    Report { output,
             parse_error: parser.take_error(),
             runtime_errors: evaluator.take_diagnostics() }
}

/// Returns the rendered value of the last form of `source`, if any.
///
/// # Examples
/// ```
/// use castellano::evaluate_to_string;
///
/// assert_eq!(evaluate_to_string("verdadero").as_deref(), Some("verdadero"));
/// assert_eq!(evaluate_to_string("a := función() 5. a").as_deref(),
///            Some("Objeto de tipo función"));
/// assert_eq!(evaluate_to_string(""), None);
/// ```
#[must_use]
pub fn evaluate_to_string(source: &str) -> Option<String> {
    interpret(source).output
}
