/// The evaluator module executes syntax trees and computes results.
///
/// The evaluator walks the tree produced by the parser, keeps the
/// environment of bindings and produces the value of the last form.
///
/// # Responsibilities
/// - Evaluates every node kind: assignments, operators, conditionals, loops,
///   function literals and calls.
/// - Gives every call a fresh environment holding only its parameters.
/// - Records runtime errors as diagnostics instead of aborting.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens for numbers,
/// identifiers, keywords and punctuation, each with its line and column.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, literal and
///   source location.
/// - Distinguishes the Spanish keywords from identifiers.
/// - Turns unrecognized characters into `ILLEGAL` tokens.
pub mod lexer;
/// The parser module builds syntax trees from tokens.
///
/// The parser keeps a three-token window over the lexer, parses expressions
/// by precedence climbing and uses dedicated routines for assignments,
/// conditionals, loops, blocks and function literals.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Node`] trees.
/// - Stops at the first syntax error, keeping the forms parsed before it.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: integers, booleans and functions.
/// - Renders values as text.
/// - Defines the environment that binds names to values.
pub mod value;
