/// The environment binding names to values.
///
/// Each program evaluation owns a top-level environment and every function
/// call gets a fresh one holding only its parameters.
pub mod environment;

/// Runtime values and their conversions.
pub mod core;
