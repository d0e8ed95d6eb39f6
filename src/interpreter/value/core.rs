use std::fmt;

use crate::{ast::FunctionLiteral, error::RuntimeError, interpreter::lexer::Position};

/// Represents a runtime value in the interpreter.
///
/// Function values borrow the [`FunctionLiteral`] node they were created
/// from, so values never outlive the program tree they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'ast> {
    /// A signed 64-bit integer.
    Integer(i64),
    /// A truth value. Produced by `verdadero`, `falso`, `=` and `no`, and
    /// required by the conditions of `si` and `mientras`.
    Boolean(bool),
    /// A function literal that can be called by the name it is bound to.
    Function(&'ast FunctionLiteral),
}

impl<'ast> Value<'ast> {
    /// Names the kind of the value, for diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Boolean(_) => "boolean",
            Self::Function(_) => "function",
        }
    }

    /// Returns the integer, or an error if the value is not an integer.
    ///
    /// # Example
    /// ```
    /// use castellano::interpreter::{lexer::Position, value::core::Value};
    ///
    /// assert_eq!(Value::Integer(10).as_integer(Position::default()), Ok(10));
    /// assert!(Value::Boolean(true).as_integer(Position::default()).is_err());
    /// ```
    pub const fn as_integer(&self, position: Position) -> Result<i64, RuntimeError> {
        match self {
            Self::Integer(n) => Ok(*n),
            _ => Err(RuntimeError::ExpectedInteger { position }),
        }
    }

    /// Returns the truth value, or an error if the value is not a boolean.
    ///
    /// Used for the conditions of `si` and `mientras` and for `no`.
    pub const fn as_boolean(&self, position: Position) -> Result<bool, RuntimeError> {
        match self {
            Self::Boolean(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { position }),
        }
    }

    /// Returns the function literal, if the value is a function.
    #[must_use]
    pub const fn as_function(&self) -> Option<&'ast FunctionLiteral> {
        match self {
            Self::Function(function) => Some(*function),
            _ => None,
        }
    }
}

/// Integers render in decimal, booleans as `verdadero`/`falso` and functions
/// as `Objeto de tipo función`.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(true) => write!(f, "verdadero"),
            Self::Boolean(false) => write!(f, "falso"),
            Self::Function(_) => write!(f, "Objeto de tipo función"),
        }
    }
}
