use crate::interpreter::lexer::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// None of them aborts the program: the failing node produces no value and
/// the error is recorded by the evaluator.
pub enum RuntimeError {
    /// Tried to use a name with no binding in the current environment.
    UnknownIdentifier {
        /// The name that was looked up.
        name:     String,
        /// The source position of the reference.
        position: Position,
    },
    /// An operand produced no value.
    MissingValue {
        /// The source position of the operand.
        position: Position,
    },
    /// The operands of an infix operator have different kinds.
    MismatchedOperands {
        /// The operator, as written in source.
        operator: String,
        /// Kind of the left operand.
        left:     &'static str,
        /// Kind of the right operand.
        right:    &'static str,
        /// The source position of the operator.
        position: Position,
    },
    /// An operator is not defined for the kind of its operands.
    UnsupportedOperation {
        /// The operator, as written in source.
        operator: String,
        /// Kind of the operands.
        kind:     &'static str,
        /// The source position of the operator.
        position: Position,
    },
    /// A boolean value was expected, but not found.
    ExpectedBoolean {
        /// The source position where the boolean was required.
        position: Position,
    },
    /// An integer value was expected, but not found.
    ExpectedInteger {
        /// The source position where the integer was required.
        position: Position,
    },
    /// Called a name bound to something that is not a function.
    NotAFunction {
        /// The called name.
        name:     String,
        /// The source position of the call.
        position: Position,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The called name.
        name:     String,
        /// Number of parameters of the function.
        expected: usize,
        /// Number of arguments in the call.
        found:    usize,
        /// The source position of the call.
        position: Position,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source position of the operator.
        position: Position,
    },
    /// Calls were nested too deeply.
    CallDepthExceeded {
        /// The maximum nesting allowed.
        limit:    usize,
        /// The source position of the call that went over the limit.
        position: Position,
    },
}

impl RuntimeError {
    /// Returns where the error happened.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnknownIdentifier { position, .. }
            | Self::MissingValue { position }
            | Self::MismatchedOperands { position, .. }
            | Self::UnsupportedOperation { position, .. }
            | Self::ExpectedBoolean { position }
            | Self::ExpectedInteger { position }
            | Self::NotAFunction { position, .. }
            | Self::ArgumentCountMismatch { position, .. }
            | Self::DivisionByZero { position }
            | Self::CallDepthExceeded { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error on {}: ", self.position())?;
        match self {
            Self::UnknownIdentifier { name, .. } => write!(f, "Unknown identifier '{name}'."),
            Self::MissingValue { .. } => write!(f, "Value missing."),
            Self::MismatchedOperands { operator,
                                       left,
                                       right,
                                       .. } => write!(f,
                                                      "Operator '{operator}' cannot combine {left} and {right}."),
            Self::UnsupportedOperation { operator, kind, .. } => {
                write!(f, "Operator '{operator}' is not defined for {kind}.")
            },
            Self::ExpectedBoolean { .. } => write!(f, "Expected boolean."),
            Self::ExpectedInteger { .. } => write!(f, "Expected integer."),
            Self::NotAFunction { name, .. } => write!(f, "'{name}' is not a function."),
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          .. } => write!(f,
                                                         "Function '{name}' takes {expected} argument(s) but {found} were given."),
            Self::DivisionByZero { .. } => write!(f, "Division by zero."),
            Self::CallDepthExceeded { limit, .. } => {
                write!(f, "Calls nested deeper than {limit} levels.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
