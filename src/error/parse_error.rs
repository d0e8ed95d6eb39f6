use crate::interpreter::lexer::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
///
/// A parse error stops the parser: the forms parsed before it are kept and
/// everything after it is dropped.
pub enum ParseError {
    /// Found a token that cannot start or continue the current form.
    UnexpectedToken {
        /// The literal text of the token.
        token:    String,
        /// Where the token was found.
        position: Position,
    },
    /// Reached the end of input in the middle of a form.
    UnexpectedEndOfInput {
        /// Where the input ended.
        position: Position,
    },
    /// A specific token was required but another one was found.
    ExpectedToken {
        /// The required token, as written in source.
        expected: &'static str,
        /// The literal text of the token actually found.
        found:    String,
        /// Where the token was found.
        position: Position,
    },
    /// A prefix operator was immediately repeated, as in `- -1` or `no no a`.
    RepeatedPrefix {
        /// The repeated operator.
        operator: String,
        /// Where the second operator was found.
        position: Position,
    },
    /// A function parameter was not a plain identifier.
    InvalidParameter {
        /// Where the parameter starts.
        position: Position,
    },
    /// Something other than an identifier was called.
    InvalidCallee {
        /// Where the call parenthesis was found.
        position: Position,
    },
    /// An integer literal does not fit in 64 bits.
    LiteralTooLarge {
        /// The literal text.
        literal:  String,
        /// Where the literal was found.
        position: Position,
    },
    /// Expressions or blocks were nested too deeply.
    NestingTooDeep {
        /// The maximum nesting allowed.
        limit:    usize,
        /// Where the level over the limit starts.
        position: Position,
    },
    /// A character outside the language.
    IllegalCharacter {
        /// The unrecognized text.
        literal:  String,
        /// Where it was found.
        position: Position,
    },
}

impl ParseError {
    /// Returns where the error was detected.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedToken { position, .. }
            | Self::RepeatedPrefix { position, .. }
            | Self::InvalidParameter { position }
            | Self::InvalidCallee { position }
            | Self::LiteralTooLarge { position, .. }
            | Self::NestingTooDeep { position, .. }
            | Self::IllegalCharacter { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error on {}: ", self.position())?;
        match self {
            Self::UnexpectedToken { token, .. } => write!(f, "Unexpected token '{token}'."),
            Self::UnexpectedEndOfInput { .. } => write!(f, "Unexpected end of input."),
            Self::ExpectedToken { expected, found, .. } => {
                if found.is_empty() {
                    write!(f, "Expected '{expected}' but the input ended.")
                } else {
                    write!(f, "Expected '{expected}' but found '{found}'.")
                }
            },
            Self::RepeatedPrefix { operator, .. } => {
                write!(f, "The prefix operator '{operator}' cannot be repeated.")
            },
            Self::InvalidParameter { .. } => {
                write!(f, "Function parameters must be identifiers. Example: función(a. b) a + b")
            },
            Self::InvalidCallee { .. } => write!(f, "Only names can be called. Example: f(1. 2)"),
            Self::LiteralTooLarge { literal, .. } => {
                write!(f, "Literal {literal} is too large.")
            },
            Self::NestingTooDeep { limit, .. } => {
                write!(f, "Nesting is too deep (maximum {limit} levels).")
            },
            Self::IllegalCharacter { literal, .. } => {
                write!(f, "Illegal character '{literal}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
