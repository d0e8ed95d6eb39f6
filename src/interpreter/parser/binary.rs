use crate::{
    ast::{InfixOperator, Node},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

/// Binding strength of infix operators, from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Starting level of every full expression.
    Lowest,
    /// `=`
    Equality,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// `(` after a name.
    Call,
}

impl Precedence {
    /// Returns the precedence of a token used as an infix operator, or `None`
    /// when the token cannot continue an expression.
    ///
    /// ```
    /// use castellano::interpreter::{lexer::TokenKind, parser::binary::Precedence};
    ///
    /// assert_eq!(Precedence::of(TokenKind::Plus), Some(Precedence::Sum));
    /// assert!(Precedence::of(TokenKind::Division) > Precedence::of(TokenKind::Equals));
    /// assert_eq!(Precedence::of(TokenKind::Point), None);
    /// ```
    #[must_use]
    pub const fn of(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Equals => Some(Self::Equality),
            TokenKind::Plus | TokenKind::Minus => Some(Self::Sum),
            TokenKind::Multiplication | TokenKind::Division => Some(Self::Product),
            TokenKind::LParen => Some(Self::Call),
            _ => None,
        }
    }
}

impl Parser<'_> {
    /// Parses an expression whose operators bind tighter than `precedence`.
    ///
    /// A prefix expression is parsed first and then extended while the current
    /// token is an infix operator stronger than `precedence`. Operators of
    /// equal strength are left to the caller, which makes them
    /// left-associative: `8 - 4 - 2` is `((8 - 4) - 2)`.
    ///
    /// A single trailing `.` is consumed afterwards.
    ///
    /// # Example
    /// ```
    /// use castellano::interpreter::{
    ///     lexer::Lexer,
    ///     parser::{Parser, binary::Precedence},
    /// };
    ///
    /// let mut parser = Parser::new(Lexer::new("1 + 2 * 3 = 7"));
    /// let expr = parser.parse_expression(Precedence::Lowest).unwrap();
    ///
    /// assert_eq!(expr.to_string(), "((1 + (2 * 3)) = 7)");
    /// ```
    ///
    /// # Errors
    /// - `NestingTooDeep` when expressions nest past
    ///   [`super::core::MAX_NESTING_DEPTH`] levels.
    /// - Propagates failures of the prefix and infix routines.
    pub fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Node> {
        self.nested(|parser| {
                let mut node = parser.parse_prefix()?;

                while let Some(next) = Precedence::of(parser.current.kind)
                      && precedence < next
                {
                    node = if parser.current.kind == TokenKind::LParen {
                        parser.parse_call(node)?
                    } else {
                        parser.parse_infix(node)?
                    };
                }

                parser.accept(TokenKind::Point);
                Ok(node)
            })
    }

    /// Parses the operator and right operand of a binary operation.
    fn parse_infix(&mut self, left: Node) -> ParseResult<Node> {
        let token = self.current;
        let (Some(op), Some(precedence)) =
            (InfixOperator::from_token(token.kind), Precedence::of(token.kind))
        else {
            return Err(ParseError::UnexpectedToken { token:    token.literal.to_string(),
                                                     position: token.position(), });
        };
        self.advance();

        let right = self.parse_expression(precedence)?;

        Ok(Node::Infix { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         position: token.position() })
    }

    /// Parses the argument list of a call. Only names can be called.
    fn parse_call(&mut self, callee: Node) -> ParseResult<Node> {
        let Node::Identifier { ref name, position } = callee else {
            return Err(ParseError::InvalidCallee { position: self.current.position() });
        };

        let arguments = self.parse_parenthesized(Ok)?;

        Ok(Node::FunctionCall { callee: name.clone(),
                                arguments,
                                position })
    }
}
