use crate::{
    ast::{FunctionLiteral, Node},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            binary::Precedence,
            core::{ParseResult, Parser},
        },
    },
    util::num::parse_integer_literal,
};

impl Parser<'_> {
    /// Parses the expression that starts at the current token.
    ///
    /// Prefix dispatch:
    /// - integer and boolean literals, identifiers
    /// - `( expression )`
    /// - `- expression` and `no expression`
    /// - `función(params) body`
    ///
    /// Points in prefix position are skipped, so stray terminators before an
    /// expression are tolerated (`1 + . 2`).
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` at the end of input.
    /// - `IllegalCharacter` for `ILLEGAL` tokens.
    /// - `UnexpectedToken` for every other token that cannot start an
    ///   expression.
    pub(crate) fn parse_prefix(&mut self) -> ParseResult<Node> {
        self.skip_points();
        let token = self.current;

        match token.kind {
            TokenKind::Int => {
                let value = parse_integer_literal(token.literal).ok_or_else(|| {
                                ParseError::LiteralTooLarge { literal:  token.literal.to_string(),
                                                              position: token.position(), }
                            })?;
                self.advance();
                Ok(Node::Integer { value,
                                   position: token.position() })
            },
            TokenKind::Ident => {
                self.advance();
                Ok(Node::Identifier { name:     token.literal.to_string(),
                                      position: token.position(), })
            },
            TokenKind::True | TokenKind::False => {
                self.advance();
                Ok(Node::Boolean { value:    token.kind == TokenKind::True,
                                   position: token.position(), })
            },
            TokenKind::LParen => self.parse_grouping(),
            TokenKind::Minus => self.parse_minus(),
            TokenKind::Not => self.parse_not(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::Eof => {
                Err(ParseError::UnexpectedEndOfInput { position: token.position() })
            },
            TokenKind::Illegal => {
                Err(ParseError::IllegalCharacter { literal:  token.literal.to_string(),
                                                   position: token.position(), })
            },
            _ => Err(ParseError::UnexpectedToken { token:    token.literal.to_string(),
                                                   position: token.position(), }),
        }
    }

    /// Parses `( expression )`.
    fn parse_grouping(&mut self) -> ParseResult<Node> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect(TokenKind::RParen, ")")?;
        Ok(expr)
    }

    /// Parses unary minus. Its operand extends as far as a full expression,
    /// so `-1 + 2` negates `1 + 2`.
    fn parse_minus(&mut self) -> ParseResult<Node> {
        let position = self.current.position();
        self.advance();

        if self.current.kind == TokenKind::Minus {
            return Err(ParseError::RepeatedPrefix { operator: "-".to_string(),
                                                    position: self.current.position(), });
        }

        let operand = self.parse_expression(Precedence::Lowest)?;
        Ok(Node::Minus { operand: Box::new(operand),
                         position })
    }

    /// Parses `no`. Its operand binds tighter than any infix operator, so
    /// `no a = b` is `((no a) = b)`.
    fn parse_not(&mut self) -> ParseResult<Node> {
        let position = self.current.position();
        self.advance();

        if self.current.kind == TokenKind::Not {
            return Err(ParseError::RepeatedPrefix { operator: self.current.literal.to_string(),
                                                    position: self.current.position(), });
        }

        let operand = self.parse_expression(Precedence::Call)?;
        Ok(Node::Not { operand: Box::new(operand),
                       position })
    }

    /// Parses `función(a. b) body`.
    ///
    /// Every parameter must be a plain identifier. The body is a block.
    fn parse_function_literal(&mut self) -> ParseResult<Node> {
        let position = self.current.position();
        self.advance();

        let parameters = self.parse_parenthesized(|param| match param {
                                 Node::Identifier { ref name, .. } => Ok(name.clone()),
                                 other => {
                                     Err(ParseError::InvalidParameter { position: other.position() })
                                 },
                             })?;
        let body = self.parse_block()?;

        Ok(Node::Function(FunctionLiteral { parameters,
                                            body,
                                            position }))
    }
}
