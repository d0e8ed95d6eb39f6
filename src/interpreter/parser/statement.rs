use crate::{
    ast::Node,
    interpreter::{
        lexer::TokenKind,
        parser::{
            binary::Precedence,
            core::{ParseResult, Parser},
        },
    },
};

impl Parser<'_> {
    /// Parses a single form.
    ///
    /// A form may be one of:
    /// - an assignment (`name := expression`),
    /// - a conditional (`si ...`),
    /// - a loop (`mientras ...`),
    /// - an expression.
    ///
    /// The first two tokens decide which one is parsed.
    ///
    /// # Errors
    /// Propagates the error of the chosen routine.
    pub fn parse_form(&mut self) -> ParseResult<Node> {
        match (self.current.kind, self.peek.kind) {
            (TokenKind::Ident, TokenKind::Assign) => self.parse_assignment(),
            (TokenKind::If, _) => self.parse_if(),
            (TokenKind::While, _) => self.parse_while(),
            _ => self.parse_expression(Precedence::Lowest),
        }
    }

    /// Parses `name := expression`.
    fn parse_assignment(&mut self) -> ParseResult<Node> {
        let name = self.current;
        self.advance(); // name
        self.advance(); // :=

        let value = self.parse_expression(Precedence::Lowest)?;

        Ok(Node::Assignment { name:     name.literal.to_string(),
                              value:    Box::new(value),
                              position: name.position(), })
    }

    /// Parses a conditional with an optional alternative.
    ///
    /// Syntax:
    /// ```text
    ///     si <condition> <block>
    ///     si <condition> <block> sino <block>
    ///     si <condition> <block> si no entonces <block>
    /// ```
    /// `si no entonces` reads "if not, then" and is equivalent to `sino`.
    fn parse_if(&mut self) -> ParseResult<Node> {
        let position = self.current.position();
        self.advance();

        let condition = self.parse_expression(Precedence::Lowest)?;
        let consequence = self.parse_block()?;

        let alternative = if self.accept(TokenKind::Else) {
            Some(self.parse_block()?)
        } else if self.current.kind == TokenKind::If
                  && self.peek.kind == TokenKind::Not
                  && self.peek_peek.kind == TokenKind::Then
        {
            self.advance();
            self.advance();
            self.advance();
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Node::If { condition: Box::new(condition),
                      consequence,
                      alternative,
                      position })
    }

    /// Parses `mientras <condition> <block>`.
    fn parse_while(&mut self) -> ParseResult<Node> {
        let position = self.current.position();
        self.advance();

        let condition = self.parse_expression(Precedence::Lowest)?;
        let body = self.parse_block()?;

        Ok(Node::While { condition: Box::new(condition),
                         body,
                         position })
    }
}
