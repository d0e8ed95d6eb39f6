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
    /// Parses a parenthesized list of expressions.
    ///
    /// The current token must be the opening `(`. Expressions are parsed until
    /// `)` or the end of input; no separator is required between them, the
    /// point consumed after each expression acts as one (`f(1. 2 + x)`).
    /// Each parsed expression goes through `convert`, which may reject it.
    ///
    /// # Errors
    /// - `ExpectedToken` when the list is not opened with `(` or not closed
    ///   with `)`.
    /// - Any error returned by `convert` or by expression parsing.
    pub(crate) fn parse_parenthesized<T>(&mut self,
                                         mut convert: impl FnMut(Node) -> ParseResult<T>)
                                         -> ParseResult<Vec<T>> {
        self.expect(TokenKind::LParen, "(")?;

        let mut items = Vec::new();
        while !matches!(self.current.kind, TokenKind::RParen | TokenKind::Eof) {
            let expr = self.parse_expression(Precedence::Lowest)?;
            items.push(convert(expr)?);
        }

        self.expect(TokenKind::RParen, ")")?;
        Ok(items)
    }
}
