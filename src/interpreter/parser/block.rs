use crate::{
    ast::Block,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a block.
    ///
    /// A block is either a braced sequence of forms or a single bare form:
    ///
    /// ```text
    ///     block := "{" form* "}"
    ///            | form
    /// ```
    ///
    /// Inside braces, forms are parsed until `}` or the end of input; stray
    /// points before a form or before the closing brace are skipped.
    ///
    /// # Errors
    /// - `ExpectedToken` when the closing `}` is missing.
    /// - `NestingTooDeep` when blocks nest past
    ///   [`super::core::MAX_NESTING_DEPTH`] levels.
    /// - Propagates any error from parsing the inner forms.
    pub(crate) fn parse_block(&mut self) -> ParseResult<Block> {
        self.nested(|parser| {
                if !parser.accept(TokenKind::LBrace) {
                    let form = parser.parse_form()?;
                    return Ok(Block { forms: vec![form] });
                }

                let mut forms = Vec::new();
                loop {
                    parser.skip_points();
                    if matches!(parser.current.kind, TokenKind::RBrace | TokenKind::Eof) {
                        break;
                    }
                    forms.push(parser.parse_form()?);
                }

                parser.expect(TokenKind::RBrace, "}")?;
                Ok(Block { forms })
            })
    }
}
