use tracing::debug;

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::lexer::{Lexer, Token, TokenKind},
    util::stack::guarded,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of expressions and blocks before parsing gives up.
pub const MAX_NESTING_DEPTH: usize = 1024;

/// Builds syntax trees from the tokens of a [`Lexer`].
///
/// The parser looks at three tokens at a time (`current`, `peek` and
/// `peek_peek`), which is enough to recognize assignments (`name :=`) and the
/// `si no entonces` idiom without backtracking.
///
/// # Example
/// ```
/// use castellano::interpreter::{lexer::Lexer, parser::Parser};
///
/// let mut parser = Parser::new(Lexer::new("a := 1 + 2. a"));
/// let program = parser.parse_program();
///
/// assert_eq!(program.forms.len(), 2);
/// assert!(parser.error().is_none());
/// ```
pub struct Parser<'src> {
    lexer:                Lexer<'src>,
    pub(crate) current:   Token<'src>,
    pub(crate) peek:      Token<'src>,
    pub(crate) peek_peek: Token<'src>,
    error:                Option<ParseError>,
    depth:                usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser and fills its token window from `lexer`.
    #[must_use]
    pub fn new(mut lexer: Lexer<'src>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        let peek_peek = lexer.next_token();
        Self { lexer,
               current,
               peek,
               peek_peek,
               error: None,
               depth: 0 }
    }

    /// Parses every form up to the end of input.
    ///
    /// Parsing stops at the first form that fails; the forms before it are
    /// returned and the failure is available through [`Parser::error`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        loop {
            self.skip_points();
            if self.current.kind == TokenKind::Eof {
                break;
            }

            match self.parse_form() {
                Ok(form) => program.forms.push(form),
                Err(error) => {
                    debug!(%error, parsed = program.forms.len(), "parsing stopped");
                    self.error = Some(error);
                    break;
                },
            }
        }

        program
    }

    /// Returns the error that stopped [`Parser::parse_program`], if any.
    #[must_use]
    pub const fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// Takes ownership of the error that stopped parsing, if any.
    pub fn take_error(&mut self) -> Option<ParseError> {
        self.error.take()
    }

    /// Shifts the token window one token forward.
    pub(crate) fn advance(&mut self) {
        self.current = self.peek;
        self.peek = self.peek_peek;
        self.peek_peek = self.lexer.next_token();
    }

    /// Advances past the current token if it has the given kind.
    ///
    /// Returns whether the token was consumed.
    pub(crate) fn accept(&mut self, kind: TokenKind) -> bool {
        if self.current.kind == kind {
            self.advance();
            return true;
        }
        false
    }

    /// Consumes a required token.
    ///
    /// # Errors
    /// `ExpectedToken` when the current token has another kind.
    pub(crate) fn expect(&mut self, kind: TokenKind, expected: &'static str) -> ParseResult<()> {
        if self.accept(kind) {
            return Ok(());
        }
        Err(ParseError::ExpectedToken { expected,
                                        found: self.current.literal.to_string(),
                                        position: self.current.position() })
    }

    /// Runs a routine that may recurse into nested expressions or blocks.
    ///
    /// # Errors
    /// `NestingTooDeep` past [`MAX_NESTING_DEPTH`] levels, or the error of
    /// `parse`.
    pub(crate) fn nested<T>(&mut self,
                            parse: impl FnOnce(&mut Self) -> ParseResult<T>)
                            -> ParseResult<T> {
        guarded(|| {
            if self.depth >= MAX_NESTING_DEPTH {
                return Err(ParseError::NestingTooDeep { limit:    MAX_NESTING_DEPTH,
                                                        position: self.current.position(), });
            }
            self.depth += 1;
            let result = parse(self);
            self.depth -= 1;
            result
        })
    }

    /// Skips stray points between forms.
    pub(crate) fn skip_points(&mut self) {
        while self.accept(TokenKind::Point) {}
    }
}
