use std::fmt;

use logos::Logos;

/// The closed set of token kinds of the language.
///
/// Identifiers start with an ASCII letter, an underscore or a Latin-1 letter
/// (`á`, `ñ`, `Ü`, ...) and continue with any of those or digits. Keywords
/// are matched as identifiers first and then told apart through [`keyword`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t]+")]
pub enum TokenKind {
    /// End of input. Emitted forever once the source is exhausted.
    Eof,
    /// `y`
    And,
    /// `:=`
    #[token(":=")]
    Assign,
    /// `,` is reserved; no character currently produces it.
    Comma,
    /// `/`
    #[token("/")]
    Division,
    /// `hacer`
    Do,
    /// `función`
    Function,
    /// `sino`
    Else,
    /// `=`
    #[token("=")]
    Equals,
    /// `falso`
    False,
    /// `para`
    For,
    /// Identifier tokens such as `a`, `número27` or `_está_terminado`.
    #[regex(r"[A-Za-z_À-ÖØ-öø-ÿ][A-Za-z0-9_À-ÖØ-öø-ÿ]*",
            |lex| keyword(lex.slice()).unwrap_or(TokenKind::Ident))]
    Ident,
    /// `si`
    If,
    /// Any character outside the language, or a `:` not followed by `=`.
    Illegal,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Int,
    /// `{`
    #[token("{")]
    LBrace,
    /// `(`
    #[token("(")]
    LParen,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Multiplication,
    /// `no`
    Not,
    /// `o`
    Or,
    /// `.`
    #[token(".")]
    Point,
    /// `+`
    #[token("+")]
    Plus,
    /// `entonces`
    Then,
    /// `verdadero`
    True,
    /// `}`
    #[token("}")]
    RBrace,
    /// `)`
    #[token(")")]
    RParen,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `mientras`
    While,

    /// Line breaks. Never emitted, they only move the position forward.
    #[token("\n", |lex| {
        lex.extras.line      += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
}

/// Looks up a reserved word.
///
/// Returns the keyword kind for `literal`, or `None` when it is an ordinary
/// identifier.
///
/// # Example
/// ```
/// use castellano::interpreter::lexer::{TokenKind, keyword};
///
/// assert_eq!(keyword("mientras"), Some(TokenKind::While));
/// assert_eq!(keyword("función"), Some(TokenKind::Function));
/// assert_eq!(keyword("funcion"), None);
/// ```
#[must_use]
pub fn keyword(literal: &str) -> Option<TokenKind> {
    let kind = match literal {
        "verdadero" => TokenKind::True,
        "falso" => TokenKind::False,
        "si" => TokenKind::If,
        "sino" => TokenKind::Else,
        "entonces" => TokenKind::Then,
        "para" => TokenKind::For,
        "mientras" => TokenKind::While,
        "hacer" => TokenKind::Do,
        "y" => TokenKind::And,
        "o" => TokenKind::Or,
        "no" => TokenKind::Not,
        "función" => TokenKind::Function,
        _ => return None,
    };
    Some(kind)
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Eof => "EOF",
            Self::And => "AND",
            Self::Assign => "ASSIGN",
            Self::Comma => "COMMA",
            Self::Division => "DIVISION",
            Self::Do => "DO",
            Self::Function => "FUNCTION",
            Self::Else => "ELSE",
            Self::Equals => "EQUALS",
            Self::False => "FALSE",
            Self::For => "FOR",
            Self::Ident => "IDENT",
            Self::If => "IF",
            Self::Illegal => "ILLEGAL",
            Self::Int => "INT",
            Self::LBrace => "LBRACE",
            Self::LParen => "LPAREN",
            Self::Minus => "MINUS",
            Self::Multiplication => "MULTIPLICATION",
            Self::Not => "NOT",
            Self::Or => "OR",
            Self::Point => "POINT",
            Self::Plus => "PLUS",
            Self::Then => "THEN",
            Self::True => "TRUE",
            Self::RBrace => "RBRACE",
            Self::RParen => "RPAREN",
            Self::Semicolon => "SEMICOLON",
            Self::While => "WHILE",
            Self::NewLine => "NEWLINE",
        };
        write!(f, "{name}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and where it starts so every token can report a
/// line and column.
pub struct LexerExtras {
    /// The current line number, starting at 1.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// A location in the source text.
///
/// Lines start at 1; columns count characters from the start of the line,
/// starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// The source line.
    pub line:   usize,
    /// The character offset inside the line.
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A lexical token with its literal text and where it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// What kind of token this is.
    pub kind:    TokenKind,
    /// The exact source text of the token (empty for `EOF`).
    pub literal: &'src str,
    /// The source line where the token starts.
    pub line:    usize,
    /// The column where the token starts.
    pub column:  usize,
}

impl Token<'_> {
    /// Returns where the token starts.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position { line:   self.line,
                   column: self.column, }
    }
}

/// Produces tokens one at a time from a complete source string.
///
/// The lexer never fails: unknown characters become [`TokenKind::Illegal`]
/// tokens and, once the input is exhausted, every call to
/// [`Lexer::next_token`] yields [`TokenKind::Eof`].
pub struct Lexer<'src> {
    source:    &'src str,
    inner:     logos::Lexer<'src, TokenKind>,
    exhausted: bool,
    /// Byte offset and column of the last position measured.
    last:      (usize, usize),
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               inner: TokenKind::lexer_with_extras(source, LexerExtras::default()),
               exhausted: false,
               last: (0, 0) }
    }

    /// Returns the next token of the input.
    ///
    /// # Example
    /// ```
    /// use castellano::interpreter::lexer::{Lexer, TokenKind};
    ///
    /// let mut lexer = Lexer::new("a := 5");
    /// assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    /// assert_eq!(lexer.next_token().kind, TokenKind::Assign);
    /// assert_eq!(lexer.next_token().literal, "5");
    /// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    /// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    /// ```
    pub fn next_token(&mut self) -> Token<'src> {
        if self.exhausted {
            return self.eof();
        }

        match self.inner.next() {
            Some(Ok(kind)) => self.current(kind),
            Some(Err(())) => self.current(TokenKind::Illegal),
            None => {
                self.exhausted = true;
                self.eof()
            },
        }
    }

    fn current(&mut self, kind: TokenKind) -> Token<'src> {
        Token { kind,
                literal: self.inner.slice(),
                line: self.inner.extras.line,
                column: self.column_at(self.inner.span().start) }
    }

    fn eof(&mut self) -> Token<'src> {
        Token { kind:    TokenKind::Eof,
                literal: "",
                line:    self.inner.extras.line,
                column:  self.column_at(self.source.len()), }
    }

    /// Counts the characters between the start of the current line and
    /// `offset`.
    ///
    /// Offsets only move forward, so counting resumes from the last measured
    /// position when it lies on the same line.
    fn column_at(&mut self, offset: usize) -> usize {
        let line_start = self.inner.extras.line_start;
        let (from, column) = match self.last {
            (last, column) if line_start <= last && last <= offset => (last, column),
            _ => (line_start, 0),
        };

        let column = column
                     + self.source
                           .get(from..offset)
                           .map_or(0, |text| text.chars().count());
        self.last = (offset, column);
        column
    }
}

/// Iterates over the tokens before `EOF`.
impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (token.kind != TokenKind::Eof).then_some(token)
    }
}

/// Returns the kinds of every token in `source`, ending with a single `EOF`.
///
/// # Example
/// ```
/// use castellano::interpreter::lexer::{TokenKind, tokenize};
///
/// assert_eq!(tokenize("si no"),
///            vec![TokenKind::If, TokenKind::Not, TokenKind::Eof]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(source);
    let mut kinds = Vec::new();
    loop {
        let kind = lexer.next_token().kind;
        kinds.push(kind);
        if kind == TokenKind::Eof {
            return kinds;
        }
    }
}
