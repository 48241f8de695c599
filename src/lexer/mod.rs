//! The lexer turns the source string into a flat list of [Token]s. The main function here is the
//! [tokenize] function, it reads the input once from left to right and decides what to read by
//! looking at the first character of every token.

use std::fmt::{self, Display};

use tracing::{debug, trace};

use crate::error::LexError;
use crate::location::{Loc, Span};

use self::tracker::Tracker;

mod tracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Paren,
    Name,
    Number,
    StringLit,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Paren => write!(f, "paren"),
            TokenKind::Name => write!(f, "name"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::StringLit => write!(f, "string"),
        }
    }
}

/// The smallest piece of the source code. The text of a string literal doesn't contain the
/// quotes, and the text of a paren is the paren itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn is_open(&self) -> bool {
        self.kind == TokenKind::Paren && self.text == "("
    }

    pub fn is_close(&self) -> bool {
        self.kind == TokenKind::Paren && self.text == ")"
    }
}

/// Prints the token as it was written, so lexemes can be read again.
impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::StringLit => write!(f, "\"{}\"", self.text),
            _ => write!(f, "{}", self.text),
        }
    }
}

pub struct Lexer<'a> {
    tracker: Tracker<'a>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(code: &'a str) -> Self {
        Self {
            tracker: Tracker::new(code),
            tokens: vec![],
        }
    }

    fn push(&mut self, kind: TokenKind) {
        let span = self.tracker.saved_span();
        let token = Token::new(kind, self.tracker.substring(span), span);
        trace!(kind = %token.kind, text = %token.text, start = span.start.0, "token");
        self.tokens.push(token);
    }

    fn lex_paren(&mut self) {
        self.tracker.save();
        self.tracker.jump();
        self.push(TokenKind::Paren);
    }

    fn lex_number(&mut self) {
        self.tracker.save();
        self.tracker.skip_while(|c| c.is_ascii_digit());
        self.push(TokenKind::Number);
    }

    fn lex_name(&mut self) {
        self.tracker.save();
        self.tracker.skip_while(|c| c.is_ascii_alphabetic());
        self.push(TokenKind::Name);
    }

    fn lex_string(&mut self) -> Result<(), LexError> {
        let start = self.tracker.current();
        self.tracker.jump();

        self.tracker.save();
        self.tracker.skip_while(|c| c != '"');
        let span = self.tracker.saved_span();

        if self.tracker.next() != Some('"') {
            return Err(LexError::UnterminatedString {
                char: '"',
                offset: start.0,
                span: Span::new(start, self.tracker.current()).into(),
            });
        }

        let text = self.tracker.substring(span);
        trace!(text, start = start.0, "string token");
        self.tokens.push(Token::new(
            TokenKind::StringLit,
            text,
            Span::new(start, self.tracker.current()),
        ));

        Ok(())
    }

    fn unrecognized(&self, c: char) -> LexError {
        let start = self.tracker.current();
        let end = Loc(start.0 + c.len_utf8());
        LexError::UnrecognizedCharacter {
            char: c,
            offset: start.0,
            span: Span::new(start, end).into(),
        }
    }

    pub fn lex(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(c) = self.tracker.peek() {
            match c {
                '(' | ')' => self.lex_paren(),
                c if c.is_whitespace() => self.tracker.jump(),
                c if c.is_ascii_digit() => self.lex_number(),
                '"' => self.lex_string()?,
                c if c.is_ascii_alphabetic() => self.lex_name(),
                c => return Err(self.unrecognized(c)),
            }
        }

        Ok(self.tokens)
    }
}

/// Splits the source code into tokens, in the same order they appear.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Lexer::new(source).lex()?;
    debug!(tokens = tokens.len(), bytes = source.len(), "tokenized source");
    Ok(tokens)
}
