//! This module defines a [Tracker] structure that is used to keep track of the cursor of the lexer.
use std::{iter::Peekable, str::Chars};

use crate::location::{Loc, Span};

/// Keeps track of the current position in the source code and helps cutting out substrings.
pub struct Tracker<'a> {
    current: Loc,
    saved: Loc,
    string: &'a str,
    peekable: Peekable<Chars<'a>>,
}

impl<'a> Tracker<'a> {
    pub fn new(string: &'a str) -> Self {
        Self {
            current: Loc(0),
            saved: Loc(0),
            string,
            peekable: string.chars().peekable(),
        }
    }

    /// Byte offset of the next character.
    pub fn current(&self) -> Loc {
        self.current
    }

    /// Peeks the next character in the iterator.
    pub fn peek(&mut self) -> Option<char> {
        self.peekable.peek().cloned()
    }

    /// Gets the next character.
    pub fn next(&mut self) -> Option<char> {
        let next = self.peekable.next();
        if let Some(c) = next {
            self.current += Loc(c.len_utf8());
        }
        next
    }

    /// Jumps to the next character without returning a char.
    pub fn jump(&mut self) {
        self.next();
    }

    /// Advances while the predicate holds for the next character.
    pub fn skip_while(&mut self, mut f: impl FnMut(char) -> bool) {
        while let Some(c) = self.peek() {
            if !f(c) {
                break;
            }
            self.jump();
        }
    }

    /// Marks the start of the token that is about to be read.
    pub fn save(&mut self) {
        self.saved = self.current
    }

    /// Returns the span between the saved position and the current one.
    pub fn saved_span(&self) -> Span {
        Span::new(self.saved, self.current)
    }

    /// Gets the substring of the current code by a span.
    pub fn substring(&self, span: Span) -> &'a str {
        &self.string[span.start.0..span.end.0]
    }
}
