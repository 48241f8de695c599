//! This module describes a [Loc] that is a newtype wrapper that is used to localize tokens inside
//! the source code, and the [Span] between two of them. Both count bytes, not characters.

use std::ops::AddAssign;

use miette::SourceSpan;

/// Byte address of a character in the source code.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Loc(pub usize);

impl AddAssign for Loc {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

/// Half open byte range of a token in the source code.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Loc,
    pub end: Loc,
}

impl Span {
    pub fn new(start: Loc, end: Loc) -> Self {
        Self { start, end }
    }

    /// A zero width span, used to point at the place where something is missing.
    pub fn point(at: Loc) -> Self {
        Self { start: at, end: at }
    }

    pub fn len(&self) -> usize {
        self.end.0 - self.start.0
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        (span.start.0, span.len()).into()
    }
}
