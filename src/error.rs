//! Definitions of errors that can occur while compiling. Every stage fails on the first problem it
//! finds, and [CompileError] is the single value a caller of [crate::compile] sees.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::syntax::NodeKind;
use crate::target::TargetKind;

#[derive(Error, Diagnostic, Debug, Clone)]
pub enum LexError {
    #[error("unrecognized character '{char}' at byte {offset}")]
    #[diagnostic(code(parenc::lex))]
    UnrecognizedCharacter {
        char: char,
        offset: usize,
        #[label("no token starts with this character")]
        span: SourceSpan,
    },

    #[error("unterminated string starting at byte {offset}")]
    #[diagnostic(code(parenc::lex), help("close the string with '\"'"))]
    UnterminatedString {
        char: char,
        offset: usize,
        #[label("this string is never closed")]
        span: SourceSpan,
    },
}

impl LexError {
    /// The character that stopped the lexer, the opening quote for unterminated strings.
    pub fn char(&self) -> char {
        match self {
            LexError::UnrecognizedCharacter { char, .. } => *char,
            LexError::UnterminatedString { char, .. } => *char,
        }
    }

    /// Byte offset of the character that stopped the lexer.
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnrecognizedCharacter { offset, .. } => *offset,
            LexError::UnterminatedString { offset, .. } => *offset,
        }
    }
}

#[derive(Error, Diagnostic, Debug, Clone)]
pub enum ParseError {
    #[error("unexpected token '{found}' at byte {position}")]
    #[diagnostic(code(parenc::parse))]
    UnexpectedToken {
        found: String,
        position: usize,
        #[label("expected a literal or '('")]
        span: SourceSpan,
    },

    #[error("expected a name after '(' but got '{found}' at byte {position}")]
    #[diagnostic(code(parenc::parse), help("every call starts with the name of the function"))]
    ExpectedName {
        found: String,
        position: usize,
        #[label("expected a name")]
        span: SourceSpan,
    },

    #[error("unexpected end of file at byte {position}")]
    #[diagnostic(code(parenc::parse), help("a call is missing its closing ')'"))]
    UnexpectedEof {
        position: usize,
        #[label("input ends here")]
        span: SourceSpan,
    },
}

impl ParseError {
    /// Byte offset where the parser gave up.
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { position, .. } => *position,
            ParseError::ExpectedName { position, .. } => *position,
            ParseError::UnexpectedEof { position, .. } => *position,
        }
    }
}

/// Invariant violations found while walking a syntax tree. They point to a bug in the stage that
/// built the tree, not to bad input.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum TraversalError {
    #[error("a {kind} node cannot appear at this point of the tree")]
    #[diagnostic(code(parenc::traverse))]
    Misplaced { kind: NodeKind },

    #[error("a {kind} node has no container to be placed into")]
    #[diagnostic(code(parenc::traverse))]
    Detached { kind: NodeKind },
}

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    #[error("cannot generate code for a {kind} node at this point of the tree")]
    #[diagnostic(code(parenc::codegen))]
    Misplaced { kind: TargetKind },
}

#[derive(Error, Diagnostic, Debug, Clone)]
pub enum CompileError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Traversal(#[from] TraversalError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Codegen(#[from] CodegenError),
}

pub type Result<T, E = CompileError> = std::result::Result<T, E>;
