//! The main module of the parser. The main function here is the [parse] function that parses a
//! token sequence into a [Program] by recursive descent.

use tracing::debug;

use crate::error::ParseError;
use crate::lexer::{Token, TokenKind};
use crate::location::{Loc, Span};
use crate::syntax::{CallExpression, Node, Program};

pub type Result<T, E = ParseError> = std::result::Result<T, E>;

pub struct Parser<'a> {
    tokens: &'a [Token],
    index: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, index: 0 }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.index)
    }

    /// Gets the next token, failing at the end of the input.
    fn bump(&mut self) -> Result<&'a Token> {
        let token = self.peek().ok_or_else(|| self.eof())?;
        self.index += 1;
        Ok(token)
    }

    fn eof(&self) -> ParseError {
        let end = self.tokens.last().map(|token| token.span.end).unwrap_or(Loc(0));
        ParseError::UnexpectedEof {
            position: end.0,
            span: Span::point(end).into(),
        }
    }

    /// Parses a single literal or call.
    fn walk(&mut self) -> Result<Node> {
        let token = self.bump()?;

        match token.kind {
            TokenKind::Number => Ok(Node::NumberLiteral(token.text.clone())),
            TokenKind::StringLit => Ok(Node::StringLiteral(token.text.clone())),
            TokenKind::Paren if token.is_open() => self.walk_call(),
            TokenKind::Paren | TokenKind::Name => Err(ParseError::UnexpectedToken {
                found: token.to_string(),
                position: token.span.start.0,
                span: token.span.into(),
            }),
        }
    }

    /// Parses the rest of a call, right after its opening paren.
    fn walk_call(&mut self) -> Result<Node> {
        let name = self.bump()?;

        if name.kind != TokenKind::Name {
            return Err(ParseError::ExpectedName {
                found: name.to_string(),
                position: name.span.start.0,
                span: name.span.into(),
            });
        }

        let mut params = Vec::new();

        loop {
            match self.peek() {
                Some(token) if token.is_close() => {
                    self.index += 1;
                    break;
                }
                Some(_) => params.push(self.walk()?),
                None => return Err(self.eof()),
            }
        }

        Ok(Node::CallExpression(CallExpression {
            name: name.text.clone(),
            params,
        }))
    }

    pub fn parse(mut self) -> Result<Program> {
        let mut body = Vec::new();

        while self.peek().is_some() {
            body.push(self.walk()?);
        }

        Ok(Program { body })
    }
}

/// Builds the syntax tree of a token sequence. Several top level forms are allowed.
pub fn parse(tokens: &[Token]) -> Result<Program> {
    let program = Parser::new(tokens).parse()?;
    debug!(forms = program.body.len(), nodes = program.size(), "parsed program");
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parse_str(source: &str) -> Result<Program> {
        parse(&tokenize(source).unwrap())
    }

    #[test]
    fn parses_nested_calls() {
        assert_eq!(
            parse_str("(add 2 (subtract 4 2))").unwrap(),
            Program::new(vec![Node::call(
                "add",
                vec![
                    Node::number("2"),
                    Node::call("subtract", vec![Node::number("4"), Node::number("2")]),
                ],
            )])
        );
    }

    #[test]
    fn parses_siblings_and_empty_calls() {
        assert_eq!(
            parse_str("(now) (print \"hi\")").unwrap(),
            Program::new(vec![
                Node::call("now", vec![]),
                Node::call("print", vec![Node::string("hi")]),
            ])
        );
    }

    #[test]
    fn empty_input_is_an_empty_program() {
        assert_eq!(parse(&[]).unwrap(), Program::default());
    }

    #[test]
    fn top_level_literals_are_allowed() {
        assert_eq!(
            parse_str("42").unwrap(),
            Program::new(vec![Node::number("42")])
        );
    }

    #[test]
    fn rejects_missing_close_paren() {
        let err = parse_str("(add 2").unwrap_err();

        assert!(matches!(err, ParseError::UnexpectedEof { .. }));
        assert_eq!(err.position(), 6);
    }

    #[test]
    fn rejects_call_without_name() {
        let err = parse_str("(2 2)").unwrap_err();
        assert!(matches!(err, ParseError::ExpectedName { ref found, position: 1, .. } if found == "2"));

        let err = parse_str("()").unwrap_err();
        assert!(matches!(err, ParseError::ExpectedName { ref found, .. } if found == ")"));

        let err = parse_str("(").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof { position: 1, .. }));
    }

    #[test]
    fn rejects_stray_tokens() {
        let err = parse_str("(add 2 2))").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { .. }));
        assert_eq!(err.position(), 9);

        let err = parse_str("(add x)").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { ref found, position: 5, .. } if found == "x"));
    }
}
