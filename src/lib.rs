//! This is the main module of a tiny compiler that turns parenthesized calls into C-style calls:
//!
//! ```text
//! (add 2 (subtract 4 2))   =>   add(2, subtract(4, 2));
//! ```
//!
//! The compilation happens in a straight line: [tokenize] the source, [parse] the tokens into a
//! [syntax::Program], [transform] it into a [target::Program] with the generic [traverse] walker
//! and [generate] the output text. Every stage can be called on its own.

pub mod codegen;
pub mod error;
pub mod lexer;
pub mod location;
pub mod parser;
pub mod syntax;
pub mod target;
pub mod transform;
pub mod traverse;

pub use codegen::{generate, generate_program};
pub use error::{CodegenError, CompileError, LexError, ParseError, Result, TraversalError};
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::parse;
pub use transform::transform;
pub use traverse::{traverse, Hooks, Visitor};

/// Compiles a whole source string, stopping at the first error of any stage.
pub fn compile(source: &str) -> Result<String> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;
    let target = transform(program)?;
    Ok(generate_program(&target)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_a_call() {
        assert_eq!(compile("(add 2 2)").unwrap(), "add(2, 2);");
    }

    #[test]
    fn compiles_nested_calls() {
        assert_eq!(
            compile("(add 2 (subtract 4 2))").unwrap(),
            "add(2, subtract(4, 2));"
        );
    }

    #[test]
    fn compiles_strings() {
        assert_eq!(
            compile(r#"(concat "foo" "bar")"#).unwrap(),
            r#"concat("foo", "bar");"#
        );
    }

    #[test]
    fn compiles_many_statements() {
        assert_eq!(
            compile("(add 2 2)\n(subtract 4 2)").unwrap(),
            "add(2, 2);\nsubtract(4, 2);"
        );
    }

    #[test]
    fn unterminated_call_is_a_parse_error() {
        assert!(matches!(
            compile("(add 2"),
            Err(CompileError::Parse(ParseError::UnexpectedEof { .. }))
        ));
    }

    #[test]
    fn stray_character_is_a_lex_error() {
        for (source, at) in [("#(add 2 2", 0), ("(add 2# 2", 6), ("(add 2 2#", 8)] {
            match compile(source) {
                Err(CompileError::Lex(LexError::UnrecognizedCharacter {
                    char: '#', offset, ..
                })) => assert_eq!(offset, at),
                other => panic!("expected a lex error for {source:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn only_top_level_calls_end_with_semicolon() {
        let output = compile("(a (b (c)) (d))\n(e)").unwrap();

        assert_eq!(output, "a(b(c()), d());\ne();");
        assert_eq!(output.matches(';').count(), 2);
    }

    const SOURCES: &[&str] = &[
        "(add 2 2)",
        "(add 2 (subtract 4 2))",
        "(concat \"foo\" \"bar\")",
        "(add 2 2)\n(subtract 4 2)",
        "(print \"x\" (add 1 2))\n(now)",
        "(add\n\t2(subtract  4 \"a b\"))(now)",
        "(a 1 (b \"2\" (c)) 3) (d) 4",
        "(print\n  (format \"total\" (add 1 (multiply 2 3)))\n  (now))",
        "",
    ];

    #[test]
    fn compilation_is_deterministic() {
        for source in SOURCES {
            assert_eq!(compile(source).unwrap(), compile(source).unwrap(), "{source:?}");
        }
    }

    #[test]
    fn whitespace_between_tokens_is_insignificant() {
        for source in SOURCES {
            let tokens = tokenize(source).unwrap();
            let relexed = tokens
                .iter()
                .map(Token::to_string)
                .collect::<Vec<_>>()
                .join(" ");

            assert_eq!(
                parse(&tokenize(&relexed).unwrap()).unwrap(),
                parse(&tokens).unwrap(),
                "{source:?}"
            );
        }
    }

    #[test]
    fn target_tree_has_the_size_of_the_source_tree() {
        for source in SOURCES {
            let program = parse(&tokenize(source).unwrap()).unwrap();
            let size = program.size();

            assert_eq!(transform(program).unwrap().size(), size, "{source:?}");
        }
    }

    #[test]
    fn compiles_deeply_nested_calls_on_a_small_stack() {
        let source = format!("{}{}", "(a ".repeat(1000), ")".repeat(1000));

        let output = std::thread::Builder::new()
            .stack_size(2 * 1024 * 1024)
            .spawn(move || compile(&source))
            .unwrap()
            .join()
            .unwrap()
            .unwrap();

        assert_eq!(output, format!("{}{};", "a(".repeat(1000), ")".repeat(1000)));
    }

    #[test]
    fn compiles_on_independent_threads() {
        let handles = (0..4)
            .map(|n| std::thread::spawn(move || compile(&format!("(add {n} {n})"))))
            .collect::<Vec<_>>();

        for (n, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap().unwrap(), format!("add({n}, {n});"));
        }
    }
}
