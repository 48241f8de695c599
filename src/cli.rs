use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Compiles parenthesized calls like `(add 2 (subtract 4 2))` into C-style calls.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Options {
    /// Loads a file to use as input, otherwise the input is read from stdin.
    #[arg(short, long)]
    pub load: Option<PathBuf>,

    /// Starts a repl session.
    #[arg(short, long)]
    pub repl: bool,

    /// The stage whose output is printed.
    #[arg(short, long, value_enum, default_value_t = Emit::Code)]
    pub emit: Emit,

    /// Logs what every stage of the compiler does.
    #[arg(short, long)]
    pub debug: bool,
}

#[derive(ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    /// The list of tokens, with their byte ranges.
    Tokens,

    /// The source tree, printed back in the parenthesized syntax.
    Ast,

    /// The target tree.
    Target,

    /// The generated code.
    #[default]
    Code,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let options = Options::parse_from(["parenc", "--load", "main.paren", "-e", "ast", "-d"]);

        assert_eq!(options.load, Some(PathBuf::from("main.paren")));
        assert_eq!(options.emit, Emit::Ast);
        assert!(options.debug);
        assert!(!options.repl);
    }

    #[test]
    fn emits_code_by_default() {
        let options = Options::parse_from(["parenc"]);

        assert_eq!(options.emit, Emit::Code);
        assert_eq!(options.load, None);
    }
}
