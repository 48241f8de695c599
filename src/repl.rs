use std::path::PathBuf;

use miette::IntoDiagnostic;
use rustyline::{
    error::ReadlineError, history::DefaultHistory, validate::MatchingBracketValidator, Completer,
    Editor, Helper, Highlighter, Hinter, Validator,
};

use crate::cli::Emit;

/// Keeps reading lines until the parens typed so far are balanced.
#[derive(Completer, Helper, Highlighter, Hinter, Validator)]
struct InputValidator {
    #[rustyline(Validator)]
    brackets: MatchingBracketValidator,
}

fn get_history_path() -> Option<PathBuf> {
    let home_env = std::env::var("HOME").ok()?;
    let path = format!("{home_env}/.parenc.history");
    Some(PathBuf::from(path))
}

pub fn run(emit: Emit) -> miette::Result<()> {
    let mut rl: Editor<InputValidator, DefaultHistory> = Editor::new().into_diagnostic()?;
    let path = get_history_path();
    let h = InputValidator {
        brackets: MatchingBracketValidator::new(),
    };

    rl.set_helper(Some(h));

    if let Some(path) = path.clone() {
        if rl.load_history(&path).is_err() {
            println!("No previous history.");
        }
    }

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                rl.add_history_entry(line.as_str()).into_diagnostic()?;

                match crate::emit(&line, emit) {
                    Ok(output) => println!("{output}"),
                    Err(err) => eprintln!("{:?}", crate::report(err, "<repl>", &line)),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Interrupted");
                break;
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                println!("Error: {err:?}");
                break;
            }
        }
    }

    if let Some(path) = path {
        let _ = rl.append_history(&path);
    }

    Ok(())
}
