use std::io::Read;

use clap::Parser;
use miette::{IntoDiagnostic, NamedSource, Report};
use tracing_subscriber::EnvFilter;

use parenc::{generate_program, parse, tokenize, transform, CompileError};

use crate::cli::{Emit, Options};

mod cli;
mod repl;

/// Runs the compiler until the requested stage and prints its output.
pub fn emit(source: &str, emit: Emit) -> Result<String, CompileError> {
    let tokens = tokenize(source)?;

    if emit == Emit::Tokens {
        let lines = tokens
            .iter()
            .map(|token| {
                let span = format!("{}..{}", token.span.start.0, token.span.end.0);
                format!("{:<8} {:<10} {}", token.kind.to_string(), span, token)
            })
            .collect::<Vec<_>>();
        return Ok(lines.join("\n"));
    }

    let program = parse(&tokens)?;

    if emit == Emit::Ast {
        return Ok(program.to_string());
    }

    let target = transform(program)?;

    match emit {
        Emit::Target => Ok(format!("{target:#?}")),
        _ => Ok(generate_program(&target)?),
    }
}

/// Attaches the source code to an error, so the report can show where it happened.
pub fn report(error: CompileError, name: &str, source: &str) -> Report {
    Report::new(error).with_source_code(NamedSource::new(name, source.to_string()))
}

fn install_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("parenc=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> miette::Result<()> {
    // Install the panic handler.
    bupropion::install(bupropion::BupropionHandlerOpts::new).into_diagnostic()?;

    // Parse the command line arguments.
    let options = Options::parse();
    install_logging(options.debug);

    if options.repl {
        return repl::run(options.emit);
    }

    let (name, source) = match &options.load {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .map_err(|err| miette::miette!("cannot read {}: {err}", path.display()))?;
            (path.display().to_string(), source)
        }
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .into_diagnostic()?;
            ("<stdin>".to_string(), source)
        }
    };

    let output = emit(&source, options.emit).map_err(|err| report(err, &name, &source))?;
    println!("{output}");

    Ok(())
}
