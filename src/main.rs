use std::fs;

use castellano::{
    Report, interpret,
    repl::{EXIT_COMMAND, Session, Step},
};
use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing_subscriber::EnvFilter;

/// castellano evaluates programs written in a small language with Spanish
/// keywords. Without arguments it starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells castellano to read the contents from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Prints parse and runtime errors to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Source code to evaluate, or a path when `--file` is given.
    contents: Option<String>,
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let Some(contents) = args.contents else {
        if let Err(e) = run_session(args.verbose) {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
                                         eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                                         std::process::exit(1);
                                     })
    } else {
        contents
    };

    print_report(&interpret(&script), args.verbose);
}

/// Reads lines until `salir` or end of input, printing the value of the
/// whole session after each one.
fn run_session(verbose: bool) -> Result<(), ReadlineError> {
    let mut editor = DefaultEditor::new()?;
    let mut session = Session::new();

    loop {
        let line = match editor.readline(">>> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(e),
        };
        if line.trim() != EXIT_COMMAND {
            let _ = editor.add_history_entry(line.as_str());
        }

        match session.feed(&line) {
            Step::Evaluated(report) => print_report(&report, verbose),
            Step::Exit => return Ok(()),
        }
    }
}

fn print_report(report: &Report, verbose: bool) {
    if let Some(output) = &report.output {
        println!("{output}");
    }

    if verbose {
        if let Some(error) = &report.parse_error {
            eprintln!("{error}");
        }
        for error in &report.runtime_errors {
            eprintln!("{error}");
        }
    }
}
