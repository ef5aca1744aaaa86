//! `fret-check`: check delimiters and strings in a file.

use std::io::IsTerminal;

use fret_check::{check, init_tracing, CheckError, Options};
use fret_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match Options::parse(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            print_usage();
            std::process::exit(2);
        }
    };

    let source = match std::fs::read_to_string(&options.path) {
        Ok(source) => source,
        Err(source) => {
            let err = CheckError::Io {
                path: options.path.clone(),
                source,
            };
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    match check(&source, options.session_config()) {
        Ok(summary) => {
            println!(
                "{}: ok ({} delimiter pairs, {} lines)",
                options.path.display(),
                summary.pairs,
                summary.lines
            );
        }
        Err(CheckError::Reported(failure)) => {
            let is_tty = std::io::stderr().is_terminal();
            let mut emitter = TerminalEmitter::stderr(options.color, is_tty);
            emitter.emit_failure(&failure);
            emitter.flush();
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: fret-check <file> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --limit=<n>                    Stop after n worries and sorries (default: 10)");
    eprintln!("  --color=<auto|always|never>    Colored output (default: auto)");
}
