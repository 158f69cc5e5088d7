//! cindermark CLI - render a Markdown file (or stdin) to HTML on stdout.

use std::io::{self, Read, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let (source_name, input) = if args.len() > 1 && args[1] != "-" {
        match std::fs::read_to_string(&args[1]) {
            Ok(contents) => (args[1].clone(), contents),
            Err(err) => {
                eprintln!("{}: {err}", args[1]);
                return ExitCode::FAILURE;
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut buf) {
            eprintln!("stdin: {err}");
            return ExitCode::FAILURE;
        }
        ("<stdin>".to_owned(), buf)
    };

    let stdout = io::stdout().lock();
    let mut out = io::BufWriter::new(stdout);
    let result = cindermark::render_to(&source_name, &input, &mut out);
    if let Err(err) = out.flush() {
        eprintln!("stdout: {err}");
        return ExitCode::FAILURE;
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Partial HTML written before the failure has already been
            // flushed; report the diagnostic and exit nonzero.
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
