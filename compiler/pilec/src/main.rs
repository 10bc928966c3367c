//! Pile CLI
//!
//! `pile` with no arguments starts the REPL.

use std::process::ExitCode;

use pilec::commands::{eval_source, repl, run_file};
use pilec::options::{parse_options, Options};

fn main() -> ExitCode {
    pilec::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        return repl(&Options::default());
    };

    match command.as_str() {
        "run" => {
            let Some((options, rest)) = options_or_usage(&args[1..]) else {
                return ExitCode::FAILURE;
            };
            let Some((path, script_args)) = rest.split_first() else {
                eprintln!("error: missing file path");
                eprintln!("Usage: pile run [options] <file.pile> [args...]");
                return ExitCode::FAILURE;
            };
            run_file(path, &options, script_args.to_vec())
        }
        "eval" => {
            let Some((options, rest)) = options_or_usage(&args[1..]) else {
                return ExitCode::FAILURE;
            };
            if rest.is_empty() {
                eprintln!("Usage: pile eval [options] <source>");
                return ExitCode::FAILURE;
            }
            eval_source(&rest.join(" "), &options)
        }
        "repl" => match options_or_usage(&args[1..]) {
            Some((options, _)) => repl(&options),
            None => ExitCode::FAILURE,
        },
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-v" => {
            println!("Pile {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            // A bare script path runs it.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(pile_eval::import::MODULE_EXTENSION))
            {
                run_file(command, &Options::default(), args[1..].to_vec())
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                ExitCode::FAILURE
            }
        }
    }
}

fn options_or_usage(args: &[String]) -> Option<(Options, Vec<String>)> {
    match parse_options(args) {
        Ok(parsed) => Some(parsed),
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!();
            print_usage();
            None
        }
    }
}

fn print_usage() {
    println!("Pile, a concatenative stack language");
    println!();
    println!("Usage: pile <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.pile> [args...]  Run a script");
    println!("  eval <source>              Evaluate source text and print the stack");
    println!("  repl                       Start an interactive session (default)");
    println!("  help                       Show this help message");
    println!("  version                    Show version information");
    println!();
    println!("Options:");
    println!("  -I <dir>                   Add a module directory (repeatable)");
    println!("  --max-depth=<n|none>       Call depth limit (default: 4096)");
    println!("  --no-imports               Disable the import word");
    println!();
    println!("Environment:");
    println!("  PILE_LOG, RUST_LOG         Tracing filter, e.g. PILE_LOG=pile_eval=debug");
    println!();
    println!("Examples:");
    println!("  pile run main.pile");
    println!("  pile eval '1 2 + println'");
    println!("  pile run -I lib main.pile input.txt");
}
