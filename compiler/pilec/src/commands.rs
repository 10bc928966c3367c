//! The `run`, `eval` and `repl` commands.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use pile_eval::{FileImporter, Runtime, Value};
use tracing::debug;

use crate::diagnostic::report;
use crate::options::Options;

/// Build a runtime for `options`. Without explicit module roots, modules
/// are looked up in the current directory.
pub fn build_runtime(options: &Options, script_args: Vec<String>) -> Arc<Runtime> {
    let mut builder = Runtime::builder()
        .args(script_args)
        .max_depth(options.max_depth);
    if options.imports {
        let roots = if options.module_roots.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            options.module_roots.clone()
        };
        debug!(?roots, "module roots");
        builder = builder.importer(Arc::new(FileImporter::new(roots)));
    }
    builder.build()
}

/// Run the script at `path`. Modules next to the script can be imported
/// without extra roots.
pub fn run_file(path: &str, options: &Options, script_args: Vec<String>) -> ExitCode {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("error: cannot read '{path}': {error}");
            return ExitCode::FAILURE;
        }
    };

    let mut options = options.clone();
    if let Some(dir) = Path::new(path).parent() {
        options.module_roots.push(dir.to_path_buf());
    }
    let runtime = build_runtime(&options, script_args);
    match runtime.new_context().eval(&source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report(path, &source, &error);
            ExitCode::FAILURE
        }
    }
}

/// Evaluate `source` and print the resulting stack.
pub fn eval_source(source: &str, options: &Options) -> ExitCode {
    let runtime = build_runtime(options, Vec::new());
    let mut context = runtime.new_context();
    match context.eval(source) {
        Ok(()) => {
            if !context.stack().is_empty() {
                println!("{}", format_stack(context.stack()));
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            report("<eval>", source, &error);
            ExitCode::FAILURE
        }
    }
}

/// Read-eval-print loop over stdin. One context lives for the whole session,
/// so definitions and the stack survive errors.
pub fn repl(options: &Options) -> ExitCode {
    let runtime = build_runtime(options, Vec::new());
    let mut context = runtime.new_context();
    let mut input = io::stdin().lock();
    let mut line = String::new();

    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => {
                println!();
                return ExitCode::SUCCESS;
            }
            Ok(_) => {}
            Err(error) => {
                eprintln!("error: {error}");
                return ExitCode::FAILURE;
            }
        }

        if let Err(error) = context.eval(&line) {
            report("<repl>", &line, &error);
        }
        if !context.stack().is_empty() {
            println!("{}", format_stack(context.stack()));
        }
    }
}

/// Source forms of the stack, bottom first.
pub fn format_stack(stack: &[Value]) -> String {
    stack
        .iter()
        .map(Value::to_source)
        .collect::<Vec<_>>()
        .join(" ")
}
