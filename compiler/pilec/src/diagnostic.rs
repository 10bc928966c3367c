//! Rendering of evaluation errors for the terminal.
//!
//! Errors that carry a source position are rendered as an ariadne report
//! pointing at the offending token; everything else is a single line.

use std::io::{self, Write};

use ariadne::{Config, IndexType, Label, Report, ReportKind, Source};
use pile_eval::{EvalError, ErrorValue};
use pile_ir::LineIndex;

/// Print `error` to stderr. `name` identifies the source in the report.
pub fn report(name: &str, source: &str, error: &EvalError) {
    let mut stderr = io::stderr().lock();
    // Nothing sensible to do when stderr is gone.
    let _ = write_report(name, source, error, true, &mut stderr);
}

pub fn write_report(
    name: &str,
    source: &str,
    error: &EvalError,
    color: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    match error {
        EvalError::Raised(value) => match value.position {
            Some(position) => {
                let start = LineIndex::new(source).offset(position);
                positioned_report(name, source, value, start..token_end(source, start), color, out)
            }
            None => writeln!(out, "error: {value}"),
        },
        fault @ EvalError::DepthExceeded { .. } => writeln!(out, "fatal: {fault}"),
    }
}

fn positioned_report(
    name: &str,
    source: &str,
    error: &ErrorValue,
    span: std::ops::Range<usize>,
    color: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    let label = error.message.as_deref().unwrap_or(error.code.description());
    Report::build(ReportKind::Error, (name, span.clone()))
        .with_config(
            Config::default()
                .with_color(color)
                .with_index_type(IndexType::Byte),
        )
        .with_code(error.code.code())
        .with_message(error.code.description())
        .with_label(Label::new((name, span)).with_message(label))
        .finish()
        .write((name, Source::from(source)), out)
}

/// End of the whitespace-delimited token starting at `start`, covering at
/// least one character.
fn token_end(source: &str, start: usize) -> usize {
    let rest = &source[start..];
    let first = rest.chars().next().map_or(0, char::len_utf8);
    let token = rest.find(char::is_whitespace).unwrap_or(rest.len());
    start + token.max(first)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pile_eval::Runtime;

    fn render(source: &str) -> String {
        let runtime = Runtime::builder().max_depth(Some(16)).build();
        let error = runtime.new_context().eval(source).unwrap_err();
        let mut out = Vec::new();
        write_report("test.pile", source, &error, false, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn positioned_errors_point_at_the_token() {
        let report = render("1 2\n  frobnicate 3");
        assert!(report.contains("Reference error"), "{report}");
        assert!(report.contains("test.pile:2:3"), "{report}");
        assert!(report.contains("Unrecognized word: 'frobnicate'"), "{report}");
    }

    #[test]
    fn syntax_errors_are_positioned() {
        let report = render("( 1 2");
        assert!(report.contains("Syntax error"), "{report}");
        assert!(report.contains("test.pile:1:"), "{report}");
    }

    #[test]
    fn unpositioned_errors_are_one_line() {
        assert_eq!(render("[ ] pop"), "error: Range error: Array is empty.\n");
    }

    #[test]
    fn depth_faults_are_fatal() {
        let report = render(": f f ; f");
        assert!(report.starts_with("fatal: maximum call depth exceeded"), "{report}");
    }

    #[test]
    fn token_spans() {
        assert_eq!(token_end("ab cd", 0), 2);
        assert_eq!(token_end("ab cd", 3), 5);
        assert_eq!(token_end("ab", 2), 2);
        assert_eq!(token_end("é x", 0), 2);
    }
}
