//! Options shared by the `run`, `eval` and `repl` commands.

use std::path::PathBuf;

use pile_eval::DEFAULT_MAX_DEPTH;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Directories searched by `import`, in order.
    pub module_roots: Vec<PathBuf>,
    /// When false, `import` fails with an import error.
    pub imports: bool,
    /// Call depth limit per context; `None` for no limit.
    pub max_depth: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            module_roots: Vec::new(),
            imports: true,
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

/// Split `args` into options and the positional arguments that follow them.
///
/// Options are recognised up to the first positional argument or `--`;
/// everything after that is returned untouched, so script arguments may
/// start with a dash.
pub fn parse_options(args: &[String]) -> Result<(Options, Vec<String>), String> {
    let mut options = Options::default();
    let mut rest = args.iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--" => return Ok((options, rest.cloned().collect())),
            "--no-imports" => options.imports = false,
            "-I" => {
                let dir = rest.next().ok_or("option '-I' needs a directory")?;
                options.module_roots.push(PathBuf::from(dir));
            }
            _ => {
                if let Some(dir) = arg.strip_prefix("-I") {
                    options.module_roots.push(PathBuf::from(dir));
                } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
                    options.max_depth = parse_depth(depth)?;
                } else if arg.starts_with('-') && arg.len() > 1 {
                    return Err(format!("unknown option '{arg}'"));
                } else {
                    let mut positional = vec![arg.clone()];
                    positional.extend(rest.cloned());
                    return Ok((options, positional));
                }
            }
        }
    }
    Ok((options, Vec::new()))
}

fn parse_depth(value: &str) -> Result<Option<usize>, String> {
    if value == "none" {
        return Ok(None);
    }
    match value.parse() {
        Ok(depth) if depth > 0 => Ok(Some(depth)),
        _ => Err(format!("invalid depth '{value}', expected a positive number or 'none'")),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn defaults() {
        let (options, rest) = parse_options(&args(&["script.pile"])).unwrap();
        assert_eq!(options, Options::default());
        assert_eq!(rest, args(&["script.pile"]));
    }

    #[test]
    fn module_roots_in_both_spellings() {
        let (options, _) = parse_options(&args(&["-I", "lib", "-Ivendor", "x"])).unwrap();
        assert_eq!(
            options.module_roots,
            vec![PathBuf::from("lib"), PathBuf::from("vendor")]
        );
    }

    #[test]
    fn depth_and_imports() {
        let (options, _) = parse_options(&args(&["--max-depth=64", "--no-imports"])).unwrap();
        assert_eq!(options.max_depth, Some(64));
        assert!(!options.imports);

        let (options, _) = parse_options(&args(&["--max-depth=none"])).unwrap();
        assert_eq!(options.max_depth, None);

        assert!(parse_options(&args(&["--max-depth=0"])).is_err());
        assert!(parse_options(&args(&["--max-depth=deep"])).is_err());
    }

    #[test]
    fn script_arguments_pass_through() {
        let (_, rest) = parse_options(&args(&["main.pile", "--verbose", "-I"])).unwrap();
        assert_eq!(rest, args(&["main.pile", "--verbose", "-I"]));

        let (_, rest) = parse_options(&args(&["--", "-dashed"])).unwrap();
        assert_eq!(rest, args(&["-dashed"]));
    }

    #[test]
    fn rejects_unknown_options() {
        let error = parse_options(&args(&["--fast"])).unwrap_err();
        assert_eq!(error, "unknown option '--fast'");
        assert!(parse_options(&args(&["-I"])).is_err());
    }
}
