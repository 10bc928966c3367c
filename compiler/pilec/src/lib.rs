//! Pile CLI - running scripts, evaluating snippets and the REPL.
//!
//! The engine lives in `pile_eval`; this crate wires it to the filesystem,
//! the terminal and the process environment.

pub mod commands;
pub mod diagnostic;
pub mod options;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_tree::HierarchicalLayer;

/// Environment variables holding a tracing filter, in order of preference.
const LOG_VARS: [&str; 2] = ["PILE_LOG", "RUST_LOG"];

/// Install a tracing subscriber when `PILE_LOG` or `RUST_LOG` is set.
///
/// For example `PILE_LOG=pile_eval=trace` traces every symbol resolution.
pub fn init_tracing() {
    let Some(directives) = LOG_VARS.iter().find_map(|var| std::env::var(var).ok()) else {
        return;
    };
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(directives))
        .with(
            HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true),
        )
        .try_init();
}
