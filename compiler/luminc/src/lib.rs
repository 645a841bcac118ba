//! Lumin command line.
//!
//! Thin layer over [`lumin_pack`]: parses flags into [`commands::CliOptions`],
//! reads the input from disk, and writes the result to a file or stdout.
//! The `compile` command also hands the packed text to a [`HostCompiler`].

use std::sync::Once;

pub mod commands;
mod compile;
mod error;

pub use compile::{CompileError, HostCompiler, Luac, DEFAULT_LUAC};
pub use error::CliError;

static TRACING_INIT: Once = Once::new();

/// Install the global `tracing` subscriber.
///
/// Events go to stderr. `RUST_LOG` wins when set; otherwise the level is
/// `debug` with `verbose` and `warn` without, so missing-require warnings
/// always show. Later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use std::io::IsTerminal;
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_target(false),
            )
            .with(filter)
            .init();
    });
}
