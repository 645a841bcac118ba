//! Command-line option parsing.

use std::path::PathBuf;

use lumin_pack::PackOptions;

use crate::{Luac, DEFAULT_LUAC};

/// Options shared by `minify`, `pack`, and `compile`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    pub pack: PackOptions,
    /// Output file (`-o <path>`). `None` writes to stdout.
    pub output: Option<PathBuf>,
    /// Host compiler program for `compile` (`--luac=<program>`).
    pub luac: String,
    /// `-v` / `--verbose`: debug logging unless `RUST_LOG` says otherwise.
    pub verbose: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            pack: PackOptions::default(),
            output: None,
            luac: DEFAULT_LUAC.to_string(),
            verbose: false,
        }
    }
}

impl CliOptions {
    pub fn host_compiler(&self) -> Luac {
        Luac::new(self.luac.clone())
    }
}

/// Parse the flags following `<command> <file>`.
///
/// Unknown flags produce a warning and are ignored. `-o` takes the next
/// argument as its value; a trailing `-o` is an error.
pub fn parse_options(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut args = args.iter();

    while let Some(arg) = args.next() {
        if arg == "-o" {
            let Some(path) = args.next() else {
                return Err("-o requires an output path".to_string());
            };
            options.output = Some(PathBuf::from(path));
        } else if let Some(path) = arg
            .strip_prefix("-o=")
            .or_else(|| arg.strip_prefix("--output="))
        {
            options.output = Some(PathBuf::from(path));
        } else if let Some(root) = arg.strip_prefix("--root=") {
            options.pack.root = PathBuf::from(root);
        } else if arg == "--keep-delete-blocks" {
            options.pack.delete_blocks = false;
        } else if arg == "--sandbox" {
            options.pack.sandbox = true;
        } else if let Some(program) = arg.strip_prefix("--luac=") {
            options.luac = program.to_string();
        } else if arg == "-v" || arg == "--verbose" {
            options.verbose = true;
        } else {
            eprintln!("warning: ignoring unknown option '{arg}'");
        }
    }

    Ok(options)
}
