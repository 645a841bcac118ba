//! `minify`, `pack`, and `compile`.

use std::path::Path;

use lumin_pack::{DiskLoader, Mode};
use tracing::{info, warn};

use super::{write_output, CliOptions};
use crate::{CliError, HostCompiler};

/// Run `mode` on the file at `path`, reading every file from disk.
///
/// Requires that stayed in place are summarised in one warning, on top of
/// the per-require warnings the resolver logs.
pub fn render(path: &Path, mode: Mode, options: &CliOptions) -> Result<String, CliError> {
    let rendered = lumin_pack::pack_file(path, mode, &options.pack, &DiskLoader)?;
    if !rendered.is_self_contained() {
        let modules: Vec<&str> = rendered.missing.iter().map(|m| m.module.as_str()).collect();
        warn!(
            count = modules.len(),
            modules = %modules.join(", "),
            "output is not self-contained"
        );
    }
    info!(input = %path.display(), ?mode, bytes = rendered.text.len(), "rendered");
    Ok(rendered.text)
}

pub fn minify_file(path: &Path, options: &CliOptions) -> Result<(), CliError> {
    let text = render(path, Mode::Minify, options)?;
    write_output(options.output.as_deref(), text.as_bytes())
}

pub fn pack_file(path: &Path, options: &CliOptions) -> Result<(), CliError> {
    let text = render(path, Mode::Pack, options)?;
    write_output(options.output.as_deref(), text.as_bytes())
}

/// Pack `path` and compile the result with `compiler`.
pub fn compile_file(
    path: &Path,
    options: &CliOptions,
    compiler: &dyn HostCompiler,
) -> Result<(), CliError> {
    let text = render(path, Mode::Pack, options)?;
    let chunk = compiler.compile(&text)?;
    write_output(options.output.as_deref(), &chunk)
}
