//! File input helpers.

use color_eyre::Section;
use eyre::{Context, Result};
use lyricsync_core::error::Error;
use std::io::ErrorKind;
use std::path::Path;

/// Read a UTF-8 input file, reporting a missing file as an engine input error.
pub(crate) fn read_input(path: &Path, what: &str) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(eyre::Report::new(Error::not_found(path))
            .with_note(|| format!("while reading the {what}"))
            .suggestion("check the path, it is resolved relative to the working directory")),
        Err(e) => Err(e).wrap_err_with(|| format!("failed to read {what}: {:?}", path.display())),
    }
}
