//! File-or-stdin input for every command.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Read the whole input named by `path`; `-` means stdin.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    let bytes = if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .context("cannot read stdin")?;
        buf
    } else {
        fs::read(path).with_context(|| format!("cannot read {}", path.display()))?
    };
    debug!(path = %path.display(), len = bytes.len(), "read input");
    Ok(bytes)
}

/// Name for `path` in messages.
pub fn display_name(path: &Path) -> String {
    if path.as_os_str() == "-" {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}
