//! Command implementations for policy-cli

pub mod compare;
pub mod inspect;

pub use compare::{CompareOptions, run_compare};
pub use inspect::{run_canonical, run_normalize};

use std::io::Read;
use std::path::Path;

use crate::error::{CliError, Result};

/// File argument that stands for stdin
pub const STDIN_ARG: &str = "-";

pub(crate) fn is_stdin(path: &Path) -> bool {
    path == Path::new(STDIN_ARG)
}

/// Read a document from a file, or from stdin for "-"
pub(crate) fn read_input(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }

    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })
}
