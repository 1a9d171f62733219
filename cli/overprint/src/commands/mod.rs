//! CLI command implementations.

pub mod demo;
pub mod overloads;
pub mod resolve;

use std::io::{self, Write};

use anyhow::{Context, Result};
use overprint_core::{OutputFormat, OverprintError};

/// Parse the `--format` option, defaulting to text.
pub(crate) fn output_format(format: Option<&str>) -> Result<OutputFormat> {
    format
        .map(OutputFormat::parse)
        .transpose()
        .context("invalid --format")
        .map(Option::unwrap_or_default)
}

/// Write rendered output to stdout, reporting a failing stream as an error.
pub(crate) fn emit(rendered: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(rendered.as_bytes())
        .and_then(|()| out.flush())
        .map_err(OverprintError::from)
        .context("writing output")
}
