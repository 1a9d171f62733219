//! `overprint resolve` — explain which overload an argument type binds.

use anyhow::{Context, Result};
use log::debug;
use overprint_core::view::resolution_view;
use overprint_core::{resolve, ParamType};

/// Resolve `arg_type` against the overload set and print the outcome.
pub fn run(arg_type: &str, format: Option<&str>) -> Result<()> {
    let format = super::output_format(format)?;
    let arg = ParamType::parse(arg_type)
        .with_context(|| format!("parsing argument type '{arg_type}'"))?;
    debug!("parsed '{arg_type}' as {arg}");

    let resolution = resolve(&arg)?;
    super::emit(&resolution_view(&resolution)?.render(format)?)
}
