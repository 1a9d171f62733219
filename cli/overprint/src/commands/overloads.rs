//! `overprint overloads` — list the overload set.

use anyhow::Result;
use overprint_core::view::overloads_view;

/// Print the overload table.
pub fn run(format: Option<&str>) -> Result<()> {
    let format = super::output_format(format)?;
    super::emit(&overloads_view()?.render(format)?)
}
