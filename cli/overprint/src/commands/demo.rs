//! `overprint demo` — call every overload once.

use anyhow::{Context, Result};
use overprint_core::view::demo_view;
use overprint_core::{demo, OutputFormat, Printer};

/// Run the demo, writing through the printer for text output.
pub fn run(format: Option<&str>) -> Result<()> {
    match super::output_format(format)? {
        OutputFormat::Text => {
            let mut printer = Printer::stdout();
            demo::run(&mut printer).context("writing demo output")?;
        }
        OutputFormat::Json => {
            let view = demo_view(&demo::records())?;
            super::emit(&view.render(OutputFormat::Json)?)?;
        }
    }
    Ok(())
}
