//! The printer: writes one labeled line per `print` call.

use std::io::{self, Stdout, Write};

use log::debug;

use crate::error::Result;
use crate::value::Value;

/// Writes each argument as `<label><value>` followed by a newline.
///
/// The printer holds no state besides its output stream; printing the same
/// value twice writes the same line twice.
#[derive(Debug)]
pub struct Printer<W: Write> {
    out: W,
}

impl Printer<Stdout> {
    /// Printer writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Printer<W> {
    /// Printer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Print one argument. The overload is chosen by the argument's type.
    pub fn print<'a>(&mut self, arg: impl Into<Value<'a>>) -> Result<()> {
        let value = arg.into();
        debug!("print -> {}", value.category().declaration());
        writeln!(self.out, "{value}")?;
        Ok(())
    }

    /// Flush the underlying stream.
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Consume the printer, returning the output stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}
