//! Overload-set model and printer for overprint.
//!
//! A family of `print` overloads, one per argument category, each writing a
//! labeled line to an output stream. In C++ the compiler picks the overload
//! from the argument's type, qualifiers and reference/pointer category; here
//! the same choice is made statically through `From` impls on [`Value`], and
//! [`resolve()`] models the C++ selection rules for a declared argument type.
//!
//! ## Modules
//!
//! - [`param`] — C++ parameter/argument type parser
//! - [`category`] — The eleven overloads, their labels and declarations
//! - [`value`] — Tagged arguments and their rendering
//! - [`printer`] — Line-per-call printer over any `io::Write`
//! - [`mod@resolve`] — Overload ranking and selection
//! - [`demo`] — The fixed demonstration sequence
//! - [`view`] — Text and JSON renderings

pub mod category;
pub mod demo;
pub mod error;
pub mod param;
pub mod printer;
pub mod resolve;
pub mod value;
pub mod view;

// Re-export key types for convenience
pub use category::Category;
pub use error::{OverprintError, Result};
pub use param::ParamType;
pub use printer::Printer;
pub use resolve::{resolve, Candidate, Rank, Resolution};
pub use value::Value;
pub use view::{OutputFormat, ViewOutput};
