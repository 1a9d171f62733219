//! Error types for overprint.

/// Errors that can occur while parsing types, resolving overloads or writing output.
#[derive(Debug, thiserror::Error)]
pub enum OverprintError {
    /// Failed to parse a parameter or argument type.
    #[error("invalid type: {detail}")]
    InvalidType { detail: String },

    /// Unknown overload category name.
    #[error("unknown category: '{name}'")]
    UnknownCategory { name: String },

    /// No `print` overload accepts the argument.
    #[error("no viable overload of print for an argument of type '{arg}'")]
    NoViableOverload { arg: String },

    /// More than one `print` overload is equally good.
    #[error("call to print with an argument of type '{arg}' is ambiguous between: {}", .candidates.join(", "))]
    Ambiguous {
        arg: String,
        candidates: Vec<String>,
    },

    /// Unknown output format name.
    #[error("unknown output format: '{name}'. Available formats: text, json")]
    UnknownFormat { name: String },

    /// JSON serialization error.
    #[error("serialization error")]
    Serialization(#[from] serde_json::Error),

    /// The output stream rejected a write.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

/// Result type alias for overprint operations.
pub type Result<T> = std::result::Result<T, OverprintError>;
