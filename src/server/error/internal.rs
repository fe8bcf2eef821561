use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enumeration column holds a value the application does not know.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown {kind} value '{value}' in database")]
    UnknownEnumValue {
        /// Name of the enumeration, e.g. `room status`
        kind: &'static str,
        /// The stored value that failed to parse
        value: String,
    },

    /// A stored monetary value cannot be represented as a decimal.
    #[error("Stored amount {0} is not a finite decimal")]
    InvalidAmount(f64),
}
