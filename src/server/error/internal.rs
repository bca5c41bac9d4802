use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A text column holds a value that does not map onto its domain enum.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unexpected value '{value}' stored in {field}")]
    InvalidStoredValue {
        /// Column the value was read from
        field: &'static str,
        /// The stored value
        value: String,
    },

    /// Password hashing failed.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// Token signing failed.
    #[error("Failed to sign token: {0}")]
    TokenSigning(String),
}
