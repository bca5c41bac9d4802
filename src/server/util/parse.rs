use crate::server::error::{internal::InternalError, AppError};

/// Parses a stored text column into its domain enum.
///
/// # Arguments
/// - `field` - Name of the column, used in the error when parsing fails
/// - `value` - The stored value
/// - `parse` - Parser for the target enum
///
/// # Returns
/// - `Ok(T)` - Successfully parsed value
/// - `Err(AppError::InternalErr(InvalidStoredValue))` - The stored value is not a
///   known variant
pub fn parse_stored<T>(
    field: &'static str,
    value: String,
    parse: fn(&str) -> Option<T>,
) -> Result<T, AppError> {
    match parse(&value) {
        Some(parsed) => Ok(parsed),
        None => Err(InternalError::InvalidStoredValue { field, value }.into()),
    }
}
