//! Errors and error specific types for universal use

/// A custom datatype that wraps the error variant `<E>` into a report,
/// allowing [`error_stack::Report<E>`] specific extendability.
///
/// Effectively, equivalent to `Result<T, error_stack::Report<E>>`.
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Parsing errors.
#[derive(Debug, thiserror::Error)]
pub enum ParsingError {
    /// A string failed to parse into the named enum.
    #[error("Failed to parse enum: {0}")]
    EnumParseFailure(&'static str),
    /// A string failed to parse into the named struct.
    #[error("Failed to parse struct: {0}")]
    StructParseFailure(&'static str),
    /// Free-text date did not match the recognized display format.
    #[error("Failed to parse date from display text")]
    DateParsingFailed,
}

/// Validation errors.
#[allow(missing_docs)] // Only to prevent warnings about struct fields not being documented
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The provided input is missing a required field.
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: String },

    /// An incorrect value was provided for the field specified by `field_name`.
    #[error("Incorrect value provided for field: {field_name}")]
    IncorrectValueProvided { field_name: &'static str },

    /// An invalid input was provided.
    #[error("{message}")]
    InvalidValue { message: String },
}
