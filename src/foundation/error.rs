/// Convenience result type used across Framewright.
pub type FramewrightResult<T> = Result<T, FramewrightError>;

/// Top-level error taxonomy.
///
/// Ratio resolution, frame transforms, shape lookup and slot placement never
/// fail; they fall back to documented defaults instead. Errors come from the
/// geometry kernel's structural preconditions, document validation and IO.
#[derive(thiserror::Error, Debug)]
pub enum FramewrightError {
    /// A geometry precondition was violated by the caller.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid template document or asset table data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramewrightError {
    /// Build a [`FramewrightError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`FramewrightError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FramewrightError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FramewrightError {
    fn from(value: serde_json::Error) -> Self {
        Self::serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
