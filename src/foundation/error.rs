/// Convenience result type used across the crate.
pub type BackdropResult<T> = Result<T, BackdropError>;

/// Top-level error taxonomy used by library APIs.
///
/// The frame loops themselves never fail: a missing drawing surface skips the frame. Errors
/// only come from configuration, content lookups, rasterisation and IO around them.
#[derive(thiserror::Error, Debug)]
pub enum BackdropError {
    /// Invalid user-provided configuration or ranges.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed or unresolvable static content (for example a gradient spec).
    #[error("content error: {0}")]
    Content(String),

    /// Failures while rasterising a display list.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BackdropError {
    /// Build a [`BackdropError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BackdropError::Content`] value.
    pub fn content(msg: impl Into<String>) -> Self {
        Self::Content(msg.into())
    }

    /// Build a [`BackdropError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BackdropError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for BackdropError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
