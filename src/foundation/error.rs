/// Convenience result type used across the crate.
pub type CardResult<T> = Result<T, CardError>;

/// Top-level error taxonomy used by the renderer APIs.
#[derive(thiserror::Error, Debug)]
pub enum CardError {
    /// Invalid or incomplete record data (missing `starting_six`, wrong position counts, bad names).
    #[error("validation error: {0}")]
    Validation(String),

    /// An asset could not be read from its source.
    #[error("asset error: {0}")]
    Asset(String),

    /// The canvas could not be set up or read back.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing records and layout files.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardError {
    /// Build a [`CardError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CardError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`CardError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`CardError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
