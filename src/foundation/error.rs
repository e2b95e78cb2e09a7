/// Convenience result type used across the explainer.
pub type ExplainerResult<T> = Result<T, ExplainerError>;

/// Top-level error taxonomy used by library APIs.
///
/// Navigation never produces an error: stepping past either end of the stage range is a
/// saturating no-op. Errors only surface while loading the authored tables or settings.
#[derive(thiserror::Error, Debug)]
pub enum ExplainerError {
    /// The authored content or scene tables are malformed. Fatal at startup.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Invalid user-provided or authored data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while validating or sampling animation data.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ExplainerError {
    /// Build an [`ExplainerError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build an [`ExplainerError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`ExplainerError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build an [`ExplainerError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ExplainerError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
