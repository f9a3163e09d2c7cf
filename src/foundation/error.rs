/// Convenience result type used across medialab.
pub type MediaLabResult<T> = Result<T, MediaLabError>;

/// Error taxonomy for the computation core.
#[derive(thiserror::Error, Debug)]
pub enum MediaLabError {
    /// A precondition was violated by the caller (zero dimension, bit depth out of range,
    /// non-power-of-two color count, ...). Values are never clamped to make them fit.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The audio clip has no samples or its absolute peak is zero, so it cannot be normalized.
    #[error("audio input is empty or silent")]
    EmptyOrSilentInput,

    /// The media bytes could not be decoded by the codec collaborator.
    #[error("decode error: {0}")]
    Decode(String),

    /// A decoded image could not be re-encoded for a size comparison.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MediaLabError {
    /// Build a [`MediaLabError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`MediaLabError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`MediaLabError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// True for conditions the presentation layer should report rather than treat as a bug.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::EmptyOrSilentInput | Self::Decode(_) | Self::Encode(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
