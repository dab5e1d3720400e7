/// Convenience result type used across the crate.
pub type EdubuilderResult<T> = Result<T, EdubuilderError>;

/// Top-level error taxonomy used by engine APIs.
///
/// In-memory playback is total and never constructs one of these; errors come
/// from load-time validation, serialization, and the external store.
#[derive(thiserror::Error, Debug)]
pub enum EdubuilderError {
    /// Invalid user-provided or authored sequence data.
    #[error("validation error: {0}")]
    Validation(String),

    /// An operation required an authenticated session and none was present.
    #[error("not authenticated")]
    NotAuthenticated,

    /// A persisted-sequence store operation failed. Propagated to the caller
    /// unchanged; there is no local recovery or retry.
    #[error("store error: {0}")]
    Store(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EdubuilderError {
    /// Build a [`EdubuilderError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`EdubuilderError::Store`] value.
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Build a [`EdubuilderError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for EdubuilderError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
