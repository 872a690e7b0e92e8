//! Error types for animation configuration and lazy loading.

use thiserror::Error;

/// Error returned when an animation is constructed with invalid parameters.
///
/// Construction fails fast instead of producing a divide-by-zero progress
/// computation or an animation that never settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The transition duration was zero.
    #[error("animation duration must be greater than zero")]
    ZeroDuration,
    /// A start or end value was NaN or infinite.
    #[error("animation endpoints must be finite")]
    NonFinite,
}

/// Error stored when a deferred section factory fails.
///
/// The error is kept inside [`LoadState::Failed`](crate::LoadState::Failed)
/// until the consumer observes it, so it carries an owned message rather
/// than the failing source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("section failed to load: {message}")]
pub struct LoadError {
    message: String,
}

impl LoadError {
    /// Creates a load error from a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The underlying failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&str> for LoadError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for LoadError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        assert_eq!(
            ConfigError::ZeroDuration.to_string(),
            "animation duration must be greater than zero"
        );
        assert_eq!(
            ConfigError::NonFinite.to_string(),
            "animation endpoints must be finite"
        );
    }

    #[test]
    fn load_error_display_and_message() {
        let error = LoadError::new("connection reset");
        assert_eq!(error.message(), "connection reset");
        assert_eq!(error.to_string(), "section failed to load: connection reset");
    }

    #[test]
    fn load_error_from_str() {
        assert_eq!(LoadError::from("boom"), LoadError::new("boom"));
    }
}
