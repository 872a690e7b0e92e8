//! The lazy-load state machine.

use crate::error::LoadError;

/// Lifecycle of a lazily produced piece of content.
///
/// Transitions are forward-only: `NotRequested → Loading`, then
/// `Loading → Ready` or `Loading → Failed`. `Failed` is terminal; retry
/// policy belongs to the consumer, not the loader.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState<T> {
    /// No render has been requested yet; the factory has not run.
    #[default]
    NotRequested,
    /// The factory has been invoked and has not settled yet.
    Loading,
    /// The factory produced the content.
    Ready(T),
    /// The factory failed; the error is kept for the consumer.
    Failed(LoadError),
}

impl<T> LoadState<T> {
    /// `true` once a render has been requested.
    #[must_use]
    pub const fn is_requested(&self) -> bool {
        !matches!(self, Self::NotRequested)
    }

    /// `true` while the factory is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// `true` when content is available.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// `true` when the factory settled, successfully or not.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Ready(_) | Self::Failed(_))
    }

    /// The content, if ready.
    #[must_use]
    pub const fn as_ready(&self) -> Option<&T> {
        match self {
            Self::Ready(content) => Some(content),
            _ => None,
        }
    }

    /// The stored failure, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&LoadError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}
