use crate::domain::errors::RemoteError;

/// Lifecycle of the latest request a store dispatched.
///
/// Replaces the loading/error/success boolean trio: each variant is one phase,
/// so no two flags can be true at once.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState<T> {
    #[default]
    Idle,
    Pending,
    Fulfilled(T),
    Rejected(RemoteError),
}

impl<T> RequestState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, RequestState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RequestState::Fulfilled(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, RequestState::Rejected(_))
    }

    /// Error message, present only in the rejected phase.
    pub fn message(&self) -> Option<&str> {
        match self {
            RequestState::Rejected(error) => Some(error.message.as_str()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&RemoteError> {
        match self {
            RequestState::Rejected(error) => Some(error),
            _ => None,
        }
    }

    pub fn fulfilled(&self) -> Option<&T> {
        match self {
            RequestState::Fulfilled(value) => Some(value),
            _ => None,
        }
    }
}

/// What a store operation did with its request, for page controller flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Fulfilled,
    Rejected,
    /// The caller's token was cancelled; nothing was committed.
    Cancelled,
}

impl Dispatch {
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, Dispatch::Fulfilled)
    }
}
