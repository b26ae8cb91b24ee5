use std::sync::Arc;

use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::domain::logger::Logger;
use crate::domain::session::model::{Credentials, User};
use crate::domain::session::use_cases::login::LoginUseCase;
use crate::domain::shared::request_state::{Dispatch, RequestState};

/// Snapshot of the session slice. The fulfilled payload is the user id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub status: RequestState<u64>,
}

#[derive(Default)]
struct Inner {
    state: SessionState,
    latest_request: u64,
}

/// Injectable holder of the authenticated user. Clones share the same state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<Inner>>,
    login: Arc<dyn LoginUseCase>,
    logger: Arc<dyn Logger>,
}

impl SessionStore {
    pub fn new(login: Arc<dyn LoginUseCase>, logger: Arc<dyn Logger>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
            login,
            logger,
        }
    }

    pub async fn snapshot(&self) -> SessionState {
        self.inner.read().await.state.clone()
    }

    pub async fn user(&self) -> Option<User> {
        self.inner.read().await.state.user.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.state.user.is_some()
    }

    /// Authenticates and stores the user. A failure keeps any previous user.
    /// Concurrent calls are not deduplicated.
    pub async fn login(&self, credentials: Credentials, token: &CancellationToken) -> Dispatch {
        let ticket = {
            let mut inner = self.inner.write().await;
            inner.latest_request += 1;
            inner.state.status = RequestState::Pending;
            inner.latest_request
        };

        let result = tokio::select! {
            biased;
            _ = token.cancelled() => None,
            result = self.login.execute(credentials) => Some(result),
        };

        let mut inner = self.inner.write().await;
        match result.filter(|_| !token.is_cancelled()) {
            None => {
                if inner.latest_request == ticket && inner.state.status.is_loading() {
                    inner.state.status = RequestState::Idle;
                }
                self.logger.debug("Login abandoned before completion");
                Dispatch::Cancelled
            }
            Some(Ok(user)) => {
                inner.state.status = RequestState::Fulfilled(user.id);
                inner.state.user = Some(user);
                Dispatch::Fulfilled
            }
            Some(Err(error)) => {
                self.logger.warn(&format!("Login failed: {}", error));
                inner.state.status = RequestState::Rejected(error);
                Dispatch::Rejected
            }
        }
    }

    /// Clears the user without contacting the server.
    pub async fn logout(&self) {
        let mut inner = self.inner.write().await;
        if let Some(user) = inner.state.user.take() {
            self.logger.info(&format!("User {} logged out", user.id));
        }
    }

    /// Clears the request status between screens; the user is kept.
    pub async fn reset(&self) {
        self.inner.write().await.state.status = RequestState::Idle;
    }
}
