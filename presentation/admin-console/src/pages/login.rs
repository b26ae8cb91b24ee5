use tokio_util::sync::{CancellationToken, DropGuard};

use business::application::store::session_store::SessionStore;
use business::domain::session::model::Credentials;
use business::domain::shared::request_state::Dispatch;

use crate::navigation::Navigation;

pub struct LoginPage {
    session: SessionStore,
    token: CancellationToken,
    _abort: DropGuard,
    pub username: String,
    pub password: String,
    error: Option<String>,
}

impl LoginPage {
    pub fn new(session: SessionStore) -> Self {
        let token = CancellationToken::new();
        Self {
            session,
            _abort: token.clone().drop_guard(),
            token,
            username: String::new(),
            password: String::new(),
            error: None,
        }
    }

    /// Already signed-in users go straight to the dashboard.
    pub async fn mount(&mut self) -> Option<Navigation> {
        self.session
            .is_authenticated()
            .await
            .then_some(Navigation::Dashboard)
    }

    /// Submits the form. On failure the entered values stay and `error()` is set.
    pub async fn submit(&mut self) -> Option<Navigation> {
        self.error = None;
        let credentials = Credentials::new(self.username.clone(), self.password.clone());

        match self.session.login(credentials, &self.token).await {
            Dispatch::Fulfilled => Some(Navigation::Dashboard),
            Dispatch::Rejected => {
                self.error = self
                    .session
                    .snapshot()
                    .await
                    .status
                    .message()
                    .map(str::to_string);
                None
            }
            Dispatch::Cancelled => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn is_submitting(&self) -> bool {
        self.session.snapshot().await.status.is_loading()
    }

    pub async fn unmount(self) {
        self.token.cancel();
        self.session.reset().await;
    }
}
