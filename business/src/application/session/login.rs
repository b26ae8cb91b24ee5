use std::sync::Arc;

use async_trait::async_trait;

use crate::application::remote::reject;
use crate::domain::errors::{Operation, RemoteError};
use crate::domain::logger::Logger;
use crate::domain::session::gateway::AuthGateway;
use crate::domain::session::model::{Credentials, User};
use crate::domain::session::use_cases::login::LoginUseCase;

pub struct LoginUseCaseImpl {
    pub gateway: Arc<dyn AuthGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, credentials: Credentials) -> Result<User, RemoteError> {
        self.logger
            .info(&format!("Logging in as {}", credentials.username));

        let user = self
            .gateway
            .login(&credentials)
            .await
            .map_err(|e| reject(self.logger.as_ref(), Operation::Login, e))?;

        self.logger.info(&format!("Logged in user {}", user.id));
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::GatewayError;
    use crate::test_support::{MockAuthApi, mock_logger, user};
    use mockall::predicate::eq;

    #[tokio::test]
    async fn should_return_user_when_credentials_accepted() {
        let mut gateway = MockAuthApi::new();
        gateway
            .expect_login()
            .with(eq(Credentials::new("emilys", "emilyspass")))
            .times(1)
            .returning(|_| Ok(user()));

        let use_case = LoginUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let user = use_case
            .execute(Credentials::new("emilys", "emilyspass"))
            .await
            .unwrap();

        assert_eq!(user.username, "emilys");
    }

    #[tokio::test]
    async fn should_surface_server_message_when_credentials_rejected() {
        let mut gateway = MockAuthApi::new();
        gateway.expect_login().returning(|_| {
            Err(GatewayError::api(
                400,
                Some("Invalid credentials".to_string()),
            ))
        });

        let use_case = LoginUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let error = use_case
            .execute(Credentials::new("emilys", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(error, RemoteError::new(Operation::Login, "Invalid credentials"));
    }
}
