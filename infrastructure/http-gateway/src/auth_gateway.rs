use async_trait::async_trait;

use business::domain::errors::GatewayError;
use business::domain::session::gateway::AuthGateway;
use business::domain::session::model::{Credentials, User};

use crate::client::ApiClient;
use crate::dto::{LoginRequestDto, LoginResponseDto};
use crate::response::read_json;

pub struct AuthGatewayHttp {
    client: ApiClient,
}

impl AuthGatewayHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for AuthGatewayHttp {
    async fn login(&self, credentials: &Credentials) -> Result<User, GatewayError> {
        let response = self
            .client
            .client
            .post(self.client.login_url())
            .json(&LoginRequestDto::from(credentials))
            .send()
            .await;

        let dto: LoginResponseDto = read_json(response).await?;
        Ok(dto.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn should_report_transport_error_when_backend_unreachable() {
        let gateway = AuthGatewayHttp::new(ApiClient::new(
            "http://127.0.0.1:9",
            Duration::from_secs(2),
        ));

        let result = gateway
            .login(&Credentials::new("emilys", "emilyspass"))
            .await;

        assert!(matches!(result, Err(GatewayError::Transport(_))));
    }
}
