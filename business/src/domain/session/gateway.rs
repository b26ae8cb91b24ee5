use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::{Credentials, User};

/// Authentication endpoint of the remote API.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<User, GatewayError>;
}
