use async_trait::async_trait;

use crate::domain::errors::RemoteError;
use crate::domain::session::model::{Credentials, User};

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, credentials: Credentials) -> Result<User, RemoteError>;
}
