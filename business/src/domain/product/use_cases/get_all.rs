use async_trait::async_trait;

use crate::domain::errors::RemoteError;
use crate::domain::product::gateway::ListOptions;
use crate::domain::product::model::Product;

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self, options: ListOptions) -> Result<Vec<Product>, RemoteError>;
}
