use async_trait::async_trait;

use crate::domain::errors::RemoteError;
use crate::domain::shared::value_objects::ProductId;

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    /// Resolves to the identifier the server reports as removed.
    async fn execute(&self, id: ProductId) -> Result<ProductId, RemoteError>;
}
