use async_trait::async_trait;

use crate::domain::errors::RemoteError;
use crate::domain::product::model::{Product, ProductDraft};

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, draft: ProductDraft) -> Result<Product, RemoteError>;
}
