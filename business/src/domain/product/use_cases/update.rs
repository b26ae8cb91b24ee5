use async_trait::async_trait;

use crate::domain::errors::RemoteError;
use crate::domain::product::model::{Product, ProductDraft};
use crate::domain::shared::value_objects::ProductId;

pub struct UpdateProductParams {
    pub id: ProductId,
    pub draft: ProductDraft,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, RemoteError>;
}
