use std::sync::Arc;

use async_trait::async_trait;

use crate::application::remote::reject;
use crate::domain::errors::{Operation, RemoteError};
use crate::domain::logger::Logger;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::use_cases::delete::DeleteProductUseCase;
use crate::domain::shared::value_objects::ProductId;

pub struct DeleteProductUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, id: ProductId) -> Result<ProductId, RemoteError> {
        self.logger.info(&format!("Deleting product: {}", id));
        let deleted = self
            .gateway
            .delete(id)
            .await
            .map_err(|e| reject(self.logger.as_ref(), Operation::DeleteProduct, e))?;
        self.logger.info(&format!("Product deleted: {}", deleted));
        Ok(deleted)
    }
}
