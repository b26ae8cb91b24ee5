use std::sync::Arc;

use async_trait::async_trait;

use crate::application::remote::reject;
use crate::domain::errors::{Operation, RemoteError};
use crate::domain::logger::Logger;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, RemoteError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));
        let updated = self
            .gateway
            .update(params.id, &params.draft)
            .await
            .map_err(|e| reject(self.logger.as_ref(), Operation::UpdateProduct, e))?;
        if updated.id != params.id {
            self.logger.warn(&format!(
                "Update of product {} answered with product {}",
                params.id, updated.id
            ));
        }
        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}
