use std::sync::Arc;

use async_trait::async_trait;

use crate::application::remote::reject;
use crate::domain::errors::{Operation, RemoteError};
use crate::domain::logger::Logger;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::get_by_id::GetProductByIdUseCase;
use crate::domain::shared::value_objects::ProductId;

pub struct GetProductByIdUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, id: ProductId) -> Result<Product, RemoteError> {
        self.logger.info(&format!("Fetching product: {}", id));
        self.gateway
            .get_by_id(id)
            .await
            .map_err(|e| reject(self.logger.as_ref(), Operation::GetProduct, e))
    }
}
