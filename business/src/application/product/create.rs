use std::sync::Arc;

use async_trait::async_trait;

use crate::application::remote::reject;
use crate::domain::errors::{Operation, RemoteError};
use crate::domain::logger::Logger;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::{Product, ProductDraft};
use crate::domain::product::use_cases::create::CreateProductUseCase;

pub struct CreateProductUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, draft: ProductDraft) -> Result<Product, RemoteError> {
        self.logger
            .info(&format!("Creating product: {}", draft.title));
        let created = self
            .gateway
            .create(&draft)
            .await
            .map_err(|e| reject(self.logger.as_ref(), Operation::CreateProduct, e))?;
        self.logger
            .info(&format!("Product created: {}", created.id));
        Ok(created)
    }
}
