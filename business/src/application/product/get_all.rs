use std::sync::Arc;

use async_trait::async_trait;

use crate::application::remote::reject;
use crate::domain::errors::{Operation, RemoteError};
use crate::domain::logger::Logger;
use crate::domain::product::gateway::{ListOptions, ProductGateway};
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, options: ListOptions) -> Result<Vec<Product>, RemoteError> {
        self.logger
            .info(&format!("Fetching products (limit: {:?})", options.limit));
        let products = self
            .gateway
            .list(options)
            .await
            .map_err(|e| reject(self.logger.as_ref(), Operation::ListProducts, e))?;
        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}
