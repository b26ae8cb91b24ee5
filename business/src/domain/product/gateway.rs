use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::shared::value_objects::ProductId;

use super::model::{Product, ProductDraft};

/// Options for fetching the product collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Maximum number of products to return; `None` leaves it to the server.
    pub limit: Option<u32>,
}

impl ListOptions {
    pub fn with_limit(limit: u32) -> Self {
        Self { limit: Some(limit) }
    }
}

/// Product CRUD endpoints of the remote API.
#[async_trait]
pub trait ProductGateway: Send + Sync {
    async fn list(&self, options: ListOptions) -> Result<Vec<Product>, GatewayError>;
    async fn get_by_id(&self, id: ProductId) -> Result<Product, GatewayError>;
    async fn create(&self, draft: &ProductDraft) -> Result<Product, GatewayError>;
    async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<Product, GatewayError>;
    /// Returns the identifier of the removed record.
    async fn delete(&self, id: ProductId) -> Result<ProductId, GatewayError>;
}
