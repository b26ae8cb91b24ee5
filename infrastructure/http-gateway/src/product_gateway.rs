use async_trait::async_trait;

use business::domain::errors::GatewayError;
use business::domain::product::gateway::{ListOptions, ProductGateway};
use business::domain::product::model::{Product, ProductDraft};
use business::domain::shared::value_objects::ProductId;

use crate::client::ApiClient;
use crate::dto::{DeletedProductDto, ProductDto, ProductEnvelope, ProductListDto, ProductPayloadDto};
use crate::response::read_json;

pub struct ProductGatewayHttp {
    client: ApiClient,
}

impl ProductGatewayHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductGateway for ProductGatewayHttp {
    async fn list(&self, options: ListOptions) -> Result<Vec<Product>, GatewayError> {
        let mut request = self.client.client.get(self.client.products_url());
        if let Some(limit) = options.limit {
            request = request.query(&[("limit", limit)]);
        }

        let data: ProductListDto = read_json(request.send().await).await?;
        Ok(data.products.into_iter().map(Product::from).collect())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, GatewayError> {
        let response = self
            .client
            .client
            .get(self.client.product_url(id))
            .send()
            .await;

        let envelope: ProductEnvelope = read_json(response).await?;
        Ok(envelope.into())
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, GatewayError> {
        let response = self
            .client
            .client
            .post(self.client.add_product_url())
            .json(&ProductPayloadDto::from(draft))
            .send()
            .await;

        let created: ProductDto = read_json(response).await?;
        Ok(created.into())
    }

    async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<Product, GatewayError> {
        let response = self
            .client
            .client
            .put(self.client.product_url(id))
            .json(&ProductPayloadDto::from(draft))
            .send()
            .await;

        let updated: ProductDto = read_json(response).await?;
        Ok(updated.into())
    }

    async fn delete(&self, id: ProductId) -> Result<ProductId, GatewayError> {
        let response = self
            .client
            .client
            .delete(self.client.product_url(id))
            .send()
            .await;

        let deleted: DeletedProductDto = read_json(response).await?;
        Ok(ProductId::new(deleted.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn unreachable_gateway() -> ProductGatewayHttp {
        ProductGatewayHttp::new(ApiClient::new("http://127.0.0.1:9", Duration::from_secs(2)))
    }

    #[tokio::test]
    async fn should_report_transport_error_for_every_operation_when_offline() {
        let gateway = unreachable_gateway();
        let draft = ProductDraft {
            title: "X".to_string(),
            description: String::new(),
            price: 0.0,
            discount_percentage: 0.0,
            rating: 0.0,
            stock: 0,
            brand: None,
            category: String::new(),
            thumbnail: String::new(),
            images: vec![],
        };

        assert!(matches!(
            gateway.list(ListOptions::with_limit(5)).await,
            Err(GatewayError::Transport(_))
        ));
        assert!(matches!(
            gateway.get_by_id(ProductId::new(5)).await,
            Err(GatewayError::Transport(_))
        ));
        assert!(matches!(
            gateway.create(&draft).await,
            Err(GatewayError::Transport(_))
        ));
        assert!(matches!(
            gateway.update(ProductId::new(5), &draft).await,
            Err(GatewayError::Transport(_))
        ));
        assert!(matches!(
            gateway.delete(ProductId::new(5)).await,
            Err(GatewayError::Transport(_))
        ));
    }
}
