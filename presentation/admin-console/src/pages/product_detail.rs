use tokio_util::sync::{CancellationToken, DropGuard};

use business::application::store::catalog_store::CatalogStore;
use business::application::store::session_store::SessionStore;
use business::domain::product::model::Product;
use business::domain::shared::value_objects::ProductId;

use crate::navigation::Navigation;
use crate::pages::require_session;

pub struct ProductDetailPage {
    id: ProductId,
    session: SessionStore,
    catalog: CatalogStore,
    token: CancellationToken,
    _abort: DropGuard,
    confirming_delete: bool,
}

impl ProductDetailPage {
    pub fn new(id: ProductId, session: SessionStore, catalog: CatalogStore) -> Self {
        let token = CancellationToken::new();
        Self {
            id,
            session,
            catalog,
            _abort: token.clone().drop_guard(),
            token,
            confirming_delete: false,
        }
    }

    pub async fn mount(&mut self) -> Option<Navigation> {
        if let Some(redirect) = require_session(&self.session, Navigation::ProductDetail(self.id)).await {
            return Some(redirect);
        }
        self.catalog.get_product(self.id, &self.token).await;
        None
    }

    pub async fn is_loading(&self) -> bool {
        self.catalog.snapshot().await.status.is_loading()
    }

    /// The loaded product, once it matches the requested id.
    pub async fn product(&self) -> Option<Product> {
        self.catalog
            .snapshot()
            .await
            .product
            .filter(|product| product.id == self.id)
    }

    /// Price after discount of the loaded product.
    pub async fn discounted_price(&self) -> Option<f64> {
        self.product().await.map(|product| product.discounted_price())
    }

    pub fn edit(&self) -> Navigation {
        Navigation::EditProduct(self.id)
    }

    pub fn back(&self) -> Navigation {
        Navigation::Products
    }

    pub fn request_delete(&mut self) {
        self.confirming_delete = true;
    }

    pub fn cancel_delete(&mut self) {
        self.confirming_delete = false;
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.confirming_delete
    }

    /// Deletes after confirmation. Leaves for the list only when the delete
    /// succeeded; on failure the page stays and `error()` carries the message.
    pub async fn confirm_delete(&mut self) -> Option<Navigation> {
        if !std::mem::take(&mut self.confirming_delete) {
            return None;
        }
        self.catalog
            .delete_product(self.id, &self.token)
            .await
            .is_fulfilled()
            .then_some(Navigation::Products)
    }

    pub async fn error(&self) -> Option<String> {
        self.catalog
            .snapshot()
            .await
            .status
            .message()
            .map(str::to_string)
    }

    pub async fn unmount(self) {
        self.token.cancel();
        self.catalog.reset().await;
    }
}
