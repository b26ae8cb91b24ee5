//! Mocks and fixtures shared by the unit tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use mockall::mock;
use tokio::sync::Notify;

use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::product::gateway::{ListOptions, ProductGateway};
use crate::domain::product::model::{Product, ProductDraft};
use crate::domain::session::gateway::AuthGateway;
use crate::domain::session::model::{Credentials, User};
use crate::domain::shared::value_objects::ProductId;

mock! {
    pub ProductApi {}

    #[async_trait]
    impl ProductGateway for ProductApi {
        async fn list(&self, options: ListOptions) -> Result<Vec<Product>, GatewayError>;
        async fn get_by_id(&self, id: ProductId) -> Result<Product, GatewayError>;
        async fn create(&self, draft: &ProductDraft) -> Result<Product, GatewayError>;
        async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<Product, GatewayError>;
        async fn delete(&self, id: ProductId) -> Result<ProductId, GatewayError>;
    }
}

mock! {
    pub AuthApi {}

    #[async_trait]
    impl AuthGateway for AuthApi {
        async fn login(&self, credentials: &Credentials) -> Result<User, GatewayError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn draft(title: &str, price: f64, stock: u32, category: &str) -> ProductDraft {
    ProductDraft {
        title: title.to_string(),
        description: format!("{} description", title),
        price,
        discount_percentage: 0.0,
        rating: 4.0,
        stock,
        brand: None,
        category: category.to_string(),
        thumbnail: format!("https://cdn.example.com/{}.png", title),
        images: vec![],
    }
}

pub fn product(id: u64, title: &str, price: f64, stock: u32, category: &str) -> Product {
    Product::from_draft(ProductId::new(id), draft(title, price, stock, category))
}

pub fn user() -> User {
    User {
        id: 1,
        username: "emilys".to_string(),
        email: Some("emily.johnson@x.dummyjson.com".to_string()),
        first_name: Some("Emily".to_string()),
        last_name: Some("Johnson".to_string()),
        image: None,
        access_token: Some("access-token".to_string()),
    }
}

/// Holds a fake request open until `open()` is called.
#[derive(Clone, Default)]
pub struct Gate {
    release: Arc<Notify>,
    finished: Arc<AtomicBool>,
}

impl Gate {
    pub fn open(&self) {
        self.release.notify_one();
    }

    /// Whether the gated request has returned its response.
    pub fn finished(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }

    async fn pass(&self) {
        self.release.notified().await;
        self.finished.store(true, Ordering::SeqCst);
    }
}

/// Product gateway whose `list` waits on a [`Gate`].
pub struct GatedProductApi {
    pub gate: Gate,
    pub products: Vec<Product>,
}

#[async_trait]
impl ProductGateway for GatedProductApi {
    async fn list(&self, _options: ListOptions) -> Result<Vec<Product>, GatewayError> {
        self.gate.pass().await;
        Ok(self.products.clone())
    }

    async fn get_by_id(&self, _id: ProductId) -> Result<Product, GatewayError> {
        Err(GatewayError::transport("not served"))
    }

    async fn create(&self, _draft: &ProductDraft) -> Result<Product, GatewayError> {
        Err(GatewayError::transport("not served"))
    }

    async fn update(&self, _id: ProductId, _draft: &ProductDraft) -> Result<Product, GatewayError> {
        Err(GatewayError::transport("not served"))
    }

    async fn delete(&self, _id: ProductId) -> Result<ProductId, GatewayError> {
        Err(GatewayError::transport("not served"))
    }
}

/// Auth gateway whose `login` waits on a [`Gate`].
pub struct GatedAuthApi {
    pub gate: Gate,
}

#[async_trait]
impl AuthGateway for GatedAuthApi {
    async fn login(&self, _credentials: &Credentials) -> Result<User, GatewayError> {
        self.gate.pass().await;
        Ok(user())
    }
}
