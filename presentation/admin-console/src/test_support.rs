use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use tokio::sync::Notify;

use business::domain::errors::GatewayError;
use business::domain::logger::Logger;
use business::domain::product::gateway::{ListOptions, ProductGateway};
use business::domain::product::model::{Product, ProductDraft};
use business::domain::session::gateway::AuthGateway;
use business::domain::session::model::{Credentials, User};
use business::domain::shared::value_objects::ProductId;
use tokio_util::sync::CancellationToken;

use crate::setup::dependency_injection::DependencyContainer;

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

struct SilentLogger;

impl Logger for SilentLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}

pub fn container(auth: MockAuthApi, products: MockProductApi) -> DependencyContainer {
    DependencyContainer::from_gateways(Arc::new(auth), Arc::new(products), Arc::new(SilentLogger))
}

/// Container whose session is already signed in.
pub async fn signed_in(products: MockProductApi) -> DependencyContainer {
    signed_in_over(Arc::new(products)).await
}

pub async fn signed_in_over(products: Arc<dyn ProductGateway>) -> DependencyContainer {
    let mut auth = MockAuthApi::new();
    auth.expect_login().returning(|_| Ok(user()));
    let deps = DependencyContainer::from_gateways(Arc::new(auth), products, Arc::new(SilentLogger));
    deps.session
        .login(
            Credentials::new("emilys", "emilyspass"),
            &CancellationToken::new(),
        )
        .await;
    deps
}

pub fn user() -> User {
    User {
        id: 1,
        username: "emilys".to_string(),
        email: None,
        first_name: Some("Emily".to_string()),
        last_name: Some("Johnson".to_string()),
        image: None,
        access_token: None,
    }
}

pub fn product(id: u64, title: &str, price: f64, stock: u32, category: &str) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        description: format!("{} description", title),
        price,
        discount_percentage: 0.0,
        rating: 4.0,
        stock,
        brand: Some("Acme".to_string()),
        category: category.to_string(),
        thumbnail: "https://cdn.example.com/thumb.png".to_string(),
        images: vec![],
    }
}

pub fn catalog() -> Vec<Product> {
    vec![
        product(1, "Essence Mascara Lash Princess", 9.99, 5, "beauty"),
        product(2, "Eyeshadow Palette", 19.99, 44, "beauty"),
        product(3, "Apple", 1.99, 8, "groceries"),
        product(4, "Chanel Perfume", 129.99, 23, "fragrances"),
    ]
}

/// Product gateway whose listing stays in flight until `release` is notified.
pub struct HeldListing {
    pub release: Arc<Notify>,
}

#[async_trait]
impl ProductGateway for HeldListing {
    async fn list(&self, _options: ListOptions) -> Result<Vec<Product>, GatewayError> {
        self.release.notified().await;
        Ok(catalog())
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
