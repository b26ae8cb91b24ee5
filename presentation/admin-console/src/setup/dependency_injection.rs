use std::sync::Arc;

use logger::TracingLogger;

use http_gateway::auth_gateway::AuthGatewayHttp;
use http_gateway::client::ApiClient;
use http_gateway::product_gateway::ProductGatewayHttp;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::session::login::LoginUseCaseImpl;
use business::application::store::catalog_store::{CatalogStore, CatalogUseCases};
use business::application::store::session_store::SessionStore;
use business::domain::logger::Logger;
use business::domain::product::gateway::ProductGateway;
use business::domain::session::gateway::AuthGateway;

use crate::config::api_config::ApiConfig;

/// Stores shared by every page of the console.
#[derive(Clone)]
pub struct DependencyContainer {
    pub session: SessionStore,
    pub catalog: CatalogStore,
}

impl DependencyContainer {
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            anyhow::bail!("API_BASE_URL must be an http(s) URL, got {}", config.base_url);
        }

        let client = ApiClient::new(&config.base_url, config.timeout);
        let auth_gateway = Arc::new(AuthGatewayHttp::new(client.clone()));
        let product_gateway = Arc::new(ProductGatewayHttp::new(client));

        Ok(Self::from_gateways(
            auth_gateway,
            product_gateway,
            Arc::new(TracingLogger),
        ))
    }

    /// Wires use cases and stores over any gateway implementation.
    pub fn from_gateways(
        auth_gateway: Arc<dyn AuthGateway>,
        product_gateway: Arc<dyn ProductGateway>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        // Session
        let login_use_case = Arc::new(LoginUseCaseImpl {
            gateway: auth_gateway,
            logger: logger.clone(),
        });
        let session = SessionStore::new(login_use_case, logger.clone());

        // Catalog
        let use_cases = CatalogUseCases {
            get_all: Arc::new(GetAllProductsUseCaseImpl {
                gateway: product_gateway.clone(),
                logger: logger.clone(),
            }),
            get_by_id: Arc::new(GetProductByIdUseCaseImpl {
                gateway: product_gateway.clone(),
                logger: logger.clone(),
            }),
            create: Arc::new(CreateProductUseCaseImpl {
                gateway: product_gateway.clone(),
                logger: logger.clone(),
            }),
            update: Arc::new(UpdateProductUseCaseImpl {
                gateway: product_gateway.clone(),
                logger: logger.clone(),
            }),
            delete: Arc::new(DeleteProductUseCaseImpl {
                gateway: product_gateway,
                logger: logger.clone(),
            }),
        };
        let catalog = CatalogStore::new(use_cases, logger);

        Self { session, catalog }
    }
}
