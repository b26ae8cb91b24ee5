use tracing::{info, warn};

use business::domain::product::value_objects::SortKey;

use crate::config::app_config::AppConfig;
use crate::navigation::Navigation;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::product_detail::ProductDetailPage;
use crate::pages::product_list::ProductListPage;
use crate::setup::dependency_injection::DependencyContainer;

/// Headless console session: signs in, reports the dashboard, opens the most
/// recent product, lists the catalog sorted by stock and signs out again.
pub struct Runner;

impl Runner {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        info!("Using catalog API at {}", config.api.base_url);

        let mut login = LoginPage::new(container.session.clone());
        login.username = config.console.credentials.username.clone();
        login.password = config.console.credentials.password.clone();
        if login.submit().await != Some(Navigation::Dashboard) {
            let reason = login.error().unwrap_or("login cancelled").to_string();
            anyhow::bail!("Login as {} failed: {}", login.username, reason);
        }

        let mut dashboard = DashboardPage::new(
            container.session.clone(),
            container.catalog.clone(),
            config.console.list_options,
        );
        if let Some(redirect) = dashboard.mount().await {
            anyhow::bail!("Dashboard redirected to {}", redirect.path());
        }
        if let Some(greeting) = dashboard.greeting().await {
            info!("{}", greeting);
        }
        let view = dashboard.view().await;
        info!(
            "Catalog: {} products, {} categories, {} brands, total value {}, {} low on stock",
            view.stats.total_products,
            view.stats.total_categories,
            view.stats.total_brands,
            view.stats.total_value,
            view.stats.low_stock_products,
        );
        for point in &view.categories {
            info!("  {}: {}", point.label, point.value);
        }
        for product in &view.recent {
            info!("  recently added: {} {}", product.id, product.title);
        }

        if let Some(Navigation::ProductDetail(id)) =
            view.recent.first().map(|product| dashboard.open(product.id))
        {
            let mut detail =
                ProductDetailPage::new(id, container.session.clone(), container.catalog.clone());
            detail.mount().await;
            match (detail.product().await, detail.discounted_price().await) {
                (Some(product), Some(discounted)) => info!(
                    "{} by {}: {:.2} ({:.2} after {}% off), rating {}",
                    product.title,
                    product.brand.as_deref().unwrap_or("unknown brand"),
                    product.price,
                    discounted,
                    product.discount_percentage,
                    product.rating,
                ),
                _ => warn!(
                    "Product {} unavailable: {}",
                    id,
                    detail.error().await.unwrap_or_default()
                ),
            }
            detail.unmount().await;
        }
        dashboard.unmount().await;

        let mut list = ProductListPage::new(
            container.session.clone(),
            container.catalog.clone(),
            config.console.list_options,
        );
        list.mount().await;
        if let Some(error) = list.error().await {
            warn!("Product list failed: {}", error);
        }
        list.sort_by(SortKey::Stock);
        info!("Products in category {} by stock:", list.selected_category());
        for product in list.rows().await {
            info!(
                "  #{} {} ({}) stock {} price {:.2}",
                product.id, product.title, product.category, product.stock, product.price
            );
        }

        let next = crate::pages::logout(&container.session, &container.catalog).await;
        list.unmount().await;
        info!("Signed out, next screen {}", next.path());
        Ok(())
    }
}
