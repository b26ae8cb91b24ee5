use tokio_util::sync::{CancellationToken, DropGuard};

use business::application::store::catalog_store::CatalogStore;
use business::application::store::session_store::SessionStore;
use business::domain::product::gateway::ListOptions;
use business::domain::product::model::Product;
use business::domain::product::views::{self, CatalogStats, RECENT_PRODUCTS_LEN, SeriesPoint};
use business::domain::shared::value_objects::ProductId;

use crate::navigation::Navigation;
use crate::pages::require_session;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub stats: CatalogStats,
    pub categories: Vec<SeriesPoint>,
    pub top_prices: Vec<SeriesPoint>,
    pub low_stock: Vec<SeriesPoint>,
    /// Recently added panel: the first products in server order.
    pub recent: Vec<Product>,
}

pub struct DashboardPage {
    session: SessionStore,
    catalog: CatalogStore,
    options: ListOptions,
    token: CancellationToken,
    _abort: DropGuard,
    cache: Option<(u64, DashboardView)>,
}

impl DashboardPage {
    pub fn new(session: SessionStore, catalog: CatalogStore, options: ListOptions) -> Self {
        let token = CancellationToken::new();
        Self {
            session,
            catalog,
            options,
            _abort: token.clone().drop_guard(),
            token,
            cache: None,
        }
    }

    pub async fn mount(&mut self) -> Option<Navigation> {
        if let Some(redirect) = require_session(&self.session, Navigation::Dashboard).await {
            return Some(redirect);
        }
        self.catalog.list_products(self.options, &self.token).await;
        None
    }

    pub async fn is_loading(&self) -> bool {
        self.catalog.snapshot().await.status.is_loading()
    }

    pub async fn greeting(&self) -> Option<String> {
        self.session
            .user()
            .await
            .map(|user| format!("Welcome, {}", user.display_name()))
    }

    /// Recomputed only when the product collection changed.
    pub async fn view(&mut self) -> DashboardView {
        let state = self.catalog.snapshot().await;
        if let Some((revision, view)) = &self.cache
            && *revision == state.revision
        {
            return view.clone();
        }

        let view = DashboardView {
            stats: views::stats(&state.products),
            categories: views::category_distribution(&state.products),
            top_prices: views::price_series(&state.products),
            low_stock: views::stock_series(&state.products),
            recent: views::recent(&state.products, RECENT_PRODUCTS_LEN),
        };
        self.cache = Some((state.revision, view.clone()));
        view
    }

    /// Entry of the recently added panel.
    pub fn open(&self, id: ProductId) -> Navigation {
        Navigation::ProductDetail(id)
    }

    pub async fn logout(self) -> Navigation {
        self.token.cancel();
        crate::pages::logout(&self.session, &self.catalog).await
    }

    pub async fn unmount(self) {
        self.token.cancel();
        self.catalog.reset().await;
    }
}
