use tokio_util::sync::{CancellationToken, DropGuard};

use business::application::store::catalog_store::CatalogStore;
use business::application::store::session_store::SessionStore;
use business::domain::product::gateway::ListOptions;
use business::domain::product::model::Product;
use business::domain::product::value_objects::{CategoryFilter, ProductQuery, SortKey};
use business::domain::product::views;
use business::domain::shared::request_state::Dispatch;
use business::domain::shared::value_objects::ProductId;

use crate::navigation::Navigation;
use crate::pages::require_session;

/// Searchable, sortable product table with a confirm-gated delete.
pub struct ProductListPage {
    session: SessionStore,
    catalog: CatalogStore,
    options: ListOptions,
    token: CancellationToken,
    _abort: DropGuard,
    query: ProductQuery,
    pending_delete: Option<ProductId>,
    rows: Option<(u64, ProductQuery, Vec<Product>)>,
}

impl ProductListPage {
    pub fn new(session: SessionStore, catalog: CatalogStore, options: ListOptions) -> Self {
        let token = CancellationToken::new();
        Self {
            session,
            catalog,
            options,
            _abort: token.clone().drop_guard(),
            token,
            query: ProductQuery::default(),
            pending_delete: None,
            rows: None,
        }
    }

    pub async fn mount(&mut self) -> Option<Navigation> {
        if let Some(redirect) = require_session(&self.session, Navigation::Products).await {
            return Some(redirect);
        }
        self.catalog.list_products(self.options, &self.token).await;
        None
    }

    pub async fn is_loading(&self) -> bool {
        self.catalog.snapshot().await.status.is_loading()
    }

    pub fn query(&self) -> &ProductQuery {
        &self.query
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.search = text.into();
    }

    pub fn select_category(&mut self, selection: &str) {
        self.query.category = CategoryFilter::from_selection(selection);
    }

    /// Current category selector value, `"all"` when unfiltered.
    pub fn selected_category(&self) -> &str {
        self.query.category.as_selection()
    }

    pub fn sort_by(&mut self, key: SortKey) {
        self.query.sort = self.query.sort.request(key);
    }

    pub fn sort_indicator(&self, key: SortKey) -> Option<&'static str> {
        self.query.sort.indicator(key)
    }

    /// Category selector options, `"all"` first.
    pub async fn categories(&self) -> Vec<String> {
        views::category_options(&self.catalog.snapshot().await.products)
    }

    /// Visible rows, recomputed only when the products or the query changed.
    pub async fn rows(&mut self) -> Vec<Product> {
        let state = self.catalog.snapshot().await;
        if let Some((revision, query, rows)) = &self.rows
            && *revision == state.revision
            && *query == self.query
        {
            return rows.clone();
        }

        let rows = views::filter_and_sort(&state.products, &self.query);
        self.rows = Some((state.revision, self.query.clone(), rows.clone()));
        rows
    }

    pub fn view_detail(&self, id: ProductId) -> Navigation {
        Navigation::ProductDetail(id)
    }

    pub fn edit(&self, id: ProductId) -> Navigation {
        Navigation::EditProduct(id)
    }

    pub fn add(&self) -> Navigation {
        Navigation::NewProduct
    }

    pub fn request_delete(&mut self, id: ProductId) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn pending_delete(&self) -> Option<ProductId> {
        self.pending_delete
    }

    /// Deletes the product awaiting confirmation. Nothing happens when no
    /// delete was requested.
    pub async fn confirm_delete(&mut self) -> Dispatch {
        let Some(id) = self.pending_delete.take() else {
            return Dispatch::Cancelled;
        };
        self.catalog.delete_product(id, &self.token).await
    }

    /// Message of the latest failed request, fetch or delete.
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
