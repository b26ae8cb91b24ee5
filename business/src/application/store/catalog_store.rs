use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::domain::errors::RemoteError;
use crate::domain::logger::Logger;
use crate::domain::product::gateway::ListOptions;
use crate::domain::product::model::{Product, ProductDraft};
use crate::domain::product::use_cases::create::CreateProductUseCase;
use crate::domain::product::use_cases::delete::DeleteProductUseCase;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;
use crate::domain::product::use_cases::get_by_id::GetProductByIdUseCase;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::shared::request_state::{Dispatch, RequestState};
use crate::domain::shared::value_objects::ProductId;

/// What the latest fulfilled catalog request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOutcome {
    Listed(usize),
    Loaded(ProductId),
    Created(ProductId),
    Updated(ProductId),
    Deleted(ProductId),
}

/// Catalog slice: the fetched collection, the selected product and the
/// lifecycle of the latest request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    /// Server response order; creations are appended.
    pub products: Vec<Product>,
    pub product: Option<Product>,
    pub status: RequestState<CatalogOutcome>,
    /// Bumped on every change to `products`, including resets.
    pub revision: u64,
}

impl CatalogState {
    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.revision += 1;
    }

    pub fn append_product(&mut self, product: Product) {
        self.products.push(product);
        self.revision += 1;
    }

    /// Replaces the entry with the same id in place. Returns whether one matched.
    pub fn replace_product(&mut self, product: Product) -> bool {
        let Some(slot) = self.products.iter_mut().find(|p| p.id == product.id) else {
            return false;
        };
        *slot = product;
        self.revision += 1;
        true
    }

    /// Removes the entry with `id`. Returns whether one was present.
    pub fn remove_product(&mut self, id: ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        let removed = self.products.len() != before;
        if removed {
            self.revision += 1;
        }
        removed
    }
}

/// Gateway functions the catalog store dispatches to.
#[derive(Clone)]
pub struct CatalogUseCases {
    pub get_all: Arc<dyn GetAllProductsUseCase>,
    pub get_by_id: Arc<dyn GetProductByIdUseCase>,
    pub create: Arc<dyn CreateProductUseCase>,
    pub update: Arc<dyn UpdateProductUseCase>,
    pub delete: Arc<dyn DeleteProductUseCase>,
}

#[derive(Default)]
struct Inner {
    state: CatalogState,
    latest_request: u64,
}

/// Injectable catalog store. Every operation runs pending → fulfilled |
/// rejected and never returns an error; failures land in `status`.
///
/// The lock is released while the request is in flight and re-taken to commit,
/// so each mutation applies atomically.
#[derive(Clone)]
pub struct CatalogStore {
    inner: Arc<RwLock<Inner>>,
    use_cases: CatalogUseCases,
    logger: Arc<dyn Logger>,
}

impl CatalogStore {
    pub fn new(use_cases: CatalogUseCases, logger: Arc<dyn Logger>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
            use_cases,
            logger,
        }
    }

    pub async fn snapshot(&self) -> CatalogState {
        self.inner.read().await.state.clone()
    }

    pub async fn revision(&self) -> u64 {
        self.inner.read().await.state.revision
    }

    pub async fn list_products(&self, options: ListOptions, token: &CancellationToken) -> Dispatch {
        self.dispatch(
            token,
            self.use_cases.get_all.execute(options),
            |state, products: Vec<Product>| {
                let count = products.len();
                state.replace_products(products);
                CatalogOutcome::Listed(count)
            },
        )
        .await
    }

    pub async fn get_product(&self, id: ProductId, token: &CancellationToken) -> Dispatch {
        self.dispatch(
            token,
            self.use_cases.get_by_id.execute(id),
            |state, product: Product| {
                let id = product.id;
                state.product = Some(product);
                CatalogOutcome::Loaded(id)
            },
        )
        .await
    }

    pub async fn create_product(&self, draft: ProductDraft, token: &CancellationToken) -> Dispatch {
        self.dispatch(
            token,
            self.use_cases.create.execute(draft),
            |state, product: Product| {
                let id = product.id;
                state.append_product(product);
                CatalogOutcome::Created(id)
            },
        )
        .await
    }

    pub async fn update_product(
        &self,
        id: ProductId,
        draft: ProductDraft,
        token: &CancellationToken,
    ) -> Dispatch {
        let logger = self.logger.clone();
        self.dispatch(
            token,
            self.use_cases.update.execute(UpdateProductParams { id, draft }),
            move |state, product: Product| {
                let id = product.id;
                if state.product.as_ref().is_some_and(|selected| selected.id == id) {
                    state.product = Some(product.clone());
                }
                if !state.replace_product(product) {
                    logger.debug(&format!("Updated product {} is not in the loaded list", id));
                }
                CatalogOutcome::Updated(id)
            },
        )
        .await
    }

    pub async fn delete_product(&self, id: ProductId, token: &CancellationToken) -> Dispatch {
        self.dispatch(
            token,
            self.use_cases.delete.execute(id),
            |state, deleted: ProductId| {
                state.remove_product(deleted);
                if state.product.as_ref().is_some_and(|p| p.id == deleted) {
                    state.product = None;
                }
                CatalogOutcome::Deleted(deleted)
            },
        )
        .await
    }

    /// Back to the initial empty state. The revision keeps counting up.
    pub async fn reset(&self) {
        let mut inner = self.inner.write().await;
        let revision = inner.state.revision + 1;
        inner.state = CatalogState {
            revision,
            ..CatalogState::default()
        };
    }

    async fn dispatch<T, F, C>(&self, token: &CancellationToken, request: F, commit: C) -> Dispatch
    where
        F: Future<Output = Result<T, RemoteError>>,
        C: FnOnce(&mut CatalogState, T) -> CatalogOutcome,
    {
        let ticket = {
            let mut inner = self.inner.write().await;
            inner.latest_request += 1;
            inner.state.status = RequestState::Pending;
            inner.latest_request
        };

        let result = tokio::select! {
            biased;
            _ = token.cancelled() => None,
            result = request => Some(result),
        };

        let mut inner = self.inner.write().await;
        match result.filter(|_| !token.is_cancelled()) {
            None => {
                if inner.latest_request == ticket && inner.state.status.is_loading() {
                    inner.state.status = RequestState::Idle;
                }
                self.logger
                    .debug("Catalog request abandoned before completion; nothing committed");
                Dispatch::Cancelled
            }
            Some(Ok(value)) => {
                let outcome = commit(&mut inner.state, value);
                inner.state.status = RequestState::Fulfilled(outcome);
                Dispatch::Fulfilled
            }
            Some(Err(error)) => {
                self.logger
                    .warn(&format!("{} failed: {}", error.operation, error.message));
                inner.state.status = RequestState::Rejected(error);
                Dispatch::Rejected
            }
        }
    }
}
