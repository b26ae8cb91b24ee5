use tokio_util::sync::{CancellationToken, DropGuard};

use business::application::store::catalog_store::CatalogStore;
use business::application::store::session_store::SessionStore;
use business::domain::product::form::{FieldError, FormField, ProductForm};
use business::domain::shared::request_state::Dispatch;
use business::domain::shared::value_objects::ProductId;

use crate::navigation::Navigation;
use crate::pages::require_session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ProductId),
}

/// Add and edit screen. Field errors block submission; a remote failure is
/// shown inline and the entered values stay.
pub struct ProductFormPage {
    mode: FormMode,
    session: SessionStore,
    catalog: CatalogStore,
    token: CancellationToken,
    _abort: DropGuard,
    form: ProductForm,
    field_errors: Vec<FieldError>,
    error: Option<String>,
}

impl ProductFormPage {
    pub fn new(mode: FormMode, session: SessionStore, catalog: CatalogStore) -> Self {
        let token = CancellationToken::new();
        Self {
            mode,
            session,
            catalog,
            _abort: token.clone().drop_guard(),
            token,
            form: ProductForm::default(),
            field_errors: Vec::new(),
            error: None,
        }
    }

    /// In edit mode loads the product and prefills the form with it.
    pub async fn mount(&mut self) -> Option<Navigation> {
        if let Some(redirect) = require_session(&self.session, self.screen()).await {
            return Some(redirect);
        }
        let FormMode::Edit(id) = self.mode else {
            return None;
        };

        match self.catalog.get_product(id, &self.token).await {
            Dispatch::Fulfilled => {
                if let Some(product) = self.catalog.snapshot().await.product {
                    self.form = ProductForm::from_product(&product);
                }
            }
            Dispatch::Rejected => self.error = self.remote_message().await,
            Dispatch::Cancelled => {}
        }
        None
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn screen(&self) -> Navigation {
        match self.mode {
            FormMode::Create => Navigation::NewProduct,
            FormMode::Edit(id) => Navigation::EditProduct(id),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add New Product",
            FormMode::Edit(_) => "Edit Product",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Create Product",
            FormMode::Edit(_) => "Update Product",
        }
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Thumbnail and image URLs that parse, for the preview strip.
    pub fn image_previews(&self) -> Vec<&str> {
        self.form.image_previews()
    }

    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    pub fn field_error(&self, field: FormField) -> Option<&FieldError> {
        self.field_errors.iter().find(|error| error.field() == field)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn is_submitting(&self) -> bool {
        self.catalog.snapshot().await.status.is_loading()
    }

    /// Validates, then creates or updates. Returns the list screen on success.
    pub async fn submit(&mut self) -> Option<Navigation> {
        self.error = None;
        let draft = match self.form.to_draft() {
            Ok(draft) => draft,
            Err(errors) => {
                self.field_errors = errors;
                return None;
            }
        };
        self.field_errors.clear();

        let dispatch = match self.mode {
            FormMode::Create => self.catalog.create_product(draft, &self.token).await,
            FormMode::Edit(id) => self.catalog.update_product(id, draft, &self.token).await,
        };

        match dispatch {
            Dispatch::Fulfilled => Some(Navigation::Products),
            Dispatch::Rejected => {
                self.error = self.remote_message().await;
                None
            }
            Dispatch::Cancelled => None,
        }
    }

    pub fn cancel(&self) -> Navigation {
        Navigation::Products
    }

    async fn remote_message(&self) -> Option<String> {
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
