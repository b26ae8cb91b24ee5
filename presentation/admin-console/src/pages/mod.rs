//! One controller per screen. Each controller owns a cancellation token that
//! is cancelled when the page is unmounted or dropped, so a request still in
//! flight for an abandoned screen never writes to the stores.

pub mod dashboard;
pub mod login;
pub mod product_detail;
pub mod product_form;
pub mod product_list;

use business::application::store::catalog_store::CatalogStore;
use business::application::store::session_store::SessionStore;

use crate::navigation::Navigation;

/// Redirect to login when `screen` needs a session and there is no
/// authenticated user.
pub(crate) async fn require_session(
    session: &SessionStore,
    screen: Navigation,
) -> Option<Navigation> {
    if !screen.requires_session() || session.is_authenticated().await {
        None
    } else {
        Some(Navigation::Login)
    }
}

/// Ends the session: clears the user and empties the catalog.
pub async fn logout(session: &SessionStore, catalog: &CatalogStore) -> Navigation {
    session.logout().await;
    catalog.reset().await;
    Navigation::Login
}
