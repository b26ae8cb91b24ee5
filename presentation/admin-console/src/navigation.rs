use business::domain::shared::value_objects::ProductId;

/// Screens of the console, as returned by page controllers after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Login,
    Dashboard,
    Products,
    ProductDetail(ProductId),
    NewProduct,
    EditProduct(ProductId),
    NotFound,
}

impl Navigation {
    pub fn path(&self) -> String {
        match self {
            Navigation::Login => "/login".to_string(),
            Navigation::Dashboard => "/".to_string(),
            Navigation::Products => "/products".to_string(),
            Navigation::ProductDetail(id) => format!("/products/{}", id),
            Navigation::NewProduct => "/products/add".to_string(),
            Navigation::EditProduct(id) => format!("/products/edit/{}", id),
            Navigation::NotFound => "/404".to_string(),
        }
    }

    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        match segments.as_slice() {
            ["login"] => Navigation::Login,
            [""] => Navigation::Dashboard,
            ["products"] => Navigation::Products,
            ["products", "add"] => Navigation::NewProduct,
            ["products", "edit", id] => id
                .parse()
                .map(Navigation::EditProduct)
                .unwrap_or(Navigation::NotFound),
            ["products", id] => id
                .parse()
                .map(Navigation::ProductDetail)
                .unwrap_or(Navigation::NotFound),
            _ => Navigation::NotFound,
        }
    }

    /// Every screen except login and the 404 page needs a session.
    pub fn requires_session(&self) -> bool {
        !matches!(self, Navigation::Login | Navigation::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_resolve_route_table() {
        assert_eq!(Navigation::from_path("/login"), Navigation::Login);
        assert_eq!(Navigation::from_path("/"), Navigation::Dashboard);
        assert_eq!(Navigation::from_path("/products"), Navigation::Products);
        assert_eq!(Navigation::from_path("/products/add"), Navigation::NewProduct);
        assert_eq!(
            Navigation::from_path("/products/5"),
            Navigation::ProductDetail(ProductId::new(5))
        );
        assert_eq!(
            Navigation::from_path("/products/edit/5"),
            Navigation::EditProduct(ProductId::new(5))
        );
        assert_eq!(Navigation::from_path("/products/abc"), Navigation::NotFound);
        assert_eq!(Navigation::from_path("/settings"), Navigation::NotFound);
    }

    #[test]
    fn should_round_trip_paths() {
        for target in [
            Navigation::Login,
            Navigation::Dashboard,
            Navigation::Products,
            Navigation::NewProduct,
            Navigation::ProductDetail(ProductId::new(12)),
            Navigation::EditProduct(ProductId::new(12)),
        ] {
            assert_eq!(Navigation::from_path(&target.path()), target);
        }
    }

    #[test]
    fn should_guard_everything_but_login_and_not_found() {
        assert!(!Navigation::Login.requires_session());
        assert!(!Navigation::NotFound.requires_session());
        assert!(Navigation::Products.requires_session());
    }
}
