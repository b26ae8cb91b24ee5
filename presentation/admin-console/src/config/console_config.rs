use business::domain::product::gateway::ListOptions;
use business::domain::session::model::Credentials;

/// Settings of the headless console run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleConfig {
    pub credentials: Credentials,
    pub list_options: ListOptions,
}

impl ConsoleConfig {
    /// Load console configuration from environment variables
    ///
    /// Environment variables:
    /// - CONSOLE_USERNAME: login user (default: "emilys")
    /// - CONSOLE_PASSWORD: login password (default: "emilyspass")
    /// - CONSOLE_PRODUCT_LIMIT: product list size (default: server default)
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let username = var("CONSOLE_USERNAME").unwrap_or_else(|| "emilys".to_string());
        let password = var("CONSOLE_PASSWORD").unwrap_or_else(|| "emilyspass".to_string());
        let limit = var("CONSOLE_PRODUCT_LIMIT").and_then(|limit| limit.trim().parse::<u32>().ok());

        Self {
            credentials: Credentials::new(username, password),
            list_options: ListOptions { limit },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_demo_account_without_limit() {
        let config = ConsoleConfig::from_vars(|_| None);

        assert_eq!(config.credentials, Credentials::new("emilys", "emilyspass"));
        assert_eq!(config.list_options, ListOptions::default());
    }

    #[test]
    fn should_read_product_limit() {
        let config = ConsoleConfig::from_vars(|key| {
            (key == "CONSOLE_PRODUCT_LIMIT").then(|| "50".to_string())
        });

        assert_eq!(config.list_options, ListOptions::with_limit(50));
    }
}
