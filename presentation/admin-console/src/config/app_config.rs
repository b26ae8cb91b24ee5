use super::{api_config::ApiConfig, console_config::ConsoleConfig};

pub struct AppConfig {
    pub api: ApiConfig,
    pub console: ConsoleConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api: ApiConfig::from_env(),
            console: ConsoleConfig::from_env(),
        }
    }
}
