/// Failure reported by a remote collaborator port.
///
/// Adapters decide which variant applies; the use case layer collapses all of
/// them into a single [`RemoteError`] carrying a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// Non-2xx response. `message` is the server's `{message}` body, if any.
    #[error("Request failed with status code {status}")]
    Api { status: u16, message: Option<String> },
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Decode(String),
}

impl GatewayError {
    pub fn api(status: u16, message: Option<String>) -> Self {
        GatewayError::Api { status, message }
    }
    pub fn transport(detail: impl Into<String>) -> Self {
        GatewayError::Transport(detail.into())
    }
    pub fn decode(detail: impl Into<String>) -> Self {
        GatewayError::Decode(detail.into())
    }

    /// Structured message from the server body, ignoring blank strings.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            GatewayError::Api {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }

    /// Generic error text of the failure (the `Display` output), if non-empty.
    pub fn generic_text(&self) -> Option<String> {
        let text = self.to_string();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Remote operations known to the console. Each owns a fallback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Login,
    ListProducts,
    GetProduct,
    CreateProduct,
    UpdateProduct,
    DeleteProduct,
}

impl Operation {
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Operation::Login => "Failed to login",
            Operation::ListProducts => "Failed to fetch products",
            Operation::GetProduct => "Failed to fetch product",
            Operation::CreateProduct => "Failed to create product",
            Operation::UpdateProduct => "Failed to update product",
            Operation::DeleteProduct => "Failed to delete product",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Login => write!(f, "auth/login"),
            Operation::ListProducts => write!(f, "products/getAll"),
            Operation::GetProduct => write!(f, "products/getOne"),
            Operation::CreateProduct => write!(f, "products/create"),
            Operation::UpdateProduct => write!(f, "products/update"),
            Operation::DeleteProduct => write!(f, "products/delete"),
        }
    }
}

/// The only error kind visible past the use case boundary: "remote operation
/// failed", tagged with the operation and a normalized message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RemoteError {
    pub operation: Operation,
    pub message: String,
}

impl RemoteError {
    pub fn new(operation: Operation, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }

    /// Server body message first, then the generic error text, then the
    /// operation's fallback.
    pub fn normalize(operation: Operation, error: &GatewayError) -> Self {
        let message = error
            .server_message()
            .map(str::to_string)
            .or_else(|| error.generic_text())
            .unwrap_or_else(|| operation.fallback_message().to_string());
        Self { operation, message }
    }
}
