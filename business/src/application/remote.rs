use crate::domain::errors::{GatewayError, Operation, RemoteError};
use crate::domain::logger::Logger;

/// Logs a gateway failure and collapses it into the normalized message.
pub(crate) fn reject(logger: &dyn Logger, operation: Operation, error: GatewayError) -> RemoteError {
    let remote = RemoteError::normalize(operation, &error);
    logger.error(&format!("{} rejected: {} ({:?})", operation, remote.message, error));
    remote
}
