use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` port over `tracing`; the subscriber is installed by the binary.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "admin_console", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "admin_console", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "admin_console", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "admin_console", "{}", message);
    }
}
