//! Shared application state for API handlers.

use std::sync::Arc;
use std::time::SystemTime;

use crate::service::NftOperations;

/// Shared state handed to every handler.
///
/// The gateway is stateless between requests: this struct only carries the
/// immutable reference to the injected operation service and the start time
/// used by the health endpoint.
#[derive(Clone)]
pub struct AppState {
    /// Injected blockchain operation service.
    pub service: Arc<dyn NftOperations>,
    /// Application start time for uptime tracking.
    pub start_time: SystemTime,
}

impl AppState {
    /// Create state around an operation service.
    pub fn new(service: Arc<dyn NftOperations>) -> Self {
        Self {
            service,
            start_time: SystemTime::now(),
        }
    }
}
