use crate::catalog::{self, ServiceInfo};

/// Shared gateway state
///
/// Everything here is immutable. Handlers never write to shared state;
/// each request is served from the catalog and fresh random draws.
#[derive(Clone)]
pub struct AppState {
    /// Marketed service catalog (read-only)
    pub services: &'static [ServiceInfo],
}

impl AppState {
    pub fn new() -> Self {
        Self {
            services: catalog::all(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
