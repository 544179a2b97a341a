use std::sync::Arc;

use crate::{catalog::Catalog, services::MessageSink};

/// Shared application state
///
/// The catalog is read-only after startup, so handlers share it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub messages: Arc<dyn MessageSink>,
}

impl AppState {
    pub fn new(catalog: Catalog, messages: impl MessageSink + 'static) -> Self {
        Self {
            catalog: Arc::new(catalog),
            messages: Arc::new(messages),
        }
    }
}
