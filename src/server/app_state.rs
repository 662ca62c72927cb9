use std::sync::Arc;

use crate::health::db::DatabaseProbe;

pub struct AppState {
    probe: Arc<dyn DatabaseProbe>,
}

impl AppState {
    pub fn new(probe: impl DatabaseProbe + 'static) -> Arc<Self> {
        Arc::new(Self {
            probe: Arc::new(probe),
        })
    }

    pub fn get_probe(&self) -> &dyn DatabaseProbe {
        self.probe.as_ref()
    }
}
