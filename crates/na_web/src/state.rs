use std::sync::Arc;

use na_core::NewsStorage;

pub struct AppState {
    pub storage: Arc<dyn NewsStorage>,
}
