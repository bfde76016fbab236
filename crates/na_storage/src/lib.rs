use std::sync::Arc;

use na_core::{Error, NewsStorage, Result};

pub mod backends;

pub use backends::*;

/// Create a storage backend by name. Only the in-memory backend ships with
/// this workspace; the hosted store lives behind the same trait on the
/// collaborator side.
pub async fn create_storage(kind: &str) -> Result<Arc<dyn NewsStorage>> {
    match kind {
        "memory" => Ok(Arc::new(memory::MemoryStorage::new().await?)),
        other => Err(Error::Storage(format!("unknown storage backend: {}", other))),
    }
}
