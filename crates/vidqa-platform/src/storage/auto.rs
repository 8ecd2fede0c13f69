//! Pick the persistence backend for this page load.
//!
//! Auto priority: localStorage → Memory (fallback). The HTTP backend is
//! only used when the configuration names it explicitly, since it
//! requires a signed-in backend to be reachable.

use std::rc::Rc;
use vidqa_core::ports::PersistencePort;
use vidqa_types::config::{StorageBackendType, StorageConfig};
use super::{HttpStore, LocalStorageStore, MemoryStore};

/// Open the configured storage backend.
/// Returns a trait object so callers are backend-agnostic.
pub fn auto_detect_storage(config: &StorageConfig) -> Rc<dyn PersistencePort> {
    match config.backend {
        StorageBackendType::Http => {
            log::info!("Persistence backend: HTTP");
            Rc::new(HttpStore::new())
        }
        StorageBackendType::Memory => {
            log::info!("Persistence backend: memory");
            Rc::new(MemoryStore::new())
        }
        StorageBackendType::LocalStorage | StorageBackendType::Auto => {
            match LocalStorageStore::open(config.namespace.clone()) {
                Ok(store) => {
                    log::info!("Persistence backend: localStorage ({})", config.namespace);
                    Rc::new(store)
                }
                Err(e) => {
                    log::warn!("localStorage unavailable ({}), falling back to memory", e);
                    Rc::new(MemoryStore::new())
                }
            }
        }
    }
}
