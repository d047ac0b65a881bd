// ============================================================================
// STORAGE - Almacenamiento durable de la sesión
// ============================================================================

use web_sys::Storage;
use crate::error::AppError;

/// Backend clave/valor (strings crudos) donde vive la sesión entre recargas
pub trait SessionStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str);
}

/// localStorage del navegador.
/// Sin localStorage (modo privado, iframe sandbox) la sesión solo vive en memoria.
#[derive(Clone, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Option<Storage> {
        web_sys::window().and_then(|win| win.local_storage().ok().flatten())
    }
}

impl SessionStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        let storage = Self::local_storage()
            .ok_or_else(|| AppError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|_| AppError::Storage(format!("could not write '{}' to localStorage", key)))
    }

    fn remove(&self, key: &str) {
        let removed = Self::local_storage().is_some_and(|storage| storage.remove_item(key).is_ok());
        if !removed {
            log::warn!("⚠️ [STORAGE] No se pudo eliminar '{}' de localStorage", key);
        }
    }
}
