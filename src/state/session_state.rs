// ============================================================================
// SESSION STATE - Token + usuario, persistidos entre recargas
// ============================================================================
// Un único Option<Session>: token y usuario se escriben y se borran juntos,
// ningún lector puede ver uno sin el otro.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::{Session, User};
use crate::services::storage::SessionStorage;
use crate::utils::constants::{STORAGE_KEY_TOKEN, STORAGE_KEY_USER};

/// Session Store compartido (clonar = compartir el mismo estado)
#[derive(Clone)]
pub struct SessionStore {
    current: Rc<RefCell<Option<Session>>>,
    storage: Rc<dyn SessionStorage>,
}

impl SessionStore {
    /// Leer la sesión persistida una sola vez al arrancar
    pub fn restore(storage: Rc<dyn SessionStorage>) -> Self {
        let token = storage.read(STORAGE_KEY_TOKEN);
        let user = storage.read(STORAGE_KEY_USER);

        let session = match (token, user) {
            (Some(token), Some(raw_user)) => match serde_json::from_str::<User>(&raw_user) {
                Ok(user) => {
                    log::info!("💾 [SESSION] Sesión restaurada para {}", user.username);
                    Some(Session { token, user })
                }
                Err(e) => {
                    log::warn!("⚠️ [SESSION] Usuario guardado ilegible ({}), descartando sesión", e);
                    None
                }
            },
            (None, None) => None,
            _ => {
                log::warn!("⚠️ [SESSION] Sesión persistida incompleta, descartando");
                None
            }
        };

        if session.is_none() {
            storage.remove(STORAGE_KEY_TOKEN);
            storage.remove(STORAGE_KEY_USER);
        }

        Self {
            current: Rc::new(RefCell::new(session)),
            storage,
        }
    }

    /// Guardar usuario y token juntos.
    /// Si la escritura durable falla se borra lo que se alcanzó a escribir y la
    /// sesión queda solo en memoria hasta la próxima recarga.
    pub fn set_session(&self, user: User, token: impl Into<String>) {
        let session = Session {
            token: token.into(),
            user,
        };

        if let Err(e) = self.persist(&session) {
            log::error!("❌ [SESSION] No se pudo persistir la sesión: {}", e);
            self.storage.remove(STORAGE_KEY_TOKEN);
            self.storage.remove(STORAGE_KEY_USER);
        }

        log::info!("✅ [SESSION] Sesión iniciada para {}", session.user.username);
        *self.current.borrow_mut() = Some(session);
    }

    /// Borrar usuario y token juntos
    pub fn clear(&self) {
        *self.current.borrow_mut() = None;
        self.storage.remove(STORAGE_KEY_TOKEN);
        self.storage.remove(STORAGE_KEY_USER);
        log::info!("🗑️ [SESSION] Sesión eliminada");
    }

    pub fn current(&self) -> Option<Session> {
        self.current.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.current.borrow().as_ref().map(|s| s.token.clone())
    }

    pub fn user(&self) -> Option<User> {
        self.current.borrow().as_ref().map(|s| s.user.clone())
    }

    /// Nombre a mostrar en los headers ("User" si no hay sesión)
    pub fn display_name(&self) -> String {
        self.current
            .borrow()
            .as_ref()
            .map(|s| s.user.username.clone())
            .unwrap_or_else(|| "User".to_string())
    }

    fn persist(&self, session: &Session) -> Result<(), crate::error::AppError> {
        let user_json = serde_json::to_string(&session.user)?;
        self.storage.write(STORAGE_KEY_USER, &user_json)?;
        self.storage.write(STORAGE_KEY_TOKEN, &session.token)?;
        Ok(())
    }
}
