// ============================================================================
// ERROR - Taxonomía de errores del cliente
// ============================================================================
// Display de cada variante = texto que ve el usuario (inline, sin adornos)
// ============================================================================

use thiserror::Error;

/// Error único del cliente ShopTrack.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// Rechazado en el cliente antes de cualquier llamada de red
    #[error("{0}")]
    Validation(String),

    /// El servidor respondió pero rechazó la operación
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// No hubo respuesta (red caída, CORS, DNS...)
    #[error("Network error: {0}")]
    Transport(String),

    /// Respuesta 2xx con un cuerpo que no se pudo interpretar
    #[error("Unexpected response from server: {0}")]
    Decode(String),

    /// localStorage no disponible o lleno
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn request_failed(status: u16, message: impl Into<String>) -> Self {
        Self::RequestFailed {
            status,
            message: message.into(),
        }
    }

    /// 401: el backend ya no acepta el token de la sesión
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::RequestFailed { status: 401, .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
