use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Cuerpo de /auth/login y /auth/register
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Usuario autenticado. Los campos que el cliente no usa se conservan
/// en `extra` para no perderlos al persistir el registro.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn named(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            id: None,
            extra: Map::new(),
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Sesión cliente: token y usuario siempre van juntos
#[derive(Clone, PartialEq, Debug)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Cuerpo de error del backend: `{ "error": "..." }`
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.error
            .or(self.message)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}
