/// ID del contenedor raíz que provee la página host
pub const MOUNT_POINT_ID: &str = "app";

/// Claves de localStorage para la sesión
pub const STORAGE_KEY_TOKEN: &str = "token";
pub const STORAGE_KEY_USER: &str = "user";

/// Clase que centra las pantallas de autenticación en móvil
pub const AUTH_PAGE_CLASS: &str = "auth-page";

pub const REGISTER_SUCCESS_MESSAGE: &str = "Registration successful! Please login.";
