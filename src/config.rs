use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    /// Tiempo que un aviso (error/éxito) permanece visible
    pub notice_timeout_ms: u32,
    /// Espera entre "registro OK" y volver a la pantalla de login
    pub register_redirect_ms: u32,
    /// Tras registrarse, hacer login automático con las mismas credenciales
    pub auto_login_after_register: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:3000".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            notice_timeout_ms: 5000,
            register_redirect_ms: 2000,
            auto_login_after_register: false,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: option_env!("BACKEND_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            environment: option_env!("ENVIRONMENT")
                .map(|s| s.to_string())
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: option_env!("LOG_LEVEL")
                .map(|s| s.to_string())
                .unwrap_or(defaults.log_level),
            notice_timeout_ms: option_env!("NOTICE_TIMEOUT_MS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.notice_timeout_ms),
            register_redirect_ms: option_env!("REGISTER_REDIRECT_MS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.register_redirect_ms),
            auto_login_after_register: option_env!("AUTO_LOGIN_AFTER_REGISTER")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.auto_login_after_register),
        }
    }

    /// Nivel efectivo para wasm_logger (solo errores si el logging está deshabilitado)
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Error;
        }
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_five_second_notices() {
        let config = AppConfig::default();
        assert_eq!(config.notice_timeout_ms, 5000);
        assert_eq!(config.register_redirect_ms, 2000);
        assert!(!config.auto_login_after_register);
    }

    #[test]
    fn disabled_logging_only_keeps_errors() {
        let config = AppConfig {
            enable_logging: false,
            log_level: "debug".into(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Error);

        let config = AppConfig {
            log_level: "DEBUG".into(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "verbose".into(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Info);

        let config = AppConfig {
            log_level: "Warn".into(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
