// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Transport Facade)
// ============================================================================
// NO tiene lógica de negocio: arma requests, adjunta el token Bearer de la
// sesión actual y normaliza los errores. Nunca reintenta.
// ============================================================================

use std::rc::Rc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::error::AppError;
use crate::models::product::StockChange;
use crate::models::{Credentials, ErrorBody, LoginResponse, Product, ProductDraft, ProductId, Transaction};
use crate::services::http::{HttpClient, HttpRequest, HttpResponse, Method};
use crate::state::session_state::SessionStore;

/// Cliente API: grupos `auth` y `stock`
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Rc<dyn HttpClient>,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(base_url: &str, http: Rc<dyn HttpClient>, session: SessionStore) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            session,
        }
    }

    // ------------------------------------------------------------------
    // auth
    // ------------------------------------------------------------------

    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AppError> {
        log::info!("🔐 [API] Login para usuario: {}", credentials.username);
        let body = to_body(credentials)?;
        self.fetch_json(Method::Post, "/auth/login", Some(body), "Login failed")
            .await
    }

    pub async fn logout(&self) -> Result<(), AppError> {
        log::info!("👋 [API] Logout");
        self.execute(Method::Post, "/auth/logout", None, "Logout failed")
            .await
            .map(|_| ())
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<(), AppError> {
        log::info!("📝 [API] Registrando usuario: {}", credentials.username);
        let body = to_body(credentials)?;
        self.execute(Method::Post, "/auth/register", Some(body), "Registration failed")
            .await
            .map(|_| ())
    }

    // ------------------------------------------------------------------
    // stock
    // ------------------------------------------------------------------

    pub async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        let products: Vec<Product> = self
            .fetch_json(Method::Get, "/stock/", None, "Failed to fetch products")
            .await?;
        log::info!("📦 [API] {} productos obtenidos", products.len());
        Ok(products)
    }

    pub async fn get_product(&self, id: ProductId) -> Result<Product, AppError> {
        self.fetch_json(Method::Get, &format!("/stock/{}", id), None, "Failed to fetch product")
            .await
    }

    pub async fn create_product(&self, draft: &ProductDraft) -> Result<(), AppError> {
        log::info!("➕ [API] Creando producto: {}", draft.name);
        let body = to_body(draft)?;
        self.execute(Method::Post, "/stock/", Some(body), "Failed to create product")
            .await
            .map(|_| ())
    }

    pub async fn update_product(&self, id: ProductId, draft: &ProductDraft) -> Result<(), AppError> {
        log::info!("✏️ [API] Actualizando producto {}", id);
        let body = to_body(draft)?;
        self.execute(Method::Put, &format!("/stock/{}", id), Some(body), "Failed to update product")
            .await
            .map(|_| ())
    }

    pub async fn delete_product(&self, id: ProductId) -> Result<(), AppError> {
        log::info!("🗑️ [API] Eliminando producto {}", id);
        self.execute(Method::Delete, &format!("/stock/{}", id), None, "Failed to delete product")
            .await
            .map(|_| ())
    }

    pub async fn add_stock(&self, id: ProductId, quantity: u32) -> Result<(), AppError> {
        log::info!("📥 [API] +{} unidades al producto {}", quantity, id);
        let body = to_body(&StockChange { stock: quantity })?;
        self.execute(Method::Post, &format!("/stock/{}/stock", id), Some(body), "Failed to add stock")
            .await
            .map(|_| ())
    }

    pub async fn remove_stock(&self, id: ProductId, quantity: u32) -> Result<(), AppError> {
        log::info!("📤 [API] -{} unidades al producto {}", quantity, id);
        let body = to_body(&StockChange { stock: quantity })?;
        self.execute(Method::Delete, &format!("/stock/{}/stock", id), Some(body), "Failed to remove stock")
            .await
            .map(|_| ())
    }

    pub async fn history(&self) -> Result<Vec<Transaction>, AppError> {
        self.fetch_json(Method::Get, "/stock/history", None, "Failed to fetch history")
            .await
    }

    pub async fn product_history(&self, id: ProductId) -> Result<Vec<Transaction>, AppError> {
        self.fetch_json(
            Method::Get,
            &format!("/stock/{}/history", id),
            None,
            "Failed to fetch product history",
        )
        .await
    }

    // ------------------------------------------------------------------
    // plumbing
    // ------------------------------------------------------------------

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        fallback: &str,
    ) -> Result<T, AppError> {
        let response = self.execute(method, path, body, fallback).await?;
        serde_json::from_str(&response.body).map_err(|e| {
            log::error!("❌ [API] {} {}: cuerpo inválido: {}", method.as_str(), path, e);
            AppError::from(e)
        })
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        fallback: &str,
    ) -> Result<HttpResponse, AppError> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        let request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers,
            body,
        };

        let response = self.http.send(request).await.map_err(|e| {
            log::error!("❌ [API] {} {}: {}", method.as_str(), path, e);
            e
        })?;

        if response.is_success() {
            Ok(response)
        } else {
            let err = error_from_response(&response, fallback);
            log::warn!("⚠️ [API] {} {} -> HTTP {}: {}", method.as_str(), path, response.status, err);
            Err(err)
        }
    }
}

fn to_body<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string(value).map_err(|e| AppError::Decode(format!("Serialization error: {}", e)))
}

/// Mensaje del cuerpo `{error}` o, si no se puede leer, el genérico de la operación
pub(crate) fn error_from_response(response: &HttpResponse, fallback: &str) -> AppError {
    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| fallback.to_string());
    AppError::request_failed(response.status, message)
}
