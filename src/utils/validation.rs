// ============================================================================
// VALIDATION - Reglas del lado cliente (antes de cualquier request)
// ============================================================================

use crate::error::AppError;
use crate::models::{Credentials, ProductDraft, ProductFormValues};

pub fn validate_credentials(username: &str, password: &str) -> Result<Credentials, AppError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(AppError::validation("Username and password are required"));
    }
    Ok(Credentials::new(username, password))
}

/// Valida el formulario de producto y devuelve el cuerpo listo para enviar.
/// Todas las reglas que fallan se reportan juntas.
pub fn validate_product(values: &ProductFormValues) -> Result<ProductDraft, AppError> {
    let mut errors = Vec::new();

    let name = values.name.trim();
    if name.is_empty() {
        errors.push("Product name is required");
    }

    let stock = values.stock.trim().parse::<u32>().ok();
    if stock.is_none() {
        errors.push("Stock must be a non-negative number");
    }

    let price = values
        .price
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p > 0.0);
    if price.is_none() {
        errors.push("Price must be greater than 0");
    }

    match (stock, price) {
        (Some(stock), Some(price)) if errors.is_empty() => {
            let description = values.description.trim();
            Ok(ProductDraft {
                name: name.to_string(),
                stock,
                price,
                description: (!description.is_empty()).then(|| description.to_string()),
            })
        }
        _ => Err(AppError::validation(errors.join(". "))),
    }
}

/// Cantidad para comprar/vender: entero positivo
pub fn parse_quantity(raw: &str) -> Result<u32, AppError> {
    match raw.trim().parse::<u32>() {
        Ok(quantity) if quantity > 0 => Ok(quantity),
        _ => Err(AppError::validation("Quantity must be a positive whole number")),
    }
}
