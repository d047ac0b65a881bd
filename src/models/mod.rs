pub mod auth;
pub mod product;
pub mod transaction;

pub use auth::{Credentials, ErrorBody, LoginResponse, Session, User};
pub use product::{Product, ProductDraft, ProductFormValues, ProductId, StockDirection};
pub use transaction::{TradeAction, Transaction};

use serde::{Deserialize, Deserializer};

/// Acepta un decimal como número JSON o como string ("12.50").
/// Los backends con columnas NUMERIC suelen serializarlo como string.
pub(crate) fn decimal_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Decimal {
        Number(f64),
        Text(String),
    }

    match Decimal::deserialize(deserializer)? {
        Decimal::Number(value) => Ok(value),
        Decimal::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid decimal: {}", text))),
    }
}
