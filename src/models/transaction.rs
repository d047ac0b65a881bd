use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    Buy,
    Sell,
}

impl TradeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

/// Entrada del historial. Solo lectura para el cliente.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Transaction {
    pub created: String,
    pub product_name: String,
    pub action: TradeAction,
    pub quantity: u32,
    #[serde(deserialize_with = "super::decimal_from_number_or_string")]
    pub price: f64,
}

impl Transaction {
    /// Derivado en cada render, nunca almacenado
    pub fn total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}
