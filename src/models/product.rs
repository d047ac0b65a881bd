use serde::{Deserialize, Serialize};

pub type ProductId = i64;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub stock: u32,
    #[serde(deserialize_with = "super::decimal_from_number_or_string")]
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
}

/// Cuerpo de POST /stock/ y PUT /stock/{id}, ya validado
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct ProductDraft {
    pub name: String,
    pub stock: u32,
    pub price: f64,
    pub description: Option<String>,
}

/// Valores crudos del formulario de producto (tal cual los escribe el usuario)
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ProductFormValues {
    pub name: String,
    pub stock: String,
    pub price: String,
    pub description: String,
}

impl ProductFormValues {
    /// Prellenar el formulario de edición
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            stock: product.stock.to_string(),
            price: product.price.to_string(),
            description: product.description.clone().unwrap_or_default(),
        }
    }
}

/// Dirección de un ajuste de stock. Son dos operaciones distintas en el
/// backend (POST vs DELETE sobre /stock/{id}/stock), nunca un delta con signo.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StockDirection {
    AddStock,
    RemoveStock,
}

impl StockDirection {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AddStock => "Buy",
            Self::RemoveStock => "Sell",
        }
    }
}

#[derive(Serialize)]
pub(crate) struct StockChange {
    pub stock: u32,
}
