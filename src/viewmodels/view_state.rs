// ============================================================================
// VIEW STATE - Lo que cada página le entrega al Renderer
// ============================================================================
// Datos puros (Clone + PartialEq): las vistas DOM los dibujan sin lógica.
// ============================================================================

use std::collections::HashMap;
use crate::models::{Product, ProductFormValues, ProductId, Transaction};
use crate::state::PageId;

#[derive(Clone, Debug, PartialEq)]
pub enum PageView {
    Login(AuthFormView),
    Register(AuthFormView),
    Dashboard(DashboardView),
    History(HistoryView),
}

impl PageView {
    pub fn page(&self) -> PageId {
        match self {
            Self::Login(_) => PageId::Login,
            Self::Register(_) => PageId::Register,
            Self::Dashboard(_) => PageId::Dashboard,
            Self::History(_) => PageId::History,
        }
    }
}

/// Formulario de login/registro
#[derive(Clone, Debug, PartialEq, Default)]
pub struct AuthFormView {
    pub username: String,
    pub submitting: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

/// Aviso transitorio; `id` permite que solo su propio timer lo cierre
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Error mostrado dentro de una tarjeta de producto
#[derive(Clone, Debug, PartialEq)]
pub struct CardNotice {
    pub id: u64,
    pub product_id: ProductId,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum OverlayMode {
    Add,
    Edit(Product),
}

/// Overlay de alta/edición de producto
#[derive(Clone, Debug, PartialEq)]
pub struct ProductFormView {
    pub id: u64,
    pub mode: OverlayMode,
    pub values: ProductFormValues,
    pub submitting: bool,
    pub error: Option<String>,
}

impl ProductFormView {
    pub fn new(id: u64, mode: OverlayMode) -> Self {
        let values = match &mode {
            OverlayMode::Add => ProductFormValues::default(),
            OverlayMode::Edit(product) => ProductFormValues::from_product(product),
        };
        Self {
            id,
            mode,
            values,
            submitting: false,
            error: None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            OverlayMode::Add => "Add New Product",
            OverlayMode::Edit(_) => "Edit Product",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            return "Loading...";
        }
        match self.mode {
            OverlayMode::Add => "Create Product",
            OverlayMode::Edit(_) => "Update Product",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct DashboardView {
    pub username: String,
    pub loading: bool,
    pub products: Vec<Product>,
    pub overlay: Option<ProductFormView>,
    pub notice: Option<Notice>,
    /// Tarjeta con una operación en curso (controles deshabilitados)
    pub busy_product: Option<ProductId>,
    pub card_error: Option<CardNotice>,
    /// Cantidades escritas en las tarjetas; sobreviven a los re-renders
    pub quantities: HashMap<ProductId, String>,
}

impl DashboardView {
    pub fn quantity_for(&self, product_id: ProductId) -> &str {
        self.quantities.get(&product_id).map(String::as_str).unwrap_or("")
    }

    pub fn card_error_for(&self, product_id: ProductId) -> Option<&str> {
        self.card_error
            .as_ref()
            .filter(|n| n.product_id == product_id)
            .map(|n| n.message.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct HistoryView {
    pub username: String,
    pub product: Option<ProductId>,
    pub loading: bool,
    pub entries: Vec<Transaction>,
    pub notice: Option<Notice>,
}

impl HistoryView {
    pub fn subtitle(&self) -> Option<String> {
        let product = self.product?;
        let name = self
            .entries
            .first()
            .map(|e| e.product_name.clone())
            .unwrap_or_else(|| format!("#{}", product));
        Some(format!("Product: {}", name))
    }
}
