// ============================================================================
// ACTIONS - Eventos de usuario que las vistas envían a la página montada
// ============================================================================

use crate::models::{Product, ProductFormValues, ProductId, StockDirection};
use crate::state::PageId;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Login(AuthFormAction),
    Register(AuthFormAction),
    Dashboard(DashboardAction),
    History(HistoryAction),
}

impl Action {
    /// Página a la que va dirigida la acción
    pub fn target(&self) -> PageId {
        match self {
            Self::Login(_) => PageId::Login,
            Self::Register(_) => PageId::Register,
            Self::Dashboard(_) => PageId::Dashboard,
            Self::History(_) => PageId::History,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthFormAction {
    Submit { username: String, password: String },
    /// Link "Register" / "Login" al pie del formulario
    Switch,
}

/// Petición de una tarjeta de producto: editar o ajustar stock.
/// Dos variantes explícitas en vez de adivinar por la forma del argumento.
#[derive(Clone, Debug, PartialEq)]
pub enum ProductRequest {
    EditRequested {
        product: Product,
    },
    StockAdjustRequested {
        product_id: ProductId,
        direction: StockDirection,
        /// Texto crudo del input; se valida en la página
        quantity: String,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum DashboardAction {
    AddProduct,
    Product(ProductRequest),
    Delete(ProductId),
    SubmitProductForm(ProductFormValues),
    /// Borrador del overlay mientras se escribe (no redibuja)
    ProductFormEdited(ProductFormValues),
    /// Texto del input de cantidad de una tarjeta (no redibuja)
    QuantityEdited {
        product_id: ProductId,
        quantity: String,
    },
    CloseProductForm,
    ShowHistory,
    ShowProductHistory(ProductId),
    Logout,
}

#[derive(Clone, Debug, PartialEq)]
pub enum HistoryAction {
    Back,
}
