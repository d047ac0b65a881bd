// ============================================================================
// APP STATE - Servicios compartidos + estado de navegación
// ============================================================================

use std::rc::Rc;
use crate::config::AppConfig;
use crate::models::ProductId;
use crate::services::{ApiClient, HttpClient, Scheduler, SessionStorage};
use crate::state::session_state::SessionStore;

/// Servicios compartidos por el App Controller y todas las páginas.
/// Se construye explícitamente (nada de singletons) y se clona barato.
#[derive(Clone)]
pub struct AppState {
    pub config: Rc<AppConfig>,
    pub session: SessionStore,
    pub api: ApiClient,
    pub scheduler: Rc<dyn Scheduler>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        storage: Rc<dyn SessionStorage>,
        http: Rc<dyn HttpClient>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        let session = SessionStore::restore(storage);
        let api = ApiClient::new(&config.backend_url, http, session.clone());
        Self {
            config: Rc::new(config),
            session,
            api,
            scheduler,
        }
    }
}

/// Páginas navegables
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageId {
    Login,
    Register,
    Dashboard,
    History,
}

impl PageId {
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard | Self::History)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::Dashboard => "dashboard",
            Self::History => "history",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams {
    /// History: limitar a un producto
    pub product: Option<ProductId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub page: PageId,
    pub params: RouteParams,
}

impl Route {
    pub fn to(page: PageId) -> Self {
        Self {
            page,
            params: RouteParams::default(),
        }
    }

    pub fn product_history(product: ProductId) -> Self {
        Self {
            page: PageId::History,
            params: RouteParams {
                product: Some(product),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Unauthenticated,
    Authenticated,
}

impl AuthStatus {
    pub fn default_page(&self) -> PageId {
        match self {
            Self::Unauthenticated => PageId::Login,
            Self::Authenticated => PageId::Dashboard,
        }
    }

    pub fn allows(&self, page: PageId) -> bool {
        page.requires_auth() == (*self == Self::Authenticated)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    pub auth: AuthStatus,
    pub route: Route,
}

impl NavigationState {
    pub fn for_auth(auth: AuthStatus) -> Self {
        Self {
            auth,
            route: Route::to(auth.default_page()),
        }
    }
}

/// Peticiones de transición que una página le hace al App Controller
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavRequest {
    LoginSucceeded,
    RegisterThenLoginSucceeded,
    LogoutRequested,
    /// El backend rechazó el token (401)
    SessionRejected,
    NavigateTo(Route),
}

/// Canal de una página montada hacia el App Controller.
/// Lleva la generación del montaje: si la página ya no está montada cuando
/// llega la petición, el App la descarta.
#[derive(Clone)]
pub struct Navigator {
    generation: u64,
    sink: Rc<dyn Fn(u64, NavRequest)>,
}

impl Navigator {
    pub fn new(generation: u64, sink: Rc<dyn Fn(u64, NavRequest)>) -> Self {
        Self { generation, sink }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn request(&self, request: NavRequest) {
        (self.sink)(self.generation, request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_auth_state_owns_its_pages() {
        let out = AuthStatus::Unauthenticated;
        let inside = AuthStatus::Authenticated;

        assert!(out.allows(PageId::Login) && out.allows(PageId::Register));
        assert!(!out.allows(PageId::Dashboard) && !out.allows(PageId::History));
        assert!(inside.allows(PageId::Dashboard) && inside.allows(PageId::History));
        assert!(!inside.allows(PageId::Login));

        assert_eq!(NavigationState::for_auth(inside).route, Route::to(PageId::Dashboard));
    }
}
