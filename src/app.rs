// ============================================================================
// APP - Controlador de navegación (única máquina de estados de nivel superior)
// ============================================================================
// Unauthenticated -> Login | Register
// Authenticated   -> Dashboard | History
// Una sola página montada; siempre se desmonta la anterior antes de montar.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use crate::state::{AppState, AuthStatus, NavRequest, NavigationState, Navigator, PageId, Route, RouteParams};
use crate::viewmodels::{
    Action, DashboardViewModel, HistoryViewModel, LoginViewModel, PageContext, PageController,
    RegisterViewModel,
};
use crate::views::Renderer;

type PageFactory = fn(PageContext, RouteParams) -> Rc<dyn PageController>;

fn login_page(ctx: PageContext, _: RouteParams) -> Rc<dyn PageController> {
    Rc::new(LoginViewModel::new(ctx))
}

fn register_page(ctx: PageContext, _: RouteParams) -> Rc<dyn PageController> {
    Rc::new(RegisterViewModel::new(ctx))
}

fn dashboard_page(ctx: PageContext, _: RouteParams) -> Rc<dyn PageController> {
    Rc::new(DashboardViewModel::new(ctx))
}

fn history_page(ctx: PageContext, params: RouteParams) -> Rc<dyn PageController> {
    Rc::new(HistoryViewModel::new(ctx, params))
}

/// Registro estático PageId -> constructor
fn page_registry() -> HashMap<PageId, PageFactory> {
    let mut registry: HashMap<PageId, PageFactory> = HashMap::new();
    registry.insert(PageId::Login, login_page);
    registry.insert(PageId::Register, register_page);
    registry.insert(PageId::Dashboard, dashboard_page);
    registry.insert(PageId::History, history_page);
    registry
}

/// Aplicación principal
pub struct App {
    state: AppState,
    renderer: Rc<dyn Renderer>,
    registry: HashMap<PageId, PageFactory>,
    navigation: RefCell<NavigationState>,
    mounted: RefCell<Option<Rc<dyn PageController>>>,
    /// Se incrementa en cada montaje; las peticiones de páginas viejas se descartan
    generation: Cell<u64>,
    this: Weak<App>,
}

impl App {
    pub fn new(state: AppState, renderer: Rc<dyn Renderer>) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            state,
            renderer,
            registry: page_registry(),
            navigation: RefCell::new(NavigationState::for_auth(AuthStatus::Unauthenticated)),
            mounted: RefCell::new(None),
            generation: Cell::new(0),
            this: this.clone(),
        })
    }

    /// Arranque: leer la sesión y montar la página por defecto
    pub fn init(&self) {
        let auth = if self.state.session.is_authenticated() {
            log::info!("💾 [APP] Sesión existente, entrando al dashboard");
            AuthStatus::Authenticated
        } else {
            log::info!("🔓 [APP] Sin sesión, mostrando login");
            AuthStatus::Unauthenticated
        };
        self.enter(auth);
    }

    /// Desmontar todo y dejar el mount point vacío
    pub fn teardown(&self) {
        self.retire_mounted();
        self.renderer.clear();
        log::info!("🧹 [APP] Aplicación desmontada");
    }

    /// Entregar una acción de la vista a la página montada
    pub fn dispatch(&self, action: Action) {
        let page = self.mounted.borrow().clone();
        match page {
            Some(page) if page.page() == action.target() => page.handle(action),
            Some(page) => log::debug!(
                "🚫 [APP] Acción para {} descartada: la página activa es {}",
                action.target().name(),
                page.page().name()
            ),
            None => log::warn!("⚠️ [APP] Acción recibida sin página montada"),
        }
    }

    pub fn navigation(&self) -> NavigationState {
        self.navigation.borrow().clone()
    }

    pub fn mounted_page(&self) -> Option<PageId> {
        self.mounted.borrow().as_ref().map(|page| page.page())
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation.get()
    }

    /// Canal para la página del montaje `generation`.
    /// Las peticiones se ejecutan en un tick posterior, nunca dentro del handler.
    pub(crate) fn navigator(&self, generation: u64) -> Navigator {
        let app = self.this.clone();
        let scheduler = self.state.scheduler.clone();
        Navigator::new(
            generation,
            Rc::new(move |generation: u64, request: NavRequest| {
                let app = app.clone();
                scheduler.spawn(Box::pin(async move {
                    if let Some(app) = app.upgrade() {
                        app.on_request(generation, request).await;
                    }
                }));
            }),
        )
    }

    async fn on_request(&self, generation: u64, request: NavRequest) {
        if generation != self.generation.get() {
            log::debug!("🚫 [APP] Petición {:?} de una página ya desmontada", request);
            return;
        }
        self.navigate(request).await;
    }

    pub async fn navigate(&self, request: NavRequest) {
        log::info!("🧭 [APP] Navegación: {:?}", request);
        match request {
            NavRequest::LoginSucceeded | NavRequest::RegisterThenLoginSucceeded => {
                if !self.state.session.is_authenticated() {
                    log::warn!("⚠️ [APP] Login notificado sin sesión guardada, ignorando");
                    return;
                }
                self.enter(AuthStatus::Authenticated);
            }
            NavRequest::LogoutRequested => {
                // Sin página montada durante la espera: un segundo Logout o una
                // mutación del dashboard llegan con una generación vieja
                self.retire_mounted();
                if let Err(e) = self.state.api.logout().await {
                    log::warn!("⚠️ [APP] Logout en backend falló ({}), cerrando sesión local igualmente", e);
                }
                self.state.session.clear();
                self.enter(AuthStatus::Unauthenticated);
            }
            NavRequest::SessionRejected => {
                log::warn!("🔒 [APP] Sesión rechazada por el backend, volviendo a login");
                self.state.session.clear();
                self.enter(AuthStatus::Unauthenticated);
            }
            NavRequest::NavigateTo(route) => {
                let auth = self.navigation.borrow().auth;
                if !auth.allows(route.page) {
                    log::warn!(
                        "⚠️ [APP] {} no está disponible en estado {:?}",
                        route.page.name(),
                        auth
                    );
                    return;
                }
                self.mount(route);
            }
        }
    }

    fn enter(&self, auth: AuthStatus) {
        let navigation = NavigationState::for_auth(auth);
        let route = navigation.route.clone();
        *self.navigation.borrow_mut() = navigation;
        self.mount(route);
    }

    /// Desmontar la página activa e invalidar sus navigators
    fn retire_mounted(&self) -> u64 {
        let previous = self.mounted.borrow_mut().take();
        if let Some(page) = previous {
            log::debug!("📤 [APP] Desmontando {}", page.page().name());
            page.unmount();
        }
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        generation
    }

    fn mount(&self, route: Route) {
        let generation = self.retire_mounted();
        self.renderer.clear();

        let Some(factory) = self.registry.get(&route.page).copied() else {
            log::error!("❌ [APP] Página {} no registrada", route.page.name());
            return;
        };

        let ctx = PageContext::new(
            self.state.clone(),
            self.renderer.clone(),
            self.navigator(generation),
        );
        let page = factory(ctx, route.params.clone());
        log::info!("📥 [APP] Montando {}", route.page.name());

        self.navigation.borrow_mut().route = route;
        *self.mounted.borrow_mut() = Some(page.clone());
        page.mount();
    }
}
