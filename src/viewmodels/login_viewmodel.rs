// ============================================================================
// LOGIN VIEWMODEL - Formulario de acceso
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::Credentials;
use crate::state::{NavRequest, PageId, Route};
use crate::utils::validate_credentials;
use crate::viewmodels::page::{ignore_foreign, PageContext, PageController};
use crate::viewmodels::{Action, AuthFormAction, AuthFormView, PageView};

#[derive(Clone)]
pub struct LoginViewModel {
    ctx: PageContext,
    form: Rc<RefCell<AuthFormView>>,
}

impl LoginViewModel {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            form: Rc::new(RefCell::new(AuthFormView::default())),
        }
    }

    pub fn view(&self) -> AuthFormView {
        self.form.borrow().clone()
    }

    fn update(&self, change: impl FnOnce(&mut AuthFormView)) {
        change(&mut self.form.borrow_mut());
        self.render();
    }

    fn submit(&self, username: String, password: String) {
        if self.form.borrow().submitting {
            log::warn!("⚠️ [LOGIN] Login ya en curso, ignorando envío");
            return;
        }

        let credentials = match validate_credentials(&username, &password) {
            Ok(credentials) => credentials,
            Err(e) => {
                self.update(|form| {
                    form.username = username;
                    form.success = None;
                    form.error = Some(e.to_string());
                });
                return;
            }
        };

        self.update(|form| {
            form.username = credentials.username.clone();
            form.submitting = true;
            form.error = None;
            form.success = None;
        });

        let vm = self.clone();
        self.ctx.spawn(async move { vm.login(credentials).await });
    }

    async fn login(&self, credentials: Credentials) {
        log::info!("🔐 [LOGIN] Iniciando login...");
        let result = self.ctx.state.api.login(&credentials).await;

        if !self.ctx.is_mounted() {
            log::debug!("🚫 [LOGIN] Respuesta de login descartada: página desmontada");
            return;
        }

        match result {
            Ok(response) => {
                log::info!("✅ [LOGIN] Login exitoso para {}", response.user.username);
                self.ctx.state.session.set_session(response.user, response.token);
                // el botón sigue deshabilitado hasta que el App monte el Dashboard
                self.ctx.navigator.request(NavRequest::LoginSucceeded);
            }
            Err(e) => {
                log::warn!("❌ [LOGIN] Login rechazado: {}", e);
                self.update(|form| {
                    form.submitting = false;
                    form.error = Some(e.to_string());
                });
            }
        }
    }
}

impl PageController for LoginViewModel {
    fn page(&self) -> PageId {
        PageId::Login
    }

    fn mount(&self) {
        self.render();
    }

    fn render(&self) {
        self.ctx.render(PageView::Login(self.view()));
    }

    fn handle(&self, action: Action) {
        match action {
            Action::Login(AuthFormAction::Submit { username, password }) => {
                self.submit(username, password)
            }
            Action::Login(AuthFormAction::Switch) => self
                .ctx
                .navigator
                .request(NavRequest::NavigateTo(Route::to(PageId::Register))),
            other => ignore_foreign(self.page(), &other),
        }
    }

    fn unmount(&self) {
        self.ctx.detach();
    }
}
