// ============================================================================
// REGISTER VIEWMODEL - Alta de usuario
// ============================================================================
// Registro OK -> aviso + vuelta a Login tras `register_redirect_ms`,
// o login automático si `auto_login_after_register` está activo.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::Credentials;
use crate::state::{NavRequest, PageId, Route};
use crate::utils::{validate_credentials, REGISTER_SUCCESS_MESSAGE};
use crate::viewmodels::page::{ignore_foreign, PageContext, PageController};
use crate::viewmodels::{Action, AuthFormAction, AuthFormView, PageView};

#[derive(Clone)]
pub struct RegisterViewModel {
    ctx: PageContext,
    form: Rc<RefCell<AuthFormView>>,
}

impl RegisterViewModel {
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
            log::warn!("⚠️ [REGISTER] Registro ya en curso, ignorando envío");
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
        self.ctx.spawn(async move { vm.register(credentials).await });
    }

    async fn register(&self, credentials: Credentials) {
        let result = self.ctx.state.api.register(&credentials).await;
        if !self.ctx.is_mounted() {
            log::debug!("🚫 [REGISTER] Respuesta descartada: página desmontada");
            return;
        }

        if let Err(e) = result {
            log::warn!("❌ [REGISTER] Registro rechazado: {}", e);
            self.update(|form| {
                form.submitting = false;
                form.error = Some(e.to_string());
            });
            return;
        }

        log::info!("✅ [REGISTER] Usuario {} registrado", credentials.username);

        if self.ctx.state.config.auto_login_after_register {
            match self.ctx.state.api.login(&credentials).await {
                Ok(_) if !self.ctx.is_mounted() => return,
                Ok(response) => {
                    self.ctx.state.session.set_session(response.user, response.token);
                    self.ctx.navigator.request(NavRequest::RegisterThenLoginSucceeded);
                    return;
                }
                Err(e) => {
                    // la cuenta existe: queda el login manual
                    log::warn!("⚠️ [REGISTER] Login automático falló: {}", e);
                    if !self.ctx.is_mounted() {
                        return;
                    }
                }
            }
        }

        self.update(|form| {
            form.submitting = false;
            form.success = Some(REGISTER_SUCCESS_MESSAGE.to_string());
        });
        self.schedule_login_redirect();
    }

    fn schedule_login_redirect(&self) {
        let ctx = self.ctx.clone();
        self.ctx.after(self.ctx.state.config.register_redirect_ms, move || {
            if ctx.is_mounted() {
                ctx.navigator
                    .request(NavRequest::NavigateTo(Route::to(PageId::Login)));
            }
        });
    }
}

impl PageController for RegisterViewModel {
    fn page(&self) -> PageId {
        PageId::Register
    }

    fn mount(&self) {
        self.render();
    }

    fn render(&self) {
        self.ctx.render(PageView::Register(self.view()));
    }

    fn handle(&self, action: Action) {
        match action {
            Action::Register(AuthFormAction::Submit { username, password }) => {
                self.submit(username, password)
            }
            Action::Register(AuthFormAction::Switch) => self
                .ctx
                .navigator
                .request(NavRequest::NavigateTo(Route::to(PageId::Login))),
            other => ignore_foreign(self.page(), &other),
        }
    }

    fn unmount(&self) {
        self.ctx.detach();
    }
}
