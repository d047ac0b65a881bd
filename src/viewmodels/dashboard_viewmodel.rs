// ============================================================================
// DASHBOARD VIEWMODEL - Lista de productos, overlay de alta/edición y stock
// ============================================================================
// Sin mutaciones optimistas: cada operación OK recarga la lista del backend.
// Una sola mutación en vuelo por página (incluida su recarga).
// ============================================================================

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use crate::error::AppError;
use crate::models::{ProductDraft, ProductFormValues, ProductId, StockDirection};
use crate::state::{NavRequest, PageId, Route};
use crate::utils::{parse_quantity, validate_product};
use crate::viewmodels::page::{ignore_foreign, PageContext, PageController};
use crate::viewmodels::{
    Action, CardNotice, DashboardAction, DashboardView, Notice, NoticeKind, OverlayMode,
    PageView, ProductFormView, ProductRequest,
};

const OPERATION_IN_PROGRESS: &str = "Please wait for the current operation to finish";

#[derive(Clone)]
pub struct DashboardViewModel {
    ctx: PageContext,
    view: Rc<RefCell<DashboardView>>,
    in_flight: Rc<Cell<bool>>,
}

impl DashboardViewModel {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            view: Rc::new(RefCell::new(DashboardView::default())),
            in_flight: Rc::new(Cell::new(false)),
        }
    }

    pub fn view(&self) -> DashboardView {
        self.view.borrow().clone()
    }

    fn update(&self, change: impl FnOnce(&mut DashboardView)) {
        change(&mut self.view.borrow_mut());
        self.render();
    }

    /// Guardar lo que el usuario escribe sin redibujar (el DOM ya lo muestra)
    fn record(&self, change: impl FnOnce(&mut DashboardView)) {
        change(&mut self.view.borrow_mut());
    }

    // ========================================================================
    // CARGA
    // ========================================================================

    async fn load_products(&self) {
        let result = self.ctx.state.api.list_products().await;
        if !self.ctx.is_mounted() {
            return;
        }

        match result {
            Ok(products) => self.update(|view| {
                view.loading = false;
                view.products = products;
            }),
            Err(e) => {
                if self.session_rejected(&e) {
                    return;
                }
                log::error!("❌ [DASHBOARD] Error cargando productos: {}", e);
                self.view.borrow_mut().loading = false;
                self.show_notice(NoticeKind::Error, format!("Failed to load products: {}", e));
            }
        }
    }

    // ========================================================================
    // OVERLAY
    // ========================================================================

    /// Abrir el formulario; si ya había uno abierto se descarta
    fn open_form(&self, mode: OverlayMode) {
        let form = ProductFormView::new(self.ctx.next_id(), mode);
        self.update(|view| view.overlay = Some(form));
    }

    fn close_form(&self) {
        self.update(|view| view.overlay = None);
    }

    fn submit_form(&self, values: ProductFormValues) {
        let open = self.view.borrow().overlay.as_ref().map(|form| {
            let target = match &form.mode {
                OverlayMode::Add => None,
                OverlayMode::Edit(product) => Some(product.id),
            };
            (form.id, target)
        });
        let Some((form_id, target)) = open else {
            log::warn!("⚠️ [DASHBOARD] Envío de formulario sin overlay abierto");
            return;
        };

        let draft = match validate_product(&values) {
            Ok(draft) => draft,
            Err(e) => {
                self.update_form(form_id, |form| {
                    form.values = values;
                    form.error = Some(e.to_string());
                });
                return;
            }
        };

        if !self.begin_mutation() {
            self.update_form(form_id, |form| {
                form.values = values;
                form.error = Some(OPERATION_IN_PROGRESS.to_string());
            });
            return;
        }

        self.update_form(form_id, |form| {
            form.values = values;
            form.submitting = true;
            form.error = None;
        });

        let vm = self.clone();
        self.spawn_mutation(async move { vm.save_product(form_id, target, draft).await });
    }

    async fn save_product(&self, form_id: u64, target: Option<ProductId>, draft: ProductDraft) {
        let result = match target {
            None => self.ctx.state.api.create_product(&draft).await,
            Some(id) => self.ctx.state.api.update_product(id, &draft).await,
        };
        if !self.ctx.is_mounted() {
            return;
        }

        match result {
            Ok(()) => {
                log::info!("✅ [DASHBOARD] Producto '{}' guardado", draft.name);
                {
                    let mut view = self.view.borrow_mut();
                    if view.overlay.as_ref().is_some_and(|form| form.id == form_id) {
                        view.overlay = None;
                    }
                }
                self.render();
                self.load_products().await;
            }
            Err(e) => {
                if self.session_rejected(&e) {
                    return;
                }
                self.update_form(form_id, |form| {
                    form.submitting = false;
                    form.error = Some(e.to_string());
                });
            }
        }
    }

    fn edit_form(&self, values: ProductFormValues) {
        self.record(|view| {
            if let Some(form) = view.overlay.as_mut().filter(|form| !form.submitting) {
                form.values = values;
            }
        });
    }

    /// Modificar el overlay solo si sigue siendo el mismo formulario
    fn update_form(&self, form_id: u64, change: impl FnOnce(&mut ProductFormView)) {
        self.update(|view| {
            if let Some(form) = view.overlay.as_mut().filter(|form| form.id == form_id) {
                change(form);
            }
        });
    }

    // ========================================================================
    // TARJETAS
    // ========================================================================

    fn edit_quantity(&self, product_id: ProductId, quantity: String) {
        self.record(|view| {
            view.quantities.insert(product_id, quantity);
        });
    }

    fn adjust_stock(&self, product_id: ProductId, direction: StockDirection, raw_quantity: &str) {
        let quantity = match parse_quantity(raw_quantity) {
            Ok(quantity) => quantity,
            Err(e) => {
                self.show_card_error(product_id, e.to_string());
                return;
            }
        };

        if !self.begin_mutation() {
            return;
        }
        self.update(|view| {
            view.busy_product = Some(product_id);
            view.card_error = None;
        });

        let vm = self.clone();
        self.spawn_mutation(async move {
            let api = &vm.ctx.state.api;
            let result = match direction {
                StockDirection::AddStock => api.add_stock(product_id, quantity).await,
                StockDirection::RemoveStock => api.remove_stock(product_id, quantity).await,
            };
            if !vm.ctx.is_mounted() {
                return;
            }

            match result {
                Ok(()) => {
                    log::info!("📦 [DASHBOARD] {} x{} en producto {}", direction.label(), quantity, product_id);
                    vm.view.borrow_mut().quantities.remove(&product_id);
                    vm.load_products().await;
                    vm.update(|view| view.busy_product = None);
                }
                Err(e) => {
                    if vm.session_rejected(&e) {
                        return;
                    }
                    vm.view.borrow_mut().busy_product = None;
                    vm.show_card_error(product_id, e.to_string());
                }
            }
        });
    }

    /// La confirmación (`window.confirm`) ya la hizo la vista
    fn delete_product(&self, product_id: ProductId) {
        if !self.begin_mutation() {
            return;
        }
        self.update(|view| view.busy_product = Some(product_id));

        let vm = self.clone();
        self.spawn_mutation(async move {
            let result = vm.ctx.state.api.delete_product(product_id).await;
            if !vm.ctx.is_mounted() {
                return;
            }

            match result {
                Ok(()) => {
                    log::info!("🗑️ [DASHBOARD] Producto {} eliminado", product_id);
                    vm.view.borrow_mut().quantities.remove(&product_id);
                    vm.load_products().await;
                    vm.update(|view| view.busy_product = None);
                }
                Err(e) => {
                    if vm.session_rejected(&e) {
                        return;
                    }
                    vm.view.borrow_mut().busy_product = None;
                    vm.show_notice(NoticeKind::Error, format!("Failed to delete product: {}", e));
                }
            }
        });
    }

    // ========================================================================
    // AVISOS
    // ========================================================================

    fn show_notice(&self, kind: NoticeKind, message: String) {
        let id = self.ctx.next_id();
        self.update(|view| view.notice = Some(Notice { id, kind, message }));

        let vm = self.clone();
        self.ctx.after(self.ctx.state.config.notice_timeout_ms, move || {
            if !vm.ctx.is_mounted() {
                return;
            }
            let expired = vm.view.borrow().notice.as_ref().is_some_and(|n| n.id == id);
            if expired {
                vm.update(|view| view.notice = None);
            }
        });
    }

    fn show_card_error(&self, product_id: ProductId, message: String) {
        let id = self.ctx.next_id();
        self.update(|view| {
            view.card_error = Some(CardNotice {
                id,
                product_id,
                message,
            })
        });

        let vm = self.clone();
        self.ctx.after(self.ctx.state.config.notice_timeout_ms, move || {
            if !vm.ctx.is_mounted() {
                return;
            }
            let expired = vm.view.borrow().card_error.as_ref().is_some_and(|n| n.id == id);
            if expired {
                vm.update(|view| view.card_error = None);
            }
        });
    }

    // ========================================================================
    // HELPERS
    // ========================================================================

    fn begin_mutation(&self) -> bool {
        if self.in_flight.get() {
            log::warn!("⏳ [DASHBOARD] Operación en curso, acción ignorada");
            return false;
        }
        self.in_flight.set(true);
        true
    }

    fn spawn_mutation(&self, task: impl Future<Output = ()> + 'static) {
        let in_flight = self.in_flight.clone();
        self.ctx.spawn(async move {
            task.await;
            in_flight.set(false);
        });
    }

    /// 401 => el App vuelve a Login
    fn session_rejected(&self, error: &AppError) -> bool {
        if error.is_unauthorized() {
            log::warn!("🔒 [DASHBOARD] Token rechazado por el backend");
            self.ctx.navigator.request(NavRequest::SessionRejected);
            return true;
        }
        false
    }

    fn navigate(&self, route: Route) {
        self.ctx.navigator.request(NavRequest::NavigateTo(route));
    }
}

impl PageController for DashboardViewModel {
    fn page(&self) -> PageId {
        PageId::Dashboard
    }

    fn mount(&self) {
        log::info!("📊 [DASHBOARD] Montando dashboard");
        let username = self.ctx.state.session.display_name();
        self.update(|view| {
            view.username = username;
            view.loading = true;
        });

        let vm = self.clone();
        self.ctx.spawn(async move { vm.load_products().await });
    }

    fn render(&self) {
        self.ctx.render(PageView::Dashboard(self.view()));
    }

    fn handle(&self, action: Action) {
        let action = match action {
            Action::Dashboard(action) => action,
            other => return ignore_foreign(self.page(), &other),
        };

        match action {
            DashboardAction::AddProduct => self.open_form(OverlayMode::Add),
            DashboardAction::Product(ProductRequest::EditRequested { product }) => {
                self.open_form(OverlayMode::Edit(product))
            }
            DashboardAction::Product(ProductRequest::StockAdjustRequested {
                product_id,
                direction,
                quantity,
            }) => self.adjust_stock(product_id, direction, &quantity),
            DashboardAction::Delete(product_id) => self.delete_product(product_id),
            DashboardAction::SubmitProductForm(values) => self.submit_form(values),
            DashboardAction::ProductFormEdited(values) => self.edit_form(values),
            DashboardAction::QuantityEdited {
                product_id,
                quantity,
            } => self.edit_quantity(product_id, quantity),
            DashboardAction::CloseProductForm => self.close_form(),
            DashboardAction::ShowHistory => self.navigate(Route::to(PageId::History)),
            DashboardAction::ShowProductHistory(product_id) => {
                self.navigate(Route::product_history(product_id))
            }
            DashboardAction::Logout => self.ctx.navigator.request(NavRequest::LogoutRequested),
        }
    }

    fn unmount(&self) {
        self.ctx.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Product, User};
    use crate::services::Method;
    use crate::testing::Harness;
    use serde_json::json;

    fn pen() -> Product {
        Product {
            id: 7,
            name: "Pen".into(),
            stock: 4,
            price: 2.5,
            description: None,
        }
    }

    fn mounted(h: &Harness) -> (DashboardViewModel, Rc<RefCell<Vec<NavRequest>>>) {
        h.state.session.set_session(User::named("alice"), "t1");
        h.http.respond(
            Method::Get,
            "/stock/",
            200,
            json!([{"id": 7, "name": "Pen", "stock": 4, "price": "2.50"}]),
        );
        let (vm, nav) = h.page(DashboardViewModel::new);
        vm.mount();
        h.run();
        (vm, nav)
    }

    fn dashboard(action: DashboardAction) -> Action {
        Action::Dashboard(action)
    }

    fn stock(direction: StockDirection, quantity: &str) -> Action {
        dashboard(DashboardAction::Product(ProductRequest::StockAdjustRequested {
            product_id: 7,
            direction,
            quantity: quantity.into(),
        }))
    }

    fn form(name: &str, stock: &str, price: &str) -> ProductFormValues {
        ProductFormValues {
            name: name.into(),
            stock: stock.into(),
            price: price.into(),
            description: String::new(),
        }
    }

    #[test]
    fn mount_loads_products_with_welcome_name() {
        let h = Harness::new();
        let (vm, _) = mounted(&h);

        let view = vm.view();
        assert_eq!(view.username, "alice");
        assert!(!view.loading);
        assert_eq!(view.products, vec![pen()]);
        assert_eq!(
            h.http.last_request().unwrap().header("Authorization"),
            Some("Bearer t1")
        );
    }

    #[test]
    fn invalid_product_form_issues_no_request() {
        let h = Harness::new();
        let (vm, _) = mounted(&h);
        let before = h.http.requests().len();

        vm.handle(dashboard(DashboardAction::AddProduct));
        vm.handle(dashboard(DashboardAction::SubmitProductForm(form("", "5", "10"))));
        h.run();

        assert_eq!(h.http.requests().len(), before);
        let overlay = vm.view().overlay.unwrap();
        assert_eq!(
            overlay.error.as_deref(),
            Some("Product name is required")
        );
        assert_eq!(overlay.values.stock, "5");
    }

    #[test]
    fn buy_adds_stock_then_reloads_once() {
        let h = Harness::new();
        h.http.respond(Method::Post, "/stock/7/stock", 200, json!({"ok": true}));
        let (vm, _) = mounted(&h);

        vm.handle(stock(StockDirection::AddStock, "3"));
        assert_eq!(vm.view().busy_product, Some(7));
        h.run();

        assert_eq!(h.http.count(Method::Post, "/stock/7/stock"), 1);
        assert_eq!(h.http.count(Method::Delete, "/stock/7/stock"), 0);
        assert_eq!(h.http.count(Method::Get, "/stock/"), 2);
        let add = h
            .http
            .requests()
            .into_iter()
            .find(|r| r.method == Method::Post)
            .unwrap();
        assert_eq!(add.body.as_deref(), Some(r#"{"stock":3}"#));
        assert_eq!(vm.view().busy_product, None);
    }

    #[test]
    fn sell_uses_remove_stock() {
        let h = Harness::new();
        h.http.respond(Method::Delete, "/stock/7/stock", 200, json!({}));
        let (vm, _) = mounted(&h);

        vm.handle(stock(StockDirection::RemoveStock, "2"));
        h.run();

        assert_eq!(h.http.count(Method::Delete, "/stock/7/stock"), 1);
        assert_eq!(h.http.count(Method::Post, "/stock/7/stock"), 0);
    }

    #[test]
    fn bad_quantity_shows_card_error_without_request() {
        let h = Harness::new();
        let (vm, _) = mounted(&h);
        let before = h.http.requests().len();

        for raw in ["0", "-1", "1.5", "abc", ""] {
            vm.handle(stock(StockDirection::AddStock, raw));
        }
        h.run();

        assert_eq!(h.http.requests().len(), before);
        assert_eq!(
            vm.view().card_error_for(7),
            Some("Quantity must be a positive whole number")
        );
    }

    #[test]
    fn failed_adjustment_reenables_the_card() {
        let h = Harness::new();
        h.http.respond(Method::Delete, "/stock/7/stock", 400, json!({"error": "Insufficient stock"}));
        let (vm, _) = mounted(&h);

        vm.handle(stock(StockDirection::RemoveStock, "99"));
        h.run();

        let view = vm.view();
        assert_eq!(view.busy_product, None);
        assert_eq!(view.card_error_for(7), Some("Insufficient stock"));
        assert_eq!(h.http.count(Method::Get, "/stock/"), 1);
    }

    #[test]
    fn second_mutation_waits_for_the_first() {
        let h = Harness::new();
        let reply = h.http.hold(Method::Post, "/stock/7/stock");
        let (vm, _) = mounted(&h);

        vm.handle(stock(StockDirection::AddStock, "1"));
        h.run();
        vm.handle(stock(StockDirection::AddStock, "1"));
        vm.handle(dashboard(DashboardAction::Delete(7)));
        h.run();
        assert_eq!(h.http.count(Method::Post, "/stock/7/stock"), 1);
        assert_eq!(h.http.count(Method::Delete, "/stock/7"), 0);

        reply.ok(200, json!({}));
        h.run();
        h.http.respond(Method::Post, "/stock/7/stock", 200, json!({}));
        vm.handle(stock(StockDirection::AddStock, "1"));
        h.run();
        assert_eq!(h.http.count(Method::Post, "/stock/7/stock"), 2);
    }

    fn rendered_dashboard(h: &Harness) -> DashboardView {
        match h.renderer.last_view() {
            Some(PageView::Dashboard(view)) => view,
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn notice_expiry_keeps_typed_form_and_quantities() {
        let h = Harness::new();
        h.http.respond(Method::Delete, "/stock/7", 500, json!({"error": "db locked"}));
        let (vm, _) = mounted(&h);

        vm.handle(dashboard(DashboardAction::Delete(7)));
        h.run();
        h.advance(1000);
        vm.handle(dashboard(DashboardAction::AddProduct));
        vm.handle(dashboard(DashboardAction::ProductFormEdited(form("Pencil", "3", ""))));
        vm.handle(dashboard(DashboardAction::QuantityEdited {
            product_id: 7,
            quantity: "12".into(),
        }));
        let renders = h.renderer.render_count();

        h.advance(4000);
        assert_eq!(h.renderer.render_count(), renders + 1);
        let view = rendered_dashboard(&h);
        assert!(view.notice.is_none());
        assert_eq!(view.overlay.as_ref().unwrap().values, form("Pencil", "3", ""));
        assert_eq!(view.quantity_for(7), "12");
    }

    #[test]
    fn typing_does_not_redraw() {
        let h = Harness::new();
        let (vm, _) = mounted(&h);
        vm.handle(dashboard(DashboardAction::AddProduct));
        let renders = h.renderer.render_count();

        vm.handle(dashboard(DashboardAction::ProductFormEdited(form("P", "", ""))));
        vm.handle(dashboard(DashboardAction::QuantityEdited {
            product_id: 7,
            quantity: "1".into(),
        }));

        assert_eq!(h.renderer.render_count(), renders);
        assert_eq!(vm.view().overlay.unwrap().values.name, "P");
    }

    #[test]
    fn successful_adjustment_clears_the_quantity() {
        let h = Harness::new();
        h.http.respond(Method::Post, "/stock/7/stock", 200, json!({}));
        let (vm, _) = mounted(&h);

        vm.handle(dashboard(DashboardAction::QuantityEdited {
            product_id: 7,
            quantity: "3".into(),
        }));
        vm.handle(stock(StockDirection::AddStock, "3"));
        h.run();

        assert_eq!(rendered_dashboard(&h).quantity_for(7), "");
    }

    #[test]
    fn form_submit_during_mutation_explains_the_wait() {
        let h = Harness::new();
        let reply = h.http.hold(Method::Post, "/stock/7/stock");
        let (vm, _) = mounted(&h);

        vm.handle(stock(StockDirection::AddStock, "1"));
        h.run();
        vm.handle(dashboard(DashboardAction::AddProduct));
        vm.handle(dashboard(DashboardAction::SubmitProductForm(form("Pencil", "1", "2"))));
        h.run();

        assert_eq!(h.http.count(Method::Post, "/stock/"), 0);
        let overlay = vm.view().overlay.unwrap();
        assert!(!overlay.submitting);
        assert_eq!(
            overlay.error.as_deref(),
            Some("Please wait for the current operation to finish")
        );
        assert_eq!(overlay.values.name, "Pencil");

        reply.ok(200, json!({}));
        h.run();
        h.http.respond(Method::Post, "/stock/", 201, json!({"id": 8}));
        vm.handle(dashboard(DashboardAction::SubmitProductForm(form("Pencil", "1", "2"))));
        h.run();
        assert_eq!(h.http.count(Method::Post, "/stock/"), 1);
        assert!(vm.view().overlay.is_none());
    }

    #[test]
    fn only_one_overlay_at_a_time() {
        let h = Harness::new();
        let (vm, _) = mounted(&h);

        vm.handle(dashboard(DashboardAction::AddProduct));
        vm.handle(dashboard(DashboardAction::Product(ProductRequest::EditRequested {
            product: pen(),
        })));

        let overlay = vm.view().overlay.unwrap();
        assert_eq!(overlay.mode, OverlayMode::Edit(pen()));
        assert_eq!(overlay.values.name, "Pen");
        assert_eq!(overlay.title(), "Edit Product");

        vm.handle(dashboard(DashboardAction::CloseProductForm));
        assert!(vm.view().overlay.is_none());
    }

    #[test]
    fn saved_edit_closes_overlay_and_reloads() {
        let h = Harness::new();
        h.http.respond(Method::Put, "/stock/7", 200, json!({"id": 7}));
        let (vm, _) = mounted(&h);

        vm.handle(dashboard(DashboardAction::Product(ProductRequest::EditRequested {
            product: pen(),
        })));
        vm.handle(dashboard(DashboardAction::SubmitProductForm(form(" Pencil ", "10", "1.25"))));
        assert!(vm.view().overlay.unwrap().submitting);
        h.run();

        assert!(vm.view().overlay.is_none());
        assert_eq!(h.http.count(Method::Get, "/stock/"), 2);
        let put = h
            .http
            .requests()
            .into_iter()
            .find(|r| r.method == Method::Put)
            .unwrap();
        let body: serde_json::Value = serde_json::from_str(put.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"name": "Pencil", "stock": 10, "price": 1.25, "description": null}));
    }

    #[test]
    fn failed_create_keeps_overlay_open_with_error() {
        let h = Harness::new();
        h.http.respond(Method::Post, "/stock/", 400, json!({"error": "Product already exists"}));
        let (vm, _) = mounted(&h);

        vm.handle(dashboard(DashboardAction::AddProduct));
        vm.handle(dashboard(DashboardAction::SubmitProductForm(form("Pen", "1", "2"))));
        h.run();

        let overlay = vm.view().overlay.unwrap();
        assert!(!overlay.submitting);
        assert_eq!(overlay.error.as_deref(), Some("Product already exists"));
        assert_eq!(h.http.count(Method::Get, "/stock/"), 1);
    }

    #[test]
    fn load_failure_notice_dismisses_itself() {
        let h = Harness::new();
        h.http.fail(Method::Get, "/stock/", "Failed to fetch");
        let (vm, _) = h.page(DashboardViewModel::new);
        vm.mount();
        h.run();

        let notice = vm.view().notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "Failed to load products: Network error: Failed to fetch");
        assert!(!vm.view().loading);

        h.advance(5000);
        assert!(vm.view().notice.is_none());
    }

    #[test]
    fn newer_notice_outlives_older_timer() {
        let h = Harness::new();
        h.http.respond(Method::Delete, "/stock/7", 500, json!({"error": "db locked"}));
        let (vm, _) = mounted(&h);

        vm.handle(dashboard(DashboardAction::Delete(7)));
        h.run();
        h.advance(3000);
        vm.handle(dashboard(DashboardAction::Delete(7)));
        h.run();

        h.advance(2000);
        let notice = vm.view().notice.unwrap();
        assert_eq!(notice.message, "Failed to delete product: db locked");

        h.advance(3000);
        assert!(vm.view().notice.is_none());
    }

    #[test]
    fn unauthorized_response_rejects_the_session() {
        let h = Harness::new();
        h.http.respond(Method::Get, "/stock/", 401, json!({"error": "token expired"}));
        let (vm, nav) = h.page(DashboardViewModel::new);
        vm.mount();
        h.run();

        assert_eq!(nav.borrow().as_slice(), &[NavRequest::SessionRejected]);
        assert!(vm.view().notice.is_none());
    }

    #[test]
    fn header_and_card_links_request_navigation() {
        let h = Harness::new();
        let (vm, nav) = mounted(&h);

        vm.handle(dashboard(DashboardAction::ShowHistory));
        vm.handle(dashboard(DashboardAction::ShowProductHistory(7)));
        vm.handle(dashboard(DashboardAction::Logout));

        assert_eq!(
            nav.borrow().as_slice(),
            &[
                NavRequest::NavigateTo(Route::to(PageId::History)),
                NavRequest::NavigateTo(Route::product_history(7)),
                NavRequest::LogoutRequested,
            ]
        );
    }
}
