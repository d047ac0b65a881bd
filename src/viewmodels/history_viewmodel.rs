// ============================================================================
// HISTORY VIEWMODEL - Transacciones (solo lectura)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::state::{NavRequest, PageId, Route, RouteParams};
use crate::viewmodels::page::{ignore_foreign, PageContext, PageController};
use crate::viewmodels::{Action, HistoryAction, HistoryView, Notice, NoticeKind, PageView};

#[derive(Clone)]
pub struct HistoryViewModel {
    ctx: PageContext,
    view: Rc<RefCell<HistoryView>>,
}

impl HistoryViewModel {
    pub fn new(ctx: PageContext, params: RouteParams) -> Self {
        let view = HistoryView {
            product: params.product,
            ..HistoryView::default()
        };
        Self {
            ctx,
            view: Rc::new(RefCell::new(view)),
        }
    }

    pub fn view(&self) -> HistoryView {
        self.view.borrow().clone()
    }

    fn update(&self, change: impl FnOnce(&mut HistoryView)) {
        change(&mut self.view.borrow_mut());
        self.render();
    }

    async fn load(&self) {
        let product = self.view.borrow().product;
        let api = &self.ctx.state.api;
        let result = match product {
            Some(id) => api.product_history(id).await,
            None => api.history().await,
        };
        if !self.ctx.is_mounted() {
            return;
        }

        match result {
            Ok(entries) => {
                log::info!("📜 [HISTORY] {} transacciones", entries.len());
                self.update(|view| {
                    view.loading = false;
                    view.entries = entries;
                });
            }
            Err(e) if e.is_unauthorized() => {
                self.ctx.navigator.request(NavRequest::SessionRejected);
            }
            Err(e) => {
                log::error!("❌ [HISTORY] Error cargando historial: {}", e);
                let notice = Notice {
                    id: self.ctx.next_id(),
                    kind: NoticeKind::Error,
                    message: format!("Failed to load history: {}", e),
                };
                let id = notice.id;
                self.update(|view| {
                    view.loading = false;
                    view.notice = Some(notice);
                });

                let vm = self.clone();
                self.ctx.after(self.ctx.state.config.notice_timeout_ms, move || {
                    let expired = vm.view.borrow().notice.as_ref().is_some_and(|n| n.id == id);
                    if expired && vm.ctx.is_mounted() {
                        vm.update(|view| view.notice = None);
                    }
                });
            }
        }
    }
}

impl PageController for HistoryViewModel {
    fn page(&self) -> PageId {
        PageId::History
    }

    fn mount(&self) {
        let username = self.ctx.state.session.display_name();
        self.update(|view| {
            view.username = username;
            view.loading = true;
        });

        let vm = self.clone();
        self.ctx.spawn(async move { vm.load().await });
    }

    fn render(&self) {
        self.ctx.render(PageView::History(self.view()));
    }

    fn handle(&self, action: Action) {
        match action {
            Action::History(HistoryAction::Back) => self
                .ctx
                .navigator
                .request(NavRequest::NavigateTo(Route::to(PageId::Dashboard))),
            other => ignore_foreign(self.page(), &other),
        }
    }

    fn unmount(&self) {
        self.ctx.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TradeAction;
    use crate::services::Method;
    use crate::testing::Harness;
    use serde_json::json;

    fn entries() -> serde_json::Value {
        json!([
            {"created": "2025-01-05T15:04:00Z", "product_name": "Pen", "action": "buy", "quantity": 3, "price": "2.50"},
            {"created": "2025-01-06T09:00:00Z", "product_name": "Pen", "action": "sell", "quantity": 1, "price": 4}
        ])
    }

    #[test]
    fn loads_all_transactions_on_mount() {
        let h = Harness::new();
        h.http.respond(Method::Get, "/stock/history", 200, entries());
        let (vm, _) = h.page(|ctx| HistoryViewModel::new(ctx, RouteParams::default()));

        vm.mount();
        assert!(vm.view().loading);
        h.run();

        let view = vm.view();
        assert!(!view.loading);
        assert_eq!(view.entries.len(), 2);
        assert_eq!(view.entries[0].action, TradeAction::Buy);
        assert_eq!(view.entries[0].total(), 7.5);
        assert_eq!(view.subtitle(), None);
    }

    #[test]
    fn product_route_loads_that_product_only() {
        let h = Harness::new();
        h.http.respond(Method::Get, "/stock/7/history", 200, entries());
        let (vm, _) = h.page(|ctx| HistoryViewModel::new(ctx, RouteParams { product: Some(7) }));

        vm.mount();
        h.run();

        assert_eq!(h.http.count(Method::Get, "/stock/history"), 0);
        assert_eq!(vm.view().subtitle().as_deref(), Some("Product: Pen"));
    }

    #[test]
    fn failure_becomes_a_notice() {
        let h = Harness::new();
        h.http.respond(Method::Get, "/stock/history", 500, json!({"error": "db down"}));
        let (vm, _) = h.page(|ctx| HistoryViewModel::new(ctx, RouteParams::default()));

        vm.mount();
        h.run();

        let view = vm.view();
        assert!(view.entries.is_empty());
        assert_eq!(view.notice.unwrap().message, "Failed to load history: db down");
    }

    #[test]
    fn back_returns_to_dashboard() {
        let h = Harness::new();
        let (vm, nav) = h.page(|ctx| HistoryViewModel::new(ctx, RouteParams::default()));
        vm.handle(Action::History(HistoryAction::Back));
        assert_eq!(
            nav.borrow().as_slice(),
            &[NavRequest::NavigateTo(Route::to(PageId::Dashboard))]
        );
    }
}
