// ============================================================================
// DASHBOARD VIEW - Cabecera + grilla de productos + overlay
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::viewmodels::{Action, DashboardAction, DashboardView};
use crate::views::products::{render_product_card, render_product_form};
use crate::views::shared::{render_header, render_notice, HeaderButton};
use crate::views::RenderCx;

pub fn render_dashboard_page(cx: &mut RenderCx, view: &DashboardView) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("dashboard").build();

    let header = render_header(
        cx,
        "ShopTrack Dashboard",
        &view.username,
        vec![
            HeaderButton::primary("Add Product", Action::Dashboard(DashboardAction::AddProduct)),
            HeaderButton::secondary("History", Action::Dashboard(DashboardAction::ShowHistory)),
            HeaderButton::secondary("Logout", Action::Dashboard(DashboardAction::Logout)),
        ],
    )?;
    page.append_child(&header)?;

    if let Some(notice) = &view.notice {
        append_child(&page, &render_notice(notice)?)?;
    }

    let grid = ElementBuilder::new("div")?.class("products-grid").build();
    if view.loading && view.products.is_empty() {
        let loading = ElementBuilder::new("p")?
            .class("loading")
            .text("Loading products...")
            .build();
        grid.append_child(&loading)?;
    } else if view.products.is_empty() {
        append_child(&grid, &render_empty_state()?)?;
    } else {
        for product in &view.products {
            let busy = view.busy_product.is_some();
            let card = render_product_card(
                cx,
                product,
                busy,
                view.quantity_for(product.id),
                view.card_error_for(product.id),
            )?;
            grid.append_child(&card)?;
        }
    }

    let content = ElementBuilder::new("div")?
        .class("dashboard-content")
        .child(&grid)?
        .build();
    page.append_child(&content)?;

    if let Some(form) = &view.overlay {
        append_child(&page, &render_product_form(cx, form, view.busy_product.is_some())?)?;
    }

    Ok(page)
}

fn render_empty_state() -> Result<Element, JsValue> {
    let title = ElementBuilder::new("h3")?.text("No products yet").build();
    let message = ElementBuilder::new("p")?
        .text("Add your first product to get started!")
        .build();
    Ok(ElementBuilder::new("div")?
        .class("empty-state")
        .children([&title, &message])?
        .build())
}
