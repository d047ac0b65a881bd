// ============================================================================
// PRODUCT CARD - Tarjeta de producto con acciones
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, confirm, field_value, ElementBuilder};
use crate::models::{Product, StockDirection};
use crate::utils::format_currency;
use crate::viewmodels::{Action, DashboardAction, NoticeKind, ProductRequest};
use crate::views::shared::render_message;
use crate::views::RenderCx;

const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this product?";

/// `busy`: hay una operación en curso en la página, todos los controles quedan deshabilitados.
/// `quantity`: lo último que se escribió en el input de cantidad.
pub fn render_product_card(
    cx: &mut RenderCx,
    product: &Product,
    busy: bool,
    quantity: &str,
    error: Option<&str>,
) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?
        .class("product-card")
        .attr("data-id", &product.id.to_string())?
        .build();

    // Header: nombre + Edit / Delete / History
    let title = ElementBuilder::new("h3")?.text(&product.name).build();
    let edit = button("btn btn-edit", "Edit", busy)?;
    let delete = button("btn btn-delete", "Delete", busy)?;
    let history = button("btn btn-history", "History", false)?;
    let actions = ElementBuilder::new("div")?
        .class("product-actions")
        .children([&edit, &delete, &history])?
        .build();
    let header = ElementBuilder::new("div")?
        .class("product-header")
        .children([&title, &actions])?
        .build();
    card.append_child(&header)?;

    append_child(&card, &render_info(product)?)?;

    if let Some(message) = error {
        append_child(&card, &render_message(NoticeKind::Error, message)?)?;
    }

    // Comprar / vender
    let quantity_input = ElementBuilder::new("input")?
        .class("stock-input")
        .attr("type", "number")?
        .attr("name", "quantity")?
        .attr("min", "1")?
        .attr("placeholder", "Quantity")?
        .attr("value", quantity)?
        .flag("disabled", busy)?
        .build();
    let buy = button("btn btn-buy", StockDirection::AddStock.label(), busy)?;
    let sell = button("btn btn-sell", StockDirection::RemoveStock.label(), busy)?;
    let input_group = ElementBuilder::new("div")?
        .class("stock-input-group")
        .children([&quantity_input, &buy, &sell])?
        .build();
    let stock_actions = ElementBuilder::new("div")?
        .class("stock-actions")
        .child(&input_group)?
        .build();
    card.append_child(&stock_actions)?;

    let id = product.id;
    cx.on_click(
        &edit,
        Action::Dashboard(DashboardAction::Product(ProductRequest::EditRequested {
            product: product.clone(),
        })),
    )?;
    cx.on(&delete, "click", move |_| {
        confirm(DELETE_CONFIRMATION).then(|| Action::Dashboard(DashboardAction::Delete(id)))
    })?;
    cx.on_click(&history, Action::Dashboard(DashboardAction::ShowProductHistory(id)))?;

    let scope = card.clone();
    cx.on(&quantity_input, "input", move |_| {
        Some(Action::Dashboard(DashboardAction::QuantityEdited {
            product_id: id,
            quantity: field_value(&scope, "quantity"),
        }))
    })?;

    for (el, direction) in [(&buy, StockDirection::AddStock), (&sell, StockDirection::RemoveStock)] {
        let scope = card.clone();
        cx.on(el, "click", move |_| {
            Some(Action::Dashboard(DashboardAction::Product(
                ProductRequest::StockAdjustRequested {
                    product_id: id,
                    direction,
                    quantity: field_value(&scope, "quantity"),
                },
            )))
        })?;
    }

    Ok(card)
}

fn render_info(product: &Product) -> Result<Element, JsValue> {
    let info = ElementBuilder::new("div")?.class("product-info").build();

    let stock = ElementBuilder::new("span")?
        .class("stock-amount")
        .text(&product.stock.to_string())
        .build();
    append_child(&info, &labelled("Stock: ", &stock)?)?;

    let price = ElementBuilder::new("span")?
        .class("price")
        .text(&format_currency(product.price))
        .build();
    append_child(&info, &labelled("Price: ", &price)?)?;

    if let Some(description) = product.description.as_deref().filter(|d| !d.is_empty()) {
        let text = ElementBuilder::new("span")?.text(description).build();
        append_child(&info, &labelled("Description: ", &text)?)?;
    }

    Ok(info)
}

fn labelled(label: &str, value: &Element) -> Result<Element, JsValue> {
    let strong = ElementBuilder::new("strong")?.text(label).build();
    Ok(ElementBuilder::new("p")?.children([&strong, value])?.build())
}

fn button(class: &str, label: &str, disabled: bool) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .class(class)
        .attr("type", "button")?
        .flag("disabled", disabled)?
        .text(label)
        .build())
}
