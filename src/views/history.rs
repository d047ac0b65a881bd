// ============================================================================
// HISTORY VIEW - Tabla de transacciones
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::models::Transaction;
use crate::utils::{format_currency, format_date};
use crate::viewmodels::{Action, HistoryAction, HistoryView};
use crate::views::shared::{render_header, render_notice, HeaderButton};
use crate::views::RenderCx;

const COLUMNS: [&str; 6] = ["Date", "Product", "Action", "Quantity", "Price", "Total"];

pub fn render_history_page(cx: &mut RenderCx, view: &HistoryView) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("history-page").build();

    let header = render_header(
        cx,
        "Transaction History",
        &view.username,
        vec![HeaderButton::secondary(
            "Back to Dashboard",
            Action::History(HistoryAction::Back),
        )],
    )?;
    page.append_child(&header)?;

    if let Some(notice) = &view.notice {
        append_child(&page, &render_notice(notice)?)?;
    }

    let container = ElementBuilder::new("div")?.class("history-container").build();
    if let Some(subtitle) = view.subtitle() {
        let h2 = ElementBuilder::new("h2")?.class("history-title").text(&subtitle).build();
        container.append_child(&h2)?;
    }

    if view.loading {
        let loading = ElementBuilder::new("p")?
            .class("loading")
            .text("Loading history...")
            .build();
        container.append_child(&loading)?;
    } else {
        append_child(&container, &render_table(&view.entries)?)?;
    }

    let content = ElementBuilder::new("div")?
        .class("history-content")
        .child(&container)?
        .build();
    page.append_child(&content)?;

    Ok(page)
}

fn render_table(entries: &[Transaction]) -> Result<Element, JsValue> {
    let head_row = ElementBuilder::new("tr")?.build();
    for column in COLUMNS {
        head_row.append_child(&ElementBuilder::new("th")?.text(column).build())?;
    }
    let thead = ElementBuilder::new("thead")?.child(&head_row)?.build();

    let tbody = ElementBuilder::new("tbody")?.build();
    if entries.is_empty() {
        let cell = ElementBuilder::new("td")?
            .class("empty-history")
            .attr("colspan", "6")?
            .text("No transactions found")
            .build();
        tbody.append_child(&ElementBuilder::new("tr")?.child(&cell)?.build())?;
    }
    for entry in entries {
        append_child(&tbody, &render_row(entry)?)?;
    }

    Ok(ElementBuilder::new("table")?
        .class("history-table")
        .children([&thead, &tbody])?
        .build())
}

fn render_row(entry: &Transaction) -> Result<Element, JsValue> {
    let action = entry.action.as_str();
    let badge = ElementBuilder::new("span")?
        .class(&format!("action-badge {}", action))
        .text(&action.to_uppercase())
        .build();

    let row = ElementBuilder::new("tr")?
        .class(&format!("transaction-row {}", action))
        .build();
    append_child(&row, &text_cell(&format_date(&entry.created))?)?;
    append_child(&row, &text_cell(&entry.product_name)?)?;
    row.append_child(&ElementBuilder::new("td")?.child(&badge)?.build())?;
    append_child(&row, &text_cell(&entry.quantity.to_string())?)?;
    append_child(&row, &text_cell(&format_currency(entry.price))?)?;
    // total derivado aquí, nunca guardado
    append_child(&row, &text_cell(&format_currency(entry.total()))?)?;
    Ok(row)
}

fn text_cell(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("td")?.text(text).build())
}
