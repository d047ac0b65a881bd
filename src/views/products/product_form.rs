// ============================================================================
// PRODUCT FORM - Overlay de alta / edición
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, field_value, ElementBuilder};
use crate::models::ProductFormValues;
use crate::viewmodels::{Action, DashboardAction, NoticeKind, ProductFormView};
use crate::views::shared::render_message;
use crate::views::RenderCx;

/// `busy`: otra operación de la página en curso, el envío queda deshabilitado
pub fn render_product_form(cx: &mut RenderCx, view: &ProductFormView, busy: bool) -> Result<Element, JsValue> {
    let form = ElementBuilder::new("form")?.class("product-form").build();

    let title = ElementBuilder::new("h2")?.text(view.title()).build();
    form.append_child(&title)?;

    if let Some(error) = &view.error {
        append_child(&form, &render_message(NoticeKind::Error, error)?)?;
    }

    let values = &view.values;
    append_child(&form, &input_group("name", "Product Name *", "text", &values.name, &[])?)?;
    append_child(&form, &input_group("stock", "Initial Stock *", "number", &values.stock, &[("min", "0")])?)?;
    let price = input_group(
        "price",
        "Price *",
        "number",
        &values.price,
        &[("min", "0"), ("step", "0.01")],
    )?;
    form.append_child(&price)?;
    append_child(&form, &textarea_group("description", "Description", &values.description)?)?;

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .flag("disabled", view.submitting || busy)?
        .text(view.submit_label())
        .build();
    let cancel = ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .attr("type", "button")?
        .text("Cancel")
        .build();
    let actions = ElementBuilder::new("div")?
        .class("form-actions")
        .children([&submit, &cancel])?
        .build();
    form.append_child(&actions)?;

    cx.on_submit(&form, |form| {
        Action::Dashboard(DashboardAction::SubmitProductForm(read_values(form)))
    })?;
    let scope = form.clone();
    cx.on(&form, "input", move |_| {
        Some(Action::Dashboard(DashboardAction::ProductFormEdited(read_values(&scope))))
    })?;
    cx.on_click(&cancel, Action::Dashboard(DashboardAction::CloseProductForm))?;

    Ok(ElementBuilder::new("div")?
        .class("form-overlay")
        .child(&form)?
        .build())
}

fn read_values(form: &Element) -> ProductFormValues {
    ProductFormValues {
        name: field_value(form, "name"),
        stock: field_value(form, "stock"),
        price: field_value(form, "price"),
        description: field_value(form, "description"),
    }
}

fn input_group(
    name: &str,
    label: &str,
    kind: &str,
    value: &str,
    extra: &[(&str, &str)],
) -> Result<Element, JsValue> {
    let label = ElementBuilder::new("label")?.attr("for", name)?.text(label).build();
    let mut input = ElementBuilder::new("input")?
        .attr("type", kind)?
        .attr("id", name)?
        .attr("name", name)?
        .attr("value", value)?;
    for (attr, attr_value) in extra {
        input = input.attr(attr, attr_value)?;
    }
    let input = input.build();

    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .children([&label, &input])?
        .build())
}

fn textarea_group(name: &str, label: &str, value: &str) -> Result<Element, JsValue> {
    let label = ElementBuilder::new("label")?.attr("for", name)?.text(label).build();
    let textarea = ElementBuilder::new("textarea")?
        .attr("id", name)?
        .attr("name", name)?
        .attr("rows", "3")?
        .text(value)
        .build();

    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .children([&label, &textarea])?
        .build())
}
