// ============================================================================
// HEADER - Cabecera común de Dashboard e History
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::viewmodels::Action;
use crate::views::RenderCx;

pub struct HeaderButton {
    pub label: &'static str,
    pub class: &'static str,
    pub action: Action,
}

impl HeaderButton {
    pub fn primary(label: &'static str, action: Action) -> Self {
        Self { label, class: "btn btn-primary", action }
    }

    pub fn secondary(label: &'static str, action: Action) -> Self {
        Self { label, class: "btn btn-secondary", action }
    }
}

/// `<header>` con título, saludo y botones de navegación
pub fn render_header(
    cx: &mut RenderCx,
    title: &str,
    username: &str,
    buttons: Vec<HeaderButton>,
) -> Result<Element, JsValue> {
    let greeting = ElementBuilder::new("span")?
        .text(&format!("Welcome, {}!", username))
        .build();

    let user_info = ElementBuilder::new("div")?
        .class("user-info")
        .child(&greeting)?
        .build();

    for button in buttons {
        let el = ElementBuilder::new("button")?
            .class(button.class)
            .attr("type", "button")?
            .text(button.label)
            .build();
        cx.on_click(&el, button.action)?;
        user_info.append_child(&el)?;
    }

    let heading = ElementBuilder::new("h1")?.text(title).build();

    Ok(ElementBuilder::new("header")?
        .class("dashboard-header")
        .child(&heading)?
        .child(&user_info)?
        .build())
}
