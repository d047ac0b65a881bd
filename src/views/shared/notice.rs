use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::viewmodels::{Notice, NoticeKind};

/// Banner transitorio de página
pub fn render_notice(notice: &Notice) -> Result<Element, JsValue> {
    render_message(notice.kind, &notice.message)
}

pub fn render_message(kind: NoticeKind, message: &str) -> Result<Element, JsValue> {
    let class = match kind {
        NoticeKind::Error => "error-message",
        NoticeKind::Success => "success-message",
    };
    Ok(ElementBuilder::new("div")?.class(class).text(message).build())
}
