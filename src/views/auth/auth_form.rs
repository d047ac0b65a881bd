// ============================================================================
// AUTH FORM - Login y registro comparten el mismo formulario
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, field_value, ElementBuilder};
use crate::state::PageId;
use crate::viewmodels::{Action, AuthFormAction, AuthFormView, NoticeKind};
use crate::views::shared::render_message;
use crate::views::RenderCx;

struct AuthCopy {
    title: &'static str,
    submit: &'static str,
    switch_text: &'static str,
    switch_link: &'static str,
}

fn copy_for(page: PageId) -> AuthCopy {
    match page {
        PageId::Register => AuthCopy {
            title: "Create Account",
            submit: "Register",
            switch_text: "Already have an account?",
            switch_link: "Login",
        },
        _ => AuthCopy {
            title: "Login to ShopTrack",
            submit: "Login",
            switch_text: "Don't have an account?",
            switch_link: "Register",
        },
    }
}

fn wrap(page: PageId, action: AuthFormAction) -> Action {
    match page {
        PageId::Register => Action::Register(action),
        _ => Action::Login(action),
    }
}

/// Renderizar pantalla de login o registro
pub fn render_auth_page(cx: &mut RenderCx, page: PageId, view: &AuthFormView) -> Result<Element, JsValue> {
    let copy = copy_for(page);

    let form = ElementBuilder::new("form")?.class("auth-form").build();

    let title = ElementBuilder::new("h2")?.text(copy.title).build();
    form.append_child(&title)?;

    if let Some(error) = &view.error {
        append_child(&form, &render_message(NoticeKind::Error, error)?)?;
    }
    if let Some(success) = &view.success {
        append_child(&form, &render_message(NoticeKind::Success, success)?)?;
    }

    append_child(&form, &field_group("username", "Username", "text", &view.username, view.submitting)?)?;
    append_child(&form, &field_group("password", "Password", "password", "", view.submitting)?)?;

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .flag("disabled", view.submitting)?
        .text(if view.submitting { "Loading..." } else { copy.submit })
        .build();
    form.append_child(&submit)?;

    let link = ElementBuilder::new("a")?
        .class("switch-link")
        .attr("href", "#")?
        .text(copy.switch_link)
        .build();
    let switch = ElementBuilder::new("p")?
        .class("form-switch")
        .text(&format!("{} ", copy.switch_text))
        .child(&link)?
        .build();
    form.append_child(&switch)?;

    cx.on_submit(&form, move |form| {
        wrap(
            page,
            AuthFormAction::Submit {
                username: field_value(form, "username"),
                password: field_value(form, "password"),
            },
        )
    })?;
    cx.on_click(&link, wrap(page, AuthFormAction::Switch))?;

    Ok(form)
}

fn field_group(name: &str, label: &str, kind: &str, value: &str, disabled: bool) -> Result<Element, JsValue> {
    let label = ElementBuilder::new("label")?
        .attr("for", name)?
        .text(label)
        .build();
    let input = ElementBuilder::new("input")?
        .attr("type", kind)?
        .attr("id", name)?
        .attr("name", name)?
        .attr("value", value)?
        .flag("required", true)?
        .flag("disabled", disabled)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .children([&label, &input])?
        .build())
}
