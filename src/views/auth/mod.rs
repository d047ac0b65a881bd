pub mod auth_form;

pub use auth_form::render_auth_page;
