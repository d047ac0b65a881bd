pub mod dashboard;
pub mod product_card;
pub mod product_form;

pub use dashboard::render_dashboard_page;
pub use product_card::render_product_card;
pub use product_form::render_product_form;
