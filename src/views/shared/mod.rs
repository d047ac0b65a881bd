pub mod header;
pub mod notice;

pub use header::{render_header, HeaderButton};
pub use notice::{render_message, render_notice};
