// ViewModels: un Page Controller por pantalla + el estado que entregan a las vistas

pub mod actions;
pub mod page;
pub mod view_state;

pub mod dashboard_viewmodel;
pub mod history_viewmodel;
pub mod login_viewmodel;
pub mod register_viewmodel;

pub use actions::{Action, AuthFormAction, DashboardAction, HistoryAction, ProductRequest};
pub use page::{PageContext, PageController};
pub use view_state::{
    AuthFormView, CardNotice, DashboardView, HistoryView, Notice, NoticeKind, OverlayMode,
    PageView, ProductFormView,
};

pub use dashboard_viewmodel::DashboardViewModel;
pub use history_viewmodel::HistoryViewModel;
pub use login_viewmodel::LoginViewModel;
pub use register_viewmodel::RegisterViewModel;
