pub mod api_client;
pub mod http;
pub mod scheduler;
pub mod storage;

pub use api_client::ApiClient;
pub use http::{GlooHttpClient, HttpClient, HttpRequest, HttpResponse, Method};
pub use scheduler::{BrowserScheduler, Scheduler};
pub use storage::{BrowserStorage, SessionStorage};
