// ============================================================================
// TESTING - Dobles de prueba compartidos por los tests unitarios
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use async_trait::async_trait;
use futures::channel::oneshot;
use futures::executor::{LocalPool, LocalSpawner};
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;
use serde_json::{json, Value};
use crate::app::App;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::services::{HttpClient, HttpRequest, HttpResponse, Method, Scheduler, SessionStorage};
use crate::state::{AppState, NavRequest, Navigator};
use crate::utils::{STORAGE_KEY_TOKEN, STORAGE_KEY_USER};
use crate::viewmodels::{PageContext, PageView};
use crate::views::Renderer;

pub use futures::executor::block_on;

pub const TEST_BASE_URL: &str = "http://shoptrack.test";

// ============================================================================
// HTTP
// ============================================================================

enum Reply {
    Respond(HttpResponse),
    Fail(String),
    Held(oneshot::Receiver<HttpResponse>),
}

impl Reply {
    fn resolve(&self) -> Result<HttpResponse, AppError> {
        match self {
            Self::Respond(response) => Ok(response.clone()),
            Self::Fail(message) => Err(AppError::Transport(message.clone())),
            Self::Held(_) => Err(AppError::Transport("reply already taken".into())),
        }
    }
}

/// Respuesta retenida hasta que el test la libere
pub struct HeldReply(oneshot::Sender<HttpResponse>);

impl HeldReply {
    pub fn ok(self, status: u16, body: Value) {
        let _ = self.0.send(HttpResponse {
            status,
            body: body.to_string(),
        });
    }
}

/// Backend falso: rutas (método, path) -> respuesta. Sin ruta => 404.
#[derive(Default)]
pub struct MockHttpClient {
    routes: RefCell<HashMap<(Method, String), Reply>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: Value) {
        self.respond_raw(method, path, status, &body.to_string());
    }

    pub fn respond_raw(&self, method: Method, path: &str, status: u16, body: &str) {
        let response = HttpResponse {
            status,
            body: body.to_string(),
        };
        self.routes
            .borrow_mut()
            .insert((method, path.to_string()), Reply::Respond(response));
    }

    pub fn fail(&self, method: Method, path: &str, message: &str) {
        self.routes
            .borrow_mut()
            .insert((method, path.to_string()), Reply::Fail(message.to_string()));
    }

    /// La próxima llamada queda pendiente hasta `HeldReply::ok`
    pub fn hold(&self, method: Method, path: &str) -> HeldReply {
        let (tx, rx) = oneshot::channel();
        self.routes
            .borrow_mut()
            .insert((method, path.to_string()), Reply::Held(rx));
        HeldReply(tx)
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        let url = format!("{}{}", TEST_BASE_URL, path);
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .count()
    }
}

#[async_trait(?Send)]
impl HttpClient for MockHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, AppError> {
        let path = request
            .url
            .strip_prefix(TEST_BASE_URL)
            .unwrap_or(&request.url)
            .to_string();
        let key = (request.method, path);
        self.requests.borrow_mut().push(request);

        let held = {
            let mut routes = self.routes.borrow_mut();
            match routes.remove(&key) {
                Some(Reply::Held(rx)) => rx,
                Some(reply) => {
                    let result = reply.resolve();
                    routes.insert(key, reply);
                    return result;
                }
                None => {
                    return Ok(HttpResponse {
                        status: 404,
                        body: json!({"error": "not found"}).to_string(),
                    })
                }
            }
        };

        held.await
            .map_err(|_| AppError::Transport("request dropped".into()))
    }
}

// ============================================================================
// STORAGE
// ============================================================================

#[derive(Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
    failing: RefCell<HashSet<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }

    /// Simula cuota llena para esa clave
    pub fn fail_writes_to(&self, key: &str) {
        self.failing.borrow_mut().insert(key.to_string());
    }
}

impl SessionStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        if self.failing.borrow().contains(key) {
            return Err(AppError::Storage(format!("quota exceeded for '{}'", key)));
        }
        self.insert(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

// ============================================================================
// SCHEDULER (reloj manual)
// ============================================================================

struct Timer {
    due: u64,
    seq: u64,
    callback: Box<dyn FnOnce()>,
}

pub struct TestScheduler {
    pool: RefCell<LocalPool>,
    spawner: LocalSpawner,
    now: Cell<u64>,
    seq: Cell<u64>,
    timers: RefCell<Vec<Timer>>,
}

impl TestScheduler {
    pub fn new() -> Self {
        let pool = LocalPool::new();
        let spawner = pool.spawner();
        Self {
            pool: RefCell::new(pool),
            spawner,
            now: Cell::new(0),
            seq: Cell::new(0),
            timers: RefCell::new(Vec::new()),
        }
    }

    /// Ejecutar todas las tareas listas
    pub fn run(&self) {
        self.pool.borrow_mut().run_until_stalled();
    }

    /// Avanzar el reloj disparando los timers vencidos en orden
    pub fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;
        loop {
            self.run();
            let next = {
                let mut timers = self.timers.borrow_mut();
                let position = timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.seq))
                    .map(|(i, _)| i);
                position.map(|i| timers.remove(i))
            };
            match next {
                Some(timer) => {
                    self.now.set(timer.due);
                    (timer.callback)();
                }
                None => break,
            }
        }
        self.now.set(target);
    }
}

impl Scheduler for TestScheduler {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.spawner
            .spawn_local(task)
            .expect("test pool accepts tasks");
    }

    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        let seq = self.seq.get() + 1;
        self.seq.set(seq);
        self.timers.borrow_mut().push(Timer {
            due: self.now.get() + u64::from(delay_ms),
            seq,
            callback,
        });
    }
}

// ============================================================================
// RENDERER
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum RenderEvent {
    Clear,
    Render(PageView),
}

#[derive(Default)]
pub struct RecordingRenderer {
    events: RefCell<Vec<RenderEvent>>,
}

impl RecordingRenderer {
    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.borrow().clone()
    }

    pub fn render_count(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, RenderEvent::Render(_)))
            .count()
    }

    pub fn last_view(&self) -> Option<PageView> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            RenderEvent::Render(view) => Some(view.clone()),
            RenderEvent::Clear => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, view: &PageView) {
        self.events.borrow_mut().push(RenderEvent::Render(view.clone()));
    }

    fn clear(&self) {
        self.events.borrow_mut().push(RenderEvent::Clear);
    }
}

// ============================================================================
// HARNESS
// ============================================================================

/// AppState completo sobre dobles de prueba
pub struct Harness {
    pub http: Rc<MockHttpClient>,
    pub storage: Rc<MemoryStorage>,
    pub scheduler: Rc<TestScheduler>,
    pub renderer: Rc<RecordingRenderer>,
    pub state: AppState,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(Self::config())
    }

    pub fn config() -> AppConfig {
        AppConfig {
            backend_url: TEST_BASE_URL.to_string(),
            ..AppConfig::default()
        }
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self::build(config, MemoryStorage::new())
    }

    /// Sesión ya persistida antes del arranque
    pub fn signed_in(username: &str, token: &str) -> Self {
        let storage = MemoryStorage::new();
        storage.insert(STORAGE_KEY_USER, &json!({ "username": username }).to_string());
        storage.insert(STORAGE_KEY_TOKEN, token);
        Self::build(Self::config(), storage)
    }

    fn build(config: AppConfig, storage: MemoryStorage) -> Self {
        let http = Rc::new(MockHttpClient::new());
        let storage = Rc::new(storage);
        let scheduler = Rc::new(TestScheduler::new());
        let renderer = Rc::new(RecordingRenderer::default());
        let state = AppState::new(config, storage.clone(), http.clone(), scheduler.clone());
        Self {
            http,
            storage,
            scheduler,
            renderer,
            state,
        }
    }

    pub fn app(&self) -> Rc<App> {
        App::new(self.state.clone(), self.renderer.clone())
    }

    /// Página suelta: sus peticiones de navegación quedan registradas
    pub fn page<T>(&self, build: impl FnOnce(PageContext) -> T) -> (T, Rc<RefCell<Vec<NavRequest>>>) {
        let requests = Rc::new(RefCell::new(Vec::new()));
        let sink = requests.clone();
        let navigator = Navigator::new(1, Rc::new(move |_: u64, request: NavRequest| {
            sink.borrow_mut().push(request)
        }));
        let ctx = PageContext::new(self.state.clone(), self.renderer.clone(), navigator);
        (build(ctx), requests)
    }

    pub fn run(&self) {
        self.scheduler.run();
    }

    pub fn advance(&self, ms: u64) {
        self.scheduler.advance(ms);
    }
}
