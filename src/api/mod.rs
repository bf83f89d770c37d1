pub mod modal;
pub mod search;
pub mod server;

use axum::{
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_cookies::{Cookie, CookieManagerLayer, Cookies};
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::state::{AppState, SharedSession};

pub const SESSION_COOKIE_NAME: &str = "session_id";

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: 200,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            code: 400,
            message: message.to_string(),
            data: None,
        }
    }

    /// Corpus not loaded yet, nothing interactive is available / 数据加载中
    pub fn loading() -> Self {
        Self {
            code: 503,
            message: "loading".to_string(),
            data: None,
        }
    }

    /// View expired or belongs to another browser / 视图不存在
    pub fn unknown_view() -> Self {
        Self {
            code: 404,
            message: "unknown view".to_string(),
            data: None,
        }
    }
}

fn browser_id(cookies: &Cookies) -> Option<Uuid> {
    cookies
        .get(SESSION_COOKIE_NAME)
        .and_then(|c| Uuid::parse_str(c.value()).ok())
}

/// Browser id from the cookie, issuing one if missing / 获取或签发浏览器ID
pub fn browser_id_or_issue(cookies: &Cookies) -> Uuid {
    if let Some(id) = browser_id(cookies) {
        return id;
    }

    let id = Uuid::new_v4();
    let mut cookie = Cookie::new(SESSION_COOKIE_NAME, id.to_string());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookies.add(cookie);
    id
}

/// Resolve the view a request addresses / 获取请求对应的视图
pub fn view_from_request(state: &AppState, cookies: &Cookies, view: Uuid) -> Option<SharedSession> {
    let session = browser_id(cookies).and_then(|owner| state.views.get(owner, view));
    if session.is_none() {
        tracing::debug!("Request for unknown view {}", view);
    }
    session
}

pub fn router(state: Arc<AppState>) -> Router {
    let mut app = Router::new()
        .route("/", get(server::index_page))
        .route("/api/health", get(server::health_check))
        .route("/api/search/input", post(search::search_input))
        .route("/api/search/submit", post(search::search_submit))
        .route("/api/modal/open", post(modal::open_modal))
        .route("/api/modal/close", post(modal::close_modal))
        .route("/api/modal/pointer-down", post(modal::pointer_down));

    // Ship the local corpus file as the static asset / 本地语料作为静态资源
    if let Some(path) = state.config.local_source_path() {
        app = app.route_service("/evidence_pages.json", ServeFile::new(path));
    }

    app.fallback(server::serve_embedded_file)
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
