use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use rust_embed::RustEmbed;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_cookies::Cookies;

use inquiry_search::loader::LoadState;
use inquiry_search::render::{render_app_page, render_loading_page};

use crate::api::browser_id_or_issue;
use crate::state::AppState;

/// Embed browser assets (compile-time embed from web/) / 嵌入前端静态文件
#[derive(RustEmbed)]
#[folder = "web"]
struct FrontendAssets;

/// GET / - 主页面
///
/// Every load starts a fresh view with its own search and modal state.
pub async fn index_page(State(state): State<Arc<AppState>>, cookies: Cookies) -> Html<String> {
    if state.load_state().is_loading() {
        return Html(render_loading_page());
    }

    let owner = browser_id_or_issue(&cookies);
    let (view, session) = state.views.create(owner);
    let session = session.lock();
    Html(render_app_page(&session, view, &state.render_options()))
}

/// GET /api/health - 健康检查
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let corpus = match state.load_state() {
        LoadState::Loading => json!({ "status": "loading" }),
        LoadState::Ready(corpus) => json!({ "status": "ready", "items": corpus.len() }),
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "build_time": env!("BUILD_TIME"),
        "corpus": corpus,
        "views": state.views.len(),
    }))
}

/// Handle embedded static file requests / 处理嵌入的静态文件请求
pub async fn serve_embedded_file(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    match FrontendAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref().to_string())],
                Body::from(content.data.into_owned()),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}
