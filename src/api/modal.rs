use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_cookies::Cookies;
use uuid::Uuid;

use inquiry_search::render::render_modal;
use inquiry_search::session::{PointerTarget, SearchSession};

use crate::api::{view_from_request, ApiResponse};
use crate::state::AppState;

/// Page click, addressed into the displayed results / 点击页码
#[derive(Debug, Deserialize)]
pub struct OpenModalRequest {
    pub view: Uuid,
    pub row: usize,
    pub page: usize,
    /// Revision of the result table the click was made on / 点击时结果修订号
    pub revision: u64,
}

#[derive(Debug, Deserialize)]
pub struct CloseModalRequest {
    pub view: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct PointerDownRequest {
    pub view: Uuid,
    pub target: PointerTarget,
}

#[derive(Debug, Serialize)]
pub struct ModalResponse {
    pub open: bool,
    /// Rendered overlay, empty when closed / 弹窗片段
    pub html: String,
}

fn modal_response(state: &AppState, session: &SearchSession) -> ModalResponse {
    match session.modal() {
        Some(modal) => ModalResponse {
            open: true,
            html: render_modal(modal, state.config.search.highlight_mode),
        },
        None => ModalResponse {
            open: false,
            html: String::new(),
        },
    }
}

/// POST /api/modal/open - 打开页面查看器
pub async fn open_modal(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(req): Json<OpenModalRequest>,
) -> Json<ApiResponse<ModalResponse>> {
    if state.load_state().is_loading() {
        return Json(ApiResponse::loading());
    }

    let Some(session) = view_from_request(&state, &cookies, req.view) else {
        return Json(ApiResponse::unknown_view());
    };
    let mut session = session.lock();
    if let Err(e) = session.open_page(req.row, req.page, req.revision) {
        tracing::warn!("Rejected page click: {}", e);
        return Json(ApiResponse::error(&e.to_string()));
    }

    Json(ApiResponse::success(modal_response(&state, &session)))
}

/// POST /api/modal/close - 关闭按钮
pub async fn close_modal(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(req): Json<CloseModalRequest>,
) -> Json<ApiResponse<ModalResponse>> {
    if state.load_state().is_loading() {
        return Json(ApiResponse::loading());
    }

    let Some(session) = view_from_request(&state, &cookies, req.view) else {
        return Json(ApiResponse::unknown_view());
    };
    let mut session = session.lock();
    session.close_modal();

    Json(ApiResponse::success(modal_response(&state, &session)))
}

/// POST /api/modal/pointer-down - 文档级鼠标按下
pub async fn pointer_down(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(req): Json<PointerDownRequest>,
) -> Json<ApiResponse<ModalResponse>> {
    if state.load_state().is_loading() {
        return Json(ApiResponse::loading());
    }

    let Some(session) = view_from_request(&state, &cookies, req.view) else {
        return Json(ApiResponse::unknown_view());
    };
    let mut session = session.lock();
    session.pointer_down(req.target);

    Json(ApiResponse::success(modal_response(&state, &session)))
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::*;
    use serde_json::json;

    async fn submitted_view(app: &axum::Router, query: &str) -> View {
        let view = open_view(app, None).await;
        post_json(
            app,
            "/api/search/submit",
            &view,
            json!({ "query": query, "revision": 1 }),
        )
        .await;
        view
    }

    #[tokio::test]
    async fn test_open_highlights_active_query() {
        let app = ready_router();
        let view = submitted_view(&app, "hello").await;

        let body = post_json(
            &app,
            "/api/modal/open",
            &view,
            json!({"row": 1, "page": 0, "revision": 1}),
        )
        .await;
        assert_eq!(body["data"]["open"], true);
        let html = body["data"]["html"].as_str().unwrap();
        assert_eq!(html.matches("<p>").count(), 2);
        assert!(html.contains(r#"<p><span class="highlight">Hello</span> again</p>"#));
    }

    #[tokio::test]
    async fn test_pointer_down_inside_then_outside() {
        let app = ready_router();
        let view = submitted_view(&app, "hello").await;
        post_json(
            &app,
            "/api/modal/open",
            &view,
            json!({"row": 0, "page": 0, "revision": 1}),
        )
        .await;

        let body = post_json(&app, "/api/modal/pointer-down", &view, json!({"target": "content"})).await;
        assert_eq!(body["data"]["open"], true);

        let body = post_json(&app, "/api/modal/pointer-down", &view, json!({"target": "outside"})).await;
        assert_eq!(body["data"]["open"], false);
        assert_eq!(body["data"]["html"], "");
    }

    #[tokio::test]
    async fn test_close_control() {
        let app = ready_router();
        let view = submitted_view(&app, "").await;
        let body = post_json(
            &app,
            "/api/modal/open",
            &view,
            json!({"row": 0, "page": 0, "revision": 1}),
        )
        .await;
        assert_eq!(body["data"]["open"], true);

        let body = post_json(&app, "/api/modal/close", &view, json!({})).await;
        assert_eq!(body["data"]["open"], false);

        // Outside clicks after closing are no-ops
        let body = post_json(&app, "/api/modal/pointer-down", &view, json!({"target": "outside"})).await;
        assert_eq!(body["data"]["open"], false);
    }

    #[tokio::test]
    async fn test_unknown_page_rejected() {
        let app = ready_router();
        let view = submitted_view(&app, "witness").await;

        let body = post_json(
            &app,
            "/api/modal/open",
            &view,
            json!({"row": 0, "page": 0, "revision": 1}),
        )
        .await;
        assert_eq!(body["code"], 400);

        let body = post_json(&app, "/api/modal/pointer-down", &view, json!({"target": "content"})).await;
        assert_eq!(body["data"]["open"], false);
    }

    #[tokio::test]
    async fn test_click_on_replaced_table_rejected() {
        let app = ready_router();
        let view = submitted_view(&app, "hello").await;
        post_json(
            &app,
            "/api/search/input",
            &view,
            json!({"query": "nothing", "revision": 2}),
        )
        .await;

        // Click made on the table from revision 1
        let body = post_json(
            &app,
            "/api/modal/open",
            &view,
            json!({"row": 0, "page": 0, "revision": 1}),
        )
        .await;
        assert_eq!(body["code"], 400);
        assert!(body.get("data").is_none());

        let body = post_json(&app, "/api/modal/pointer-down", &view, json!({"target": "content"})).await;
        assert_eq!(body["data"]["open"], false);
    }
}
