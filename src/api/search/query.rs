use axum::{extract::State, Json};
use std::sync::Arc;
use tower_cookies::Cookies;

use inquiry_search::models::EvidenceItem;
use inquiry_search::render::render_results;
use inquiry_search::session::SearchSession;

use super::types::*;
use crate::api::{view_from_request, ApiResponse};
use crate::state::AppState;

fn apply<F>(
    state: &AppState,
    cookies: &Cookies,
    req: &SearchRequest,
    f: F,
) -> Json<ApiResponse<SearchResponse>>
where
    F: FnOnce(&mut SearchSession, &[EvidenceItem]) -> bool,
{
    let Some(corpus) = state.load_state().corpus() else {
        return Json(ApiResponse::loading());
    };
    let Some(session) = view_from_request(state, cookies, req.view) else {
        return Json(ApiResponse::unknown_view());
    };

    let mut session = session.lock();
    f(&mut *session, corpus.as_slice());

    let search = session.search();
    Json(ApiResponse::success(SearchResponse {
        query: search.query().to_string(),
        submitted: search.submitted(),
        total: search.results().len(),
        revision: search.revision(),
        html: render_results(search.results(), &state.config.search.link_base),
    }))
}

/// POST /api/search/input - 输入框每次变化
pub async fn search_input(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(req): Json<SearchRequest>,
) -> Json<ApiResponse<SearchResponse>> {
    apply(&state, &cookies, &req, |session, corpus| {
        session.input(corpus, &req.query, req.revision)
    })
}

/// POST /api/search/submit - 提交搜索
pub async fn search_submit(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(req): Json<SearchRequest>,
) -> Json<ApiResponse<SearchResponse>> {
    tracing::debug!("Search submitted: {:?}", req.query);
    apply(&state, &cookies, &req, |session, corpus| {
        session.submit(corpus, &req.query, req.revision)
    })
}
