//! Per-view UI state / 页面视图状态
//!
//! A `SearchSession` owns everything one loaded page shows:
//! the search box and result list, the modal, and the document event target
//! the modal listens on.

pub mod events;
pub mod modal;

use chrono::{DateTime, Utc};

use crate::models::EvidenceItem;
use crate::search::filter_corpus;

pub use events::{DocumentEvents, PointerDown, PointerTarget, Signal, Subscription};
pub use modal::Modal;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no page {page} in result row {row}")]
    NoSuchPage { row: usize, page: usize },
    #[error("results at revision {shown} were replaced by revision {current}")]
    StaleResults { shown: u64, current: u64 },
}

/// Search box and displayed results / 搜索框与结果
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    query: String,
    /// Set by the first explicit submit, never cleared / 首次提交后置位
    submitted: bool,
    results: Vec<EvidenceItem>,
    /// Client sequence number of the last applied change / 最近应用的修订号
    revision: u64,
}

impl SearchState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn results(&self) -> &[EvidenceItem] {
        &self.results
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Accept a change only if it is newer than the last applied one / 丢弃过期修改
    fn advance(&mut self, revision: u64) -> bool {
        if revision <= self.revision {
            tracing::debug!(
                "Ignoring search revision {} (already at {})",
                revision,
                self.revision
            );
            return false;
        }
        self.revision = revision;
        true
    }

    /// Keystroke: results follow the query only after a first submit / 输入
    ///
    /// Returns false when `revision` is not newer than the current state.
    pub fn input(&mut self, corpus: &[EvidenceItem], query: &str, revision: u64) -> bool {
        if !self.advance(revision) {
            return false;
        }
        self.query = query.to_string();
        if self.submitted {
            self.results = filter_corpus(corpus, &self.query);
        }
        true
    }

    /// Explicit submit: always recompute / 提交
    pub fn submit(&mut self, corpus: &[EvidenceItem], query: &str, revision: u64) -> bool {
        if !self.advance(revision) {
            return false;
        }
        self.query = query.to_string();
        self.submitted = true;
        self.results = filter_corpus(corpus, &self.query);
        true
    }
}

pub struct SearchSession {
    search: SearchState,
    modal: Option<Modal>,
    document: DocumentEvents,
    last_seen: DateTime<Utc>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            search: SearchState::default(),
            modal: None,
            document: DocumentEvents::new(),
            last_seen: Utc::now(),
        }
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn document(&self) -> &DocumentEvents {
        &self.document
    }

    pub fn last_seen(&self) -> DateTime<Utc> {
        self.last_seen
    }

    pub fn touch(&mut self) {
        self.last_seen = Utc::now();
    }

    pub fn input(&mut self, corpus: &[EvidenceItem], query: &str, revision: u64) -> bool {
        self.search.input(corpus, query, revision)
    }

    pub fn submit(&mut self, corpus: &[EvidenceItem], query: &str, revision: u64) -> bool {
        self.search.submit(corpus, query, revision)
    }

    /// Open the viewer on a displayed page / 打开页面查看器
    ///
    /// `row` and `page` index the results at `revision`, which must be the
    /// current one. Replaces any open modal.
    pub fn open_page(
        &mut self,
        row: usize,
        page: usize,
        revision: u64,
    ) -> Result<&Modal, SessionError> {
        if revision != self.search.revision {
            return Err(SessionError::StaleResults {
                shown: revision,
                current: self.search.revision,
            });
        }

        let text = self
            .search
            .results
            .get(row)
            .and_then(|item| item.pages.get(page))
            .map(|p| p.page_text.clone())
            .ok_or(SessionError::NoSuchPage { row, page })?;

        // Release the previous subscription before registering a new one.
        self.modal = None;
        let modal = Modal::open(&self.document, text, self.search.query.clone());
        let modal: &Modal = self.modal.insert(modal);
        Ok(modal)
    }

    pub fn close_modal(&mut self) {
        if self.modal.take().is_some() {
            tracing::debug!("Modal closed");
        }
    }

    /// Route a pointer-down through the document / 分发指针事件
    ///
    /// Returns whether the modal is still open afterwards.
    pub fn pointer_down(&mut self, target: PointerTarget) -> bool {
        let signals = self.document.dispatch(&PointerDown { target });
        if signals.contains(&Signal::CloseModal) {
            self.close_modal();
        }
        self.modal.is_some()
    }
}
