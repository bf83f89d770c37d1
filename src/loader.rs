//! Corpus loader / 语料加载
//!
//! Reads evidence_pages.json exactly once. Failures are logged and degrade to
//! an empty corpus; nothing is retried / 失败时记录日志并降级为空语料

use std::sync::Arc;
use tokio::sync::watch;

use crate::models::Corpus;

/// Why the corpus could not be read / 加载失败原因
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read corpus file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to fetch corpus: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed corpus JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Loading state shared with the request handlers / 加载状态
#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Ready(Arc<Corpus>),
}

impl LoadState {
    pub fn corpus(&self) -> Option<Arc<Corpus>> {
        match self {
            LoadState::Loading => None,
            LoadState::Ready(corpus) => Some(corpus.clone()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Whether the source is an http(s) URL / 是否为远程地址
pub fn is_remote(source: &str) -> bool {
    matches!(
        url::Url::parse(source).map(|u| u.scheme().to_string()).as_deref(),
        Ok("http") | Ok("https")
    )
}

/// Read and parse the corpus from a path or http(s) URL / 从路径或URL读取语料
pub async fn read_corpus(source: &str) -> Result<Corpus, LoadError> {
    let bytes = if is_remote(source) {
        reqwest::get(source)
            .await?
            .error_for_status()?
            .bytes()
            .await?
            .to_vec()
    } else {
        tokio::fs::read(source).await?
    };

    Ok(serde_json::from_slice(&bytes)?)
}

/// Read the corpus, falling back to empty on any failure / 读取失败则返回空语料
pub async fn load_or_empty(source: &str) -> Corpus {
    match read_corpus(source).await {
        Ok(corpus) => {
            tracing::info!("Loaded {} evidence items from {}", corpus.len(), source);
            corpus
        }
        Err(e) => {
            tracing::error!("Failed to fetch evidence pages: {}", e);
            Vec::new()
        }
    }
}

/// Start the one-shot background load / 启动后台加载
///
/// The receiver reports `Loading` until the read settles. If every receiver
/// is gone by then the result is dropped.
pub fn spawn_loader(source: String) -> watch::Receiver<LoadState> {
    let (tx, rx) = watch::channel(LoadState::Loading);

    tokio::spawn(async move {
        let corpus = load_or_empty(&source).await;
        if tx.send(LoadState::Ready(Arc::new(corpus))).is_err() {
            tracing::debug!("Corpus load finished after shutdown, result discarded");
        }
    });

    rx
}
