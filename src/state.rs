use chrono::Utc;
use inquiry_search::config::AppConfig;
use inquiry_search::loader::LoadState;
use inquiry_search::render::RenderOptions;
use inquiry_search::session::SearchSession;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::watch;
use uuid::Uuid;

pub type SharedSession = Arc<Mutex<SearchSession>>;

struct ViewEntry {
    /// Browser cookie id that loaded the page / 所属浏览器
    owner: Uuid,
    session: SharedSession,
}

/// Page views keyed by view id / 页面视图存储
///
/// Every page load gets its own view; a view answers only to the browser
/// that loaded it.
pub struct ViewStore {
    views: RwLock<HashMap<Uuid, ViewEntry>>,
    idle_timeout_secs: i64,
}

impl ViewStore {
    pub fn new(idle_timeout_secs: i64) -> Self {
        Self {
            views: RwLock::new(HashMap::new()),
            idle_timeout_secs,
        }
    }

    /// Start a fresh view for a page load / 新建视图
    pub fn create(&self, owner: Uuid) -> (Uuid, SharedSession) {
        // Clean idle views before adding a new one / 新建前清理空闲视图
        self.sweep();

        let id = Uuid::new_v4();
        let session = Arc::new(Mutex::new(SearchSession::new()));
        self.views.write().insert(
            id,
            ViewEntry {
                owner,
                session: session.clone(),
            },
        );
        tracing::debug!("Created view {} for browser {}", id, owner);
        (id, session)
    }

    /// Look up a view owned by this browser / 查找视图
    pub fn get(&self, owner: Uuid, id: Uuid) -> Option<SharedSession> {
        let views = self.views.read();
        let entry = views.get(&id).filter(|e| e.owner == owner)?;
        entry.session.lock().touch();
        Some(entry.session.clone())
    }

    /// Drop views idle past the timeout / 清理空闲视图
    ///
    /// Dropping a view releases its modal listener along with it.
    pub fn sweep(&self) -> usize {
        let now = Utc::now();
        let mut views = self.views.write();
        let before = views.len();
        views.retain(|_, e| {
            now.signed_duration_since(e.session.lock().last_seen())
                .num_seconds()
                < self.idle_timeout_secs
        });
        let removed = before - views.len();
        if removed > 0 {
            tracing::debug!("Removed {} idle views", removed);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.views.read().len()
    }
}

pub struct AppState {
    pub config: AppConfig,
    /// Corpus load progress, written once by the loader / 语料加载状态
    pub corpus: watch::Receiver<LoadState>,
    pub views: ViewStore,
}

impl AppState {
    pub fn new(config: AppConfig, corpus: watch::Receiver<LoadState>) -> Self {
        let views = ViewStore::new(config.session.idle_timeout_secs);
        Self {
            config,
            corpus,
            views,
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.corpus.borrow().clone()
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::from(&self.config)
    }
}
