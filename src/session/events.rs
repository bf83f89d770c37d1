//! Document-level pointer events / 文档级指针事件
//!
//! Listeners are held by `Subscription` guards; dropping the guard removes
//! the listener, whichever way its owner goes away.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

/// Where a pointer-down landed relative to the modal content / 点击位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerTarget {
    Content,
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerDown {
    pub target: PointerTarget,
}

/// What a listener asks its owner to do / 监听器返回的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    CloseModal,
}

type Listener = Box<dyn Fn(&PointerDown) -> Option<Signal> + Send>;
type ListenerTable = Mutex<HashMap<u64, Listener>>;

#[derive(Default)]
pub struct DocumentEvents {
    listeners: Arc<ListenerTable>,
    next_id: AtomicU64,
}

impl DocumentEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pointer-down listener / 注册监听器
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&PointerDown) -> Option<Signal> + Send + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.listeners.lock().insert(id, Box::new(listener));
        Subscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    /// Deliver an event to every listener, collecting their signals / 分发事件
    pub fn dispatch(&self, event: &PointerDown) -> Vec<Signal> {
        self.listeners
            .lock()
            .values()
            .filter_map(|listener| listener(event))
            .collect()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }
}

/// Registration handle, removes its listener on drop / 订阅句柄
pub struct Subscription {
    id: u64,
    listeners: Weak<ListenerTable>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.lock().remove(&self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
