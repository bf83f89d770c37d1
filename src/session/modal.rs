use super::events::{DocumentEvents, PointerTarget, Signal, Subscription};

/// An open page viewer / 打开的页面查看器
///
/// Exists only while open. Holds the outside-click subscription for its
/// whole lifetime, so closing or replacing it releases the listener.
#[derive(Debug)]
pub struct Modal {
    text: String,
    query: String,
    _outside_click: Subscription,
}

impl Modal {
    pub fn open(document: &DocumentEvents, text: String, query: String) -> Self {
        let outside_click = document.subscribe(|event| {
            (event.target == PointerTarget::Outside).then_some(Signal::CloseModal)
        });

        Self {
            text,
            query,
            _outside_click: outside_click,
        }
    }

    /// Full page text as stored in the corpus / 页面原文
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Query active when the page was opened / 打开时的查询词
    pub fn query(&self) -> &str {
        &self.query
    }
}
