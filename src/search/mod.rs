//! Search module - substring filtering and term highlighting / 搜索模块
//!
//! Both operations are pure: they read the corpus and build new values,
//! the corpus itself is never modified / 纯函数，不修改语料

pub mod filter;
pub mod highlight;

pub use filter::{filter_corpus, matches_query};
pub use highlight::{highlight, paragraphs, HighlightMode, Segment};
