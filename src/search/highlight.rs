//! Term highlighting / 关键词高亮
//!
//! Splits text into plain and marked segments. Matched segments keep the
//! casing of the source text.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// How the highlight term is turned into a matcher / 高亮匹配方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightMode {
    /// Term matched literally, metacharacters escaped / 字面匹配
    #[default]
    Literal,
    /// Term compiled as a regular expression as typed / 按正则匹配（兼容旧行为）
    Pattern,
}

/// One piece of highlighted text / 高亮片段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Mark(&'a str),
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match *self {
            Segment::Plain(s) | Segment::Mark(s) => s,
        }
    }

    pub fn is_mark(&self) -> bool {
        matches!(self, Segment::Mark(_))
    }
}

/// Compiled matcher for one term, reused across lines / 编译后的高亮器
#[derive(Debug, Clone)]
pub struct Highlighter {
    matcher: Option<Regex>,
}

impl Highlighter {
    pub fn new(term: &str, mode: HighlightMode) -> Self {
        if term.trim().is_empty() {
            return Self { matcher: None };
        }

        let pattern = match mode {
            HighlightMode::Literal => regex::escape(term),
            HighlightMode::Pattern => term.to_string(),
        };

        let matcher = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::debug!("Highlight term {:?} is not a valid pattern: {}", term, e);
                None
            }
        };

        Self { matcher }
    }

    /// Split text into segments / 切分文本
    pub fn segments<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let Some(re) = &self.matcher else {
            return vec![Segment::Plain(text)];
        };

        let mut segments = Vec::new();
        let mut last = 0;

        for m in re.find_iter(text) {
            if m.start() == m.end() {
                continue;
            }
            if m.start() > last {
                segments.push(Segment::Plain(&text[last..m.start()]));
            }
            segments.push(Segment::Mark(m.as_str()));
            last = m.end();
        }

        if last < text.len() || segments.is_empty() {
            segments.push(Segment::Plain(&text[last..]));
        }

        segments
    }
}

/// Highlight a single text with a one-off matcher / 单次高亮
pub fn highlight<'a>(text: &'a str, term: &str, mode: HighlightMode) -> Vec<Segment<'a>> {
    Highlighter::new(term, mode).segments(text)
}

/// Lines of a page, one paragraph each / 按行拆分段落
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}
