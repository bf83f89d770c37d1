use serde::{Deserialize, Serialize};

/// One numbered page of an evidence document / 证据文档的一页
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub page_number: i64,
    pub page_text: String,
}

/// One evidence document in the inquiry corpus / 证据条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceItem {
    #[serde(rename = "evidence_title")]
    pub title: String,
    /// Path relative to the inquiry website / 相对链接
    #[serde(rename = "evidence_link")]
    pub link: String,
    #[serde(default)]
    pub pages: Vec<Page>,
}

/// The full corpus, immutable once loaded / 完整语料，加载后只读
pub type Corpus = Vec<EvidenceItem>;

impl EvidenceItem {
    /// Outbound "View" URL for this item / 外链地址
    pub fn external_url(&self, link_base: &str) -> String {
        format!("{}{}", link_base, self.link)
    }
}
