use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 搜索请求
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub view: Uuid,
    #[serde(default)]
    pub query: String,
    /// Client sequence number, newer requests carry larger values / 请求序号
    pub revision: u64,
}

/// 搜索响应
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub submitted: bool,
    pub total: usize,
    /// Revision the returned results belong to / 结果修订号
    pub revision: u64,
    /// Rendered result table fragment / 结果表格片段
    pub html: String,
}
