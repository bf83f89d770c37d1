//! Application configuration module / 应用配置模块
//!
//! Manages application configuration loaded from config.json
//! Creates default config file on first run / 首次运行时创建默认配置文件

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::search::HighlightMode;

/// Default outbound host for evidence links / 证据外链默认主机
pub const DEFAULT_LINK_BASE: &str = "https://www.postofficehorizoninquiry.org.uk";

/// Application configuration / 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Server configuration / 服务器配置
    pub server: ServerConfig,
    /// Corpus source configuration / 数据源配置
    pub data: DataConfig,
    /// Search and display configuration / 搜索配置
    pub search: SearchConfig,
    /// Browser session configuration / 会话配置
    pub session: SessionConfig,
}

/// Server configuration / 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address / 服务器监听地址
    pub host: String,
    /// Server port / 服务器端口
    pub port: u16,
}

/// Corpus source configuration / 数据源配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// File path or http(s) URL of evidence_pages.json / 文件路径或URL
    pub source: String,
}

/// Search configuration / 搜索配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Prefix joined with each evidence_link / 外链前缀
    pub link_base: String,
    /// How the highlight term is matched / 高亮匹配方式
    pub highlight_mode: HighlightMode,
}

/// Session configuration / 会话配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Idle seconds before a session is dropped / 会话空闲超时（秒）
    pub idle_timeout_secs: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8180,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: "public/evidence_pages.json".to_string(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            link_base: DEFAULT_LINK_BASE.to_string(),
            highlight_mode: HighlightMode::default(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: 60 * 60,
        }
    }
}

impl AppConfig {
    /// Get the server bind address / 获取服务器绑定地址
    pub fn get_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Local file backing the corpus, if the source is not a URL / 本地数据文件路径
    pub fn local_source_path(&self) -> Option<PathBuf> {
        if crate::loader::is_remote(&self.data.source) {
            None
        } else {
            Some(PathBuf::from(&self.data.source))
        }
    }
}

/// Get the config file path / 获取配置文件路径
fn get_config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("config.json")
}

/// Load configuration from file, or create default if not exists / 加载配置文件，不存在则创建默认配置
pub fn load_config() -> Result<AppConfig, String> {
    let config_path = get_config_path();

    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse config file: {}", e))?;

        tracing::info!("Loaded configuration from {:?}", config_path);
        Ok(config)
    } else {
        let config = AppConfig::default();
        save_config(&config)?;
        tracing::info!("Created default configuration at {:?}", config_path);
        Ok(config)
    }
}

/// Save configuration to file / 保存配置到文件
pub fn save_config(config: &AppConfig) -> Result<(), String> {
    let config_path = get_config_path();

    let content = serde_json::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(&config_path, content)
        .map_err(|e| format!("Failed to write config file: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"server":{"port":9000},"search":{"highlight_mode":"pattern"}}"#)
                .unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.search.highlight_mode, HighlightMode::Pattern);
        assert_eq!(config.search.link_base, DEFAULT_LINK_BASE);
        assert_eq!(config.data.source, "public/evidence_pages.json");
    }

    #[test]
    fn test_local_source_path() {
        let mut config = AppConfig::default();
        assert_eq!(
            config.local_source_path(),
            Some(PathBuf::from("public/evidence_pages.json"))
        );

        config.data.source = "https://example.org/evidence_pages.json".to_string();
        assert_eq!(config.local_source_path(), None);
    }
}
