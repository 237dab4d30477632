//! 配置服务
//!
//! 配置文件：`dirs::config_dir()/mailguard-tui/config.json`。
//! 文件不存在时使用默认值；缺失或未知字段同样回落到默认值。

use std::path::{Path, PathBuf};
use std::time::Duration;

use mailguard_core::client::{ClientConfig, DEFAULT_API_BASE, DEFAULT_REQUEST_TIMEOUT_SECS};
use mailguard_core::types::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::view::theme::Theme;

/// 配置目录名
pub const APP_DIR_NAME: &str = "mailguard-tui";

/// 会话存储后端
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStorage {
    /// 系统钥匙串
    Keyring,
    /// 配置目录下的 JSON 文件
    #[default]
    File,
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub page_size: u32,
    pub request_timeout_secs: u64,
    pub language: String,
    pub theme: Theme,
    pub session_storage: SessionStorage,
    pub log_level: String,
    /// 为空时导出到当前目录
    pub export_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            language: "en-US".to_string(),
            theme: Theme::Dark,
            session_storage: SessionStorage::default(),
            log_level: "info".to_string(),
            export_dir: None,
        }
    }
}

impl AppConfig {
    /// 每页条数，限制在 `[1, MAX_PAGE_SIZE]`
    pub fn effective_page_size(&self) -> u32 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }

    /// 导出目录
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// 转为 HTTP 客户端配置
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_base_url.clone(),
            timeout: Duration::from_secs(self.request_timeout_secs.max(1)),
        }
    }
}

/// 配置读写错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}

/// 获取配置目录路径
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// 本地 JSON 文件配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用默认位置
    pub fn new() -> Self {
        Self::with_path(config_dir().join("config.json"))
    }

    /// 使用指定文件（`--config`）
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", self.path.display());
                return Ok(AppConfig::default());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let content = serde_json::to_string_pretty(config).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }
}
