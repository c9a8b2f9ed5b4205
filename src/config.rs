use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// 正确选项模式
///
/// 历史上编辑器同时存在过单选（下拉框）和多选（复选框）两种交互，
/// 行为并不一致。这里把选择显式化为配置项，校验逻辑建立在所选模式之上。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrectnessMode {
    /// 单选模式：最多一个正确选项（类似单选框）
    Exclusive,
    /// 多选模式：各选项独立勾选（类似复选框）
    Multi,
}

impl FromStr for CorrectnessMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exclusive" => Ok(CorrectnessMode::Exclusive),
            "multi" => Ok(CorrectnessMode::Multi),
            other => Err(format!("无法识别的正确选项模式: {}", other)),
        }
    }
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("配置文件解析失败 ({path}): {source}")]
    ParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 程序配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 后端 API 基础地址
    pub api_base_url: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 会话日志文件
    pub session_log_file: String,
    /// 正确选项模式
    pub correctness_mode: CorrectnessMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            verbose_logging: false,
            session_log_file: "session.txt".to_string(),
            correctness_mode: CorrectnessMode::Multi,
        }
    }
}

impl Config {
    /// 从环境变量加载配置（缺省值见 `Default`）
    pub fn from_env() -> Self {
        Self::default().apply_env()
    }

    /// 从 TOML 配置文件加载
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
            path: path.to_string(),
            source: e,
        })
    }

    /// 加载配置：配置文件可选，环境变量覆盖文件取值
    ///
    /// 配置文件不存在时直接使用缺省值；解析失败时记录警告并退回缺省值
    pub fn load(path: &str) -> Self {
        let base = if Path::new(path).exists() {
            match Self::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    warn!("⚠️ {}，使用缺省配置", e);
                    Self::default()
                }
            }
        } else {
            Self::default()
        };
        base.apply_env()
    }

    fn apply_env(self) -> Self {
        Self {
            api_base_url: std::env::var("API_BASE_URL").unwrap_or(self.api_base_url),
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.verbose_logging),
            session_log_file: std::env::var("SESSION_LOG_FILE").unwrap_or(self.session_log_file),
            correctness_mode: std::env::var("CORRECTNESS_MODE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.correctness_mode),
        }
    }
}
