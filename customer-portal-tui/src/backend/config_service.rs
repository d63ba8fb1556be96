//! 配置服务
//!
//! 配置文件：<config_dir>/customer-portal/config.json

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use customer_portal_core::MockApiConfig;
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::view::theme::Theme;

const CONFIG_FILE: &str = "config.json";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub theme: Theme,
    pub language: String,
    /// 模拟后端的延迟与失败率
    pub api: MockApiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: Language::EnUs.code().to_string(),
            api: MockApiConfig::default(),
        }
    }
}

impl AppConfig {
    /// 解析语言代码，未知代码回退到默认语言
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_default()
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 获取默认配置文件路径
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("customer-portal")
        .join(CONFIG_FILE)
}

/// 本地配置服务（JSON 文件）
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self::with_path(default_config_path())
    }

    /// 使用指定的配置文件路径
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    /// 文件不存在时返回默认配置；文件损坏时记录警告并返回默认配置
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!(
                    "Ignoring malformed config {}: {e}",
                    self.path.display()
                );
                Ok(AppConfig::default())
            }
        }
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        log::debug!("Config saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(dir.path().join("config.json"));

        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(dir.path().join("nested").join("config.json"));
        let config = AppConfig {
            theme: Theme::Light,
            language: "zh-CN".to_string(),
            api: MockApiConfig {
                latency_ms: 0,
                failure_rate: 0.0,
            },
        };

        service.save(&config).unwrap();

        let loaded = service.load().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.language(), Language::ZhCn);
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let service = LocalConfigService::with_path(path);
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "theme": "light" }"#).unwrap();

        let config = LocalConfigService::with_path(path).load().unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.language(), Language::EnUs);
        assert_eq!(config.api, MockApiConfig::default());
    }

    #[test]
    fn unknown_language_falls_back() {
        let config = AppConfig {
            language: "fr-FR".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.language(), Language::EnUs);
    }
}
