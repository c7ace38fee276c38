//! 运行时配置
//!
//! 优先级：LocalStorage 覆盖 > 构建时环境变量 `ECOHABIT_API_URL` > 默认值。

use crate::web::LocalStorage;
use leptos::prelude::*;

const STORAGE_API_URL_KEY: &str = "ecohabit_api_url";
const DEFAULT_API_BASE_URL: &str = "/api";

/// 前端配置，通过 Context 共享
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// 认证服务地址（不带结尾的 `/`）
    pub api_base_url: String,
}

impl AppConfig {
    /// 从浏览器存储与构建环境中加载配置
    pub fn load() -> Self {
        let config = Self::resolve(
            LocalStorage::get(STORAGE_API_URL_KEY),
            option_env!("ECOHABIT_API_URL"),
        );
        log_info!("[Config] API base url: {}", config.api_base_url);
        config
    }

    fn resolve(stored: Option<String>, build_time: Option<&str>) -> Self {
        let raw = stored
            .filter(|v| !v.trim().is_empty())
            .or_else(|| {
                build_time
                    .filter(|v| !v.trim().is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self {
            api_base_url: raw.trim().trim_end_matches('/').to_string(),
        }
    }
}

/// 从 Context 获取配置，未提供时现场加载
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(AppConfig::load)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default() {
        assert_eq!(AppConfig::resolve(None, None).api_base_url, "/api");
    }

    #[test]
    fn stored_override_wins() {
        let config = AppConfig::resolve(
            Some("https://auth.example.org/".into()),
            Some("https://build.example.org"),
        );
        assert_eq!(config.api_base_url, "https://auth.example.org");
    }

    #[test]
    fn blank_values_are_skipped() {
        let config = AppConfig::resolve(Some("  ".into()), Some("https://build.example.org//"));
        assert_eq!(config.api_base_url, "https://build.example.org");

        let config = AppConfig::resolve(None, Some(""));
        assert_eq!(config.api_base_url, "/api");
    }
}
