use crate::models::constants::{DEFAULT_BASE_URL, DEFAULT_PORT};
use color_eyre::eyre::Context;
use color_eyre::{Help, Result};
use std::sync::Arc;
use tracing::debug;

/// 程序配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// postgresql数据库链接字符串
    pub postgresql_conn_str: String,

    /// 数据库连接池大小
    ///
    /// 可通过环境变量 `MAX_DB_POOL_SIZE` 来调整
    pub max_db_pool_size: u32,

    /// 监听端口，环境变量 `PORT`
    pub port: u16,

    /// 被抓取站点的地址（不带结尾的`/`），环境变量 `SCRAPE_BASE_URL`
    pub scrape_base_url: String,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，不需要.env文件
        if let Err(e) = dotenvy::dotenv() {
            debug!("未加载.env文件: {e}");
        }

        // 读取数据库地址信息（仅支持postgresql）
        let db_url = std::env::var("DATABASE_URL")
            .context("Can not load DATABASE_URL in environment")
            .suggestion("设置 DATABASE_URL 环境变量")?;

        let config = AppConfig {
            postgresql_conn_str: db_url,
            max_db_pool_size: std::env::var("MAX_DB_POOL_SIZE").map_or(10, |s| s.parse().unwrap_or(10)),
            port: std::env::var("PORT").map_or(DEFAULT_PORT, |s| s.parse().unwrap_or(DEFAULT_PORT)),
            scrape_base_url: std::env::var("SCRAPE_BASE_URL")
                .map_or_else(|_| DEFAULT_BASE_URL.to_string(), |s| normalize_base_url(&s)),
        };
        Ok(Arc::new(config))
    }

    /// 监听地址
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

/// 去掉结尾的`/`，拼接路径时统一使用 `base + path`
fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("https://kupi-bassein.ru/"), "https://kupi-bassein.ru");
        assert_eq!(normalize_base_url(" http://localhost:9000 "), "http://localhost:9000");
        assert_eq!(normalize_base_url("   "), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_bind_addr_uses_port() {
        let config = AppConfig {
            postgresql_conn_str: "postgres://localhost/test".to_string(),
            max_db_pool_size: 10,
            port: 8000,
            scrape_base_url: DEFAULT_BASE_URL.to_string(),
        };
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    }
}
