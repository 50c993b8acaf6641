//! 服务状态接口

use crate::models::common::{DatabaseStatus, Message};
use crate::AppState;
use axum::extract::State;
use axum::Json;
use tracing::{instrument, warn};

/// 错误信息在状态接口中最多保留的字符数
const ERROR_PREVIEW_CHARS: usize = 120;

/// 服务是否在运行
#[utoipa::path(get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service is running", body = Message)
    ),
)]
#[instrument]
pub async fn root() -> Json<Message> {
    Json(Message {
        message: "kupi-bassein backend running".to_string(),
    })
}

/// 检查存储连接
///
/// 无论存储是否可用都返回200，状态写在 `database` 字段中。
#[utoipa::path(get,
    path = "/test",
    tag = "health",
    responses(
        (status = 200, description = "Store connectivity", body = DatabaseStatus)
    ),
)]
#[instrument(skip(state))]
pub async fn test_database(State(state): State<AppState>) -> Json<DatabaseStatus> {
    let status = match state.repository.list_collections().await {
        Ok(collections) => DatabaseStatus {
            database: "✅ Connected".to_string(),
            collections,
        },
        Err(err) => {
            warn!("⚠️ 存储不可用: {}", err);
            DatabaseStatus {
                database: format!("⚠️ {}", truncate_chars(&err.to_string(), ERROR_PREVIEW_CHARS)),
                collections: Vec::new(),
            }
        }
    };

    Json(status)
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::{DatabaseError, DatabaseResult, Document, DocumentRepositoryTrait, MemoryDocumentRepository};
    use serde_json::{json, Value};
    use site_scraper::{FetchError, PageFetcher, Scraper};
    use std::sync::Arc;

    struct Unreachable;

    #[async_trait::async_trait]
    impl PageFetcher for Unreachable {
        async fn fetch(&self, url: &str) -> Result<String, FetchError> {
            Err(FetchError::Status {
                url: url.to_string(),
                status: 503,
            })
        }
    }

    /// 所有操作都失败的仓库
    struct BrokenStore;

    #[async_trait::async_trait]
    impl DocumentRepositoryTrait for BrokenStore {
        async fn find_one(&self, _: &str, _: &Value) -> DatabaseResult<Option<Document>> {
            Err(DatabaseError::connection("x".repeat(300)))
        }

        async fn find(&self, _: &str, _: &Value, _: i64) -> DatabaseResult<Vec<Document>> {
            Err(DatabaseError::connection("x".repeat(300)))
        }

        async fn update_one(&self, _: &str, _: &Value, _: &Value) -> DatabaseResult<u64> {
            Err(DatabaseError::connection("x".repeat(300)))
        }

        async fn insert(&self, _: &str, _: Value) -> DatabaseResult<i64> {
            Err(DatabaseError::connection("x".repeat(300)))
        }

        async fn list_collections(&self) -> DatabaseResult<Vec<String>> {
            Err(DatabaseError::connection("x".repeat(300)))
        }
    }

    fn state_with(repository: Arc<dyn DocumentRepositoryTrait>) -> AppState {
        let fetcher: Arc<dyn PageFetcher> = Arc::new(Unreachable);
        AppState::new(repository, Scraper::new("https://kupi-bassein.ru", fetcher))
    }

    #[tokio::test]
    async fn test_root_message() {
        let Json(message) = root().await;
        assert_eq!(message.message, "kupi-bassein backend running");
    }

    #[tokio::test]
    async fn test_database_connected_lists_collections() {
        let repo = MemoryDocumentRepository::new();
        repo.insert("service", json!({"title": "Монтаж"})).await.unwrap();
        repo.insert("project", json!({"title": "Бассейн"})).await.unwrap();

        let Json(status) = test_database(State(state_with(Arc::new(repo)))).await;
        assert_eq!(status.database, "✅ Connected");
        assert_eq!(status.collections, vec!["project", "service"]);
    }

    #[tokio::test]
    async fn test_database_error_is_truncated() {
        let Json(status) = test_database(State(state_with(Arc::new(BrokenStore)))).await;

        assert!(status.database.starts_with("⚠️ 数据库连接错误: xxx"));
        let preview = status.database.strip_prefix("⚠️ ").unwrap();
        assert_eq!(preview.chars().count(), ERROR_PREVIEW_CHARS);
        assert!(status.collections.is_empty());
    }
}
