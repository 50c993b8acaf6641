//! 文档仓库 trait 定义
//!
//! 定义按集合读写JSON文档的抽象接口

use crate::models::document::Document;
use crate::DatabaseResult;
use serde_json::Value;

/// 文档仓库trait定义
///
/// 过滤条件 `filter` 是一个JSON对象，文档的 `body` 包含该对象即视为匹配
/// （参考 [`crate::models::contains`]）。空对象 `{}` 匹配集合中的所有文档。
///
/// 所有查询都按插入顺序返回。
#[async_trait::async_trait]
pub trait DocumentRepositoryTrait: Send + Sync + 'static {
    /// 查询集合中第一个匹配的文档
    ///
    /// # 参数
    /// - `collection`: 集合名称
    /// - `filter`: 过滤条件
    ///
    /// # 返回值
    /// 没有匹配的文档时返回 `None`
    async fn find_one(&self, collection: &str, filter: &Value) -> DatabaseResult<Option<Document>>;

    /// 查询集合中最多 `limit` 个匹配的文档
    async fn find(&self, collection: &str, filter: &Value, limit: i64) -> DatabaseResult<Vec<Document>>;

    /// 将 `patch` 合并到第一个匹配文档中，同时刷新 `updated_at`
    ///
    /// # 返回值
    /// 被更新的文档数量（0 或 1）
    async fn update_one(&self, collection: &str, filter: &Value, patch: &Value) -> DatabaseResult<u64>;

    /// 插入新文档，自动写入 `created_at` / `updated_at`
    ///
    /// # 返回值
    /// 新文档的 ID
    async fn insert(&self, collection: &str, record: Value) -> DatabaseResult<i64>;

    /// 列出所有包含文档的集合名称（按名称排序）
    async fn list_collections(&self) -> DatabaseResult<Vec<String>>;
}
