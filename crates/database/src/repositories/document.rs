//! 文档仓库
//!
//! 基于 PostgreSQL JSONB 的文档存储实现

use crate::models::document::{expect_object, stamp_created, stamp_updated, Document, DocumentRow};
use crate::repositories::traits::DocumentRepositoryTrait;
use crate::DatabaseResult;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::debug;

/// 文档仓库结构体
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    /// 创建新的文档仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl DocumentRepositoryTrait for DocumentRepository {
    /// 查询集合中第一个匹配的文档
    ///
    /// # SQL 查询说明
    ///
    /// 使用 `body @> $2` 做包含匹配，可以走 `jsonb_path_ops` GIN 索引。
    /// 按 `id` 排序保证"第一个"就是最早插入的文档。
    async fn find_one(&self, collection: &str, filter: &Value) -> DatabaseResult<Option<Document>> {
        expect_object(filter, "过滤条件")?;
        debug!("🔍 查询文档 - 集合: {}, 条件: {}", collection, filter);

        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, collection, body
            FROM documents
            WHERE collection = $1 AND body @> $2
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(collection)
        .bind(Json(filter))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find(&self, collection: &str, filter: &Value, limit: i64) -> DatabaseResult<Vec<Document>> {
        expect_object(filter, "过滤条件")?;
        debug!("🔍 查询文档列表 - 集合: {}, 条件: {}, 数量上限: {}", collection, filter, limit);

        let rows = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, collection, body
            FROM documents
            WHERE collection = $1 AND body @> $2
            ORDER BY id
            LIMIT $3
            "#,
        )
        .bind(collection)
        .bind(Json(filter))
        .bind(limit.max(0))
        .fetch_all(&self.pool)
        .await?;

        debug!("✅ 查询完成 - 找到 {} 个文档", rows.len());
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// 更新第一个匹配的文档
    ///
    /// ## SQL
    ///
    /// `body || $3` 是 JSONB 的浅合并：`patch` 中出现的键覆盖原值，其余键保持不变，
    /// 相当于文档数据库的 `$set`。
    async fn update_one(&self, collection: &str, filter: &Value, patch: &Value) -> DatabaseResult<u64> {
        expect_object(filter, "过滤条件")?;
        let patch = stamp_updated(patch)?;
        debug!("🔄 更新文档 - 集合: {}, 条件: {}, 内容: {}", collection, filter, patch);

        let result = sqlx::query(
            r#"
            UPDATE documents
            SET body = body || $3,
                updated_at = now()
            WHERE id = (
                SELECT id
                FROM documents
                WHERE collection = $1 AND body @> $2
                ORDER BY id
                LIMIT 1
            )
            "#,
        )
        .bind(collection)
        .bind(Json(filter))
        .bind(Json(&patch))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn insert(&self, collection: &str, record: Value) -> DatabaseResult<i64> {
        let body = stamp_created(record)?;
        debug!("📝 插入文档 - 集合: {}, 内容: {}", collection, body);

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO documents (collection, body, created_at, updated_at)
            VALUES ($1, $2, now(), now())
            RETURNING id
            "#,
        )
        .bind(collection)
        .bind(Json(&body))
        .fetch_one(&self.pool)
        .await?;

        debug!("✅ 文档插入成功: {}#{}", collection, id);
        Ok(id)
    }

    async fn list_collections(&self) -> DatabaseResult<Vec<String>> {
        let names: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT DISTINCT collection
            FROM documents
            ORDER BY collection
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }
}
