//! 内存文档仓库
//!
//! 与 [`super::DocumentRepository`] 行为一致的内存实现，不需要数据库即可运行。
//! 主要用于单元测试。

use crate::models::document::{contains, expect_object, stamp_created, stamp_updated, Document};
use crate::repositories::traits::DocumentRepositoryTrait;
use crate::DatabaseResult;
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct MemoryStore {
    next_id: i64,
    documents: Vec<Document>,
}

/// 内存文档仓库
///
/// 内部数据放在 `Arc<Mutex<..>>` 中，clone 出来的实例共享同一份数据。
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentRepository {
    store: Arc<Mutex<MemoryStore>>,
}

impl MemoryDocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 集合中的文档数量
    pub async fn count(&self, collection: &str) -> usize {
        let store = self.store.lock().await;
        store.documents.iter().filter(|d| d.collection == collection).count()
    }
}

#[async_trait::async_trait]
impl DocumentRepositoryTrait for MemoryDocumentRepository {
    async fn find_one(&self, collection: &str, filter: &Value) -> DatabaseResult<Option<Document>> {
        expect_object(filter, "过滤条件")?;

        let store = self.store.lock().await;
        Ok(store
            .documents
            .iter()
            .find(|d| d.collection == collection && contains(&d.body, filter))
            .cloned())
    }

    async fn find(&self, collection: &str, filter: &Value, limit: i64) -> DatabaseResult<Vec<Document>> {
        expect_object(filter, "过滤条件")?;

        let store = self.store.lock().await;
        Ok(store
            .documents
            .iter()
            .filter(|d| d.collection == collection && contains(&d.body, filter))
            .take(usize::try_from(limit).unwrap_or(0))
            .cloned()
            .collect())
    }

    async fn update_one(&self, collection: &str, filter: &Value, patch: &Value) -> DatabaseResult<u64> {
        expect_object(filter, "过滤条件")?;
        let patch = stamp_updated(patch)?;

        let mut store = self.store.lock().await;
        let Some(doc) = store
            .documents
            .iter_mut()
            .find(|d| d.collection == collection && contains(&d.body, filter))
        else {
            return Ok(0);
        };

        if let (Value::Object(body), Value::Object(patch)) = (&mut doc.body, patch) {
            body.extend(patch);
        }
        Ok(1)
    }

    async fn insert(&self, collection: &str, record: Value) -> DatabaseResult<i64> {
        let body = stamp_created(record)?;

        let mut store = self.store.lock().await;
        store.next_id += 1;
        let id = store.next_id;
        store.documents.push(Document {
            id,
            collection: collection.to_string(),
            body,
        });
        Ok(id)
    }

    async fn list_collections(&self) -> DatabaseResult<Vec<String>> {
        let store = self.store.lock().await;
        let names: BTreeSet<&str> = store.documents.iter().map(|d| d.collection.as_str()).collect();
        Ok(names.into_iter().map(str::to_string).collect())
    }
}
