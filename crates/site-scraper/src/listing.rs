//! 记录读取
//!
//! 从存储中读取原始文档并转换为记录。无法转换或校验失败的文档直接跳过，
//! 不会返回部分记录，也不会让请求失败。

use crate::error::RecordError;
use database::{DatabaseError, DocumentRepositoryTrait};
use serde_json::{json, Value};
use shared_lib::Record;
use tracing::debug;

/// 读取最多 `limit` 条记录（按插入顺序）
pub async fn list_records<T, R>(repo: &R, limit: u32) -> Result<Vec<T>, DatabaseError>
where
    T: Record,
    R: DocumentRepositoryTrait + ?Sized,
{
    let documents = repo.find(T::COLLECTION, &json!({}), i64::from(limit)).await?;

    let records = documents
        .into_iter()
        .filter_map(|doc| match coerce::<T>(doc.body) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!("跳过无效文档 {}#{}: {}", doc.collection, doc.id, e);
                None
            }
        })
        .collect();

    Ok(records)
}

/// 将原始文档转换为记录，缺失的字段使用默认值
pub fn coerce<T: Record>(body: Value) -> Result<T, RecordError> {
    let record: T = serde_json::from_value(body)?;
    record.validate()?;
    Ok(record)
}
