//! 文档数据库模型
//!
//! 所有集合共用一张 `documents` 表，记录内容保存在 JSONB 字段 `body` 中

use chrono::Utc;
use serde_json::{Map, Value};
use sqlx::types::Json;

use crate::{DatabaseError, DatabaseResult};

/// 存储中的一条文档
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: i64,
    pub collection: String,
    pub body: Value,
}

/// `documents` 表的原始行
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct DocumentRow {
    pub id: i64,
    pub collection: String,
    pub body: Json<Value>,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        Self {
            id: row.id,
            collection: row.collection,
            body: row.body.0,
        }
    }
}

/// 确认传入的值是JSON对象，过滤条件、更新内容和新文档都必须是对象
pub(crate) fn expect_object<'a>(value: &'a Value, what: &str) -> DatabaseResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| DatabaseError::invalid_document(format!("{what} 必须是JSON对象, 实际为: {value}")))
}

/// 为新文档写入 `created_at` / `updated_at`
pub(crate) fn stamp_created(record: Value) -> DatabaseResult<Value> {
    let mut body = expect_object(&record, "新文档")?.clone();
    let now = Value::String(Utc::now().to_rfc3339());
    body.insert("created_at".to_string(), now.clone());
    body.insert("updated_at".to_string(), now);
    Ok(Value::Object(body))
}

/// 为更新内容写入 `updated_at`
pub(crate) fn stamp_updated(patch: &Value) -> DatabaseResult<Value> {
    let mut body = expect_object(patch, "更新内容")?.clone();
    body.insert("updated_at".to_string(), Value::String(Utc::now().to_rfc3339()));
    Ok(Value::Object(body))
}

/// 判断 `body` 是否包含 `filter`
///
/// 与 PostgreSQL 的 `jsonb @> jsonb` 语义一致：
/// - 对象：`filter` 中每个键都存在于 `body`，且对应的值也满足包含关系
/// - 数组：`filter` 中每个元素都被 `body` 的某个元素包含
/// - 标量：直接比较相等
pub fn contains(body: &Value, filter: &Value) -> bool {
    match (body, filter) {
        (Value::Object(body), Value::Object(filter)) => filter
            .iter()
            .all(|(key, expected)| body.get(key).is_some_and(|actual| contains(actual, expected))),
        (Value::Array(body), Value::Array(filter)) => filter
            .iter()
            .all(|expected| body.iter().any(|actual| contains(actual, expected))),
        _ => body == filter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contains_matches_subset_of_keys() {
        let body = json!({"title": "Бассейн", "source_url": "https://kupi-bassein.ru/portfolio/1", "specs": ["8x4", "скиммер"]});

        assert!(contains(&body, &json!({})));
        assert!(contains(&body, &json!({"title": "Бассейн"})));
        assert!(contains(&body, &json!({"specs": ["скиммер"]})));
        assert!(!contains(&body, &json!({"title": "Другой"})));
        assert!(!contains(&body, &json!({"city": "Москва"})));
    }

    #[test]
    fn test_contains_null_requires_explicit_null() {
        let with_null = json!({"source_url": null});
        let without_key = json!({"title": "x"});

        assert!(contains(&with_null, &json!({"source_url": null})));
        assert!(!contains(&without_key, &json!({"source_url": null})));
    }

    #[test]
    fn test_stamp_created_rejects_non_objects() {
        assert!(stamp_created(json!(["not", "an", "object"])).is_err());

        let stamped = stamp_created(json!({"title": "x"})).unwrap();
        assert!(stamped.get("created_at").is_some());
        assert_eq!(stamped.get("created_at"), stamped.get("updated_at"));
    }
}
