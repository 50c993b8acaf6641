//! 记录模型
//!
//! 每个模型对应文档存储中的一个集合（模型名的小写形式）。
//! 同一个结构体既用于抓取后写入，也用于从存储中读取后返回给前端。

use crate::models::constants::{
    PROJECT_COLLECTION, PROJECT_PLACEHOLDER_TITLE, SERVICE_COLLECTION, SERVICE_PLACEHOLDER_TITLE,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// 可存储的记录
///
/// 从存储读出的原始文档通过 `serde_json::from_value` 转换为记录，
/// 再调用 [`Validate::validate`] 检查字段格式。
pub trait Record: Serialize + DeserializeOwned + Validate + Send + Sync + 'static {
    /// 记录所在的集合名称
    const COLLECTION: &'static str;
}

/// 泳池项目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct Project {
    #[schema(example = "Бассейн 8x4 в Подмосковье")]
    /// 项目名称，缺失时为占位标题
    #[serde(default = "project_placeholder_title")]
    pub title: String,

    #[schema(example = "Москва")]
    /// 城市
    #[serde(default)]
    pub city: Option<String>,

    #[schema(example = "https://kupi-bassein.ru/upload/pool.jpg")]
    /// 项目图片
    #[serde(default)]
    #[validate(custom(function = "validate_http_url"))]
    pub image: Option<String>,

    /// 项目参数
    #[serde(default)]
    pub specs: Vec<String>,

    #[schema(example = "https://kupi-bassein.ru/portfolio/1")]
    /// 原始页面地址，同时也是抓取时的唯一键
    #[serde(default)]
    #[validate(custom(function = "validate_http_url"))]
    pub source_url: Option<String>,
}

impl Record for Project {
    const COLLECTION: &'static str = PROJECT_COLLECTION;
}

/// 服务
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct Service {
    #[schema(example = "Строительство бассейнов")]
    /// 服务名称，同时也是抓取时的唯一键
    #[serde(default = "service_placeholder_title")]
    pub title: String,

    /// 服务描述
    #[serde(default)]
    pub description: Option<String>,

    #[schema(example = "https://kupi-bassein.ru/services/stroitelstvo")]
    /// 原始页面地址
    #[serde(default)]
    #[validate(custom(function = "validate_http_url"))]
    pub source_url: Option<String>,
}

impl Record for Service {
    const COLLECTION: &'static str = SERVICE_COLLECTION;
}

/// 一次抓取的统计结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct ScrapeResult {
    #[schema(example = 3)]
    /// 新建的记录数
    pub created: u32,

    #[schema(example = 9)]
    /// 更新的记录数
    pub updated: u32,

    #[schema(example = 12)]
    /// created + updated
    pub total: u32,
}

impl ScrapeResult {
    pub fn new(created: u32, updated: u32) -> Self {
        Self {
            created,
            updated,
            total: created + updated,
        }
    }
}

fn project_placeholder_title() -> String {
    PROJECT_PLACEHOLDER_TITLE.to_string()
}

fn service_placeholder_title() -> String {
    SERVICE_PLACEHOLDER_TITLE.to_string()
}

/// 必须是带主机名的 http/https 绝对地址
fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host_str().is_some() => Ok(()),
        _ => Err(ValidationError::new("http_url")),
    }
}
