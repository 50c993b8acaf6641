//! 抓取并写入
//!
//! 流程：
//! 1. 下载列表页（失败则整次抓取失败，不写入任何数据）
//! 2. 用候选选择器找出节点，按文档顺序计算唯一键，重复的键只保留第一次出现
//! 3. 对每个候选提取字段、校验，然后按唯一键更新或新建
//!
//! 第3步中任何一个候选出错都只会跳过该候选，不影响其他候选。

use crate::error::{RecordError, ScrapeError};
use crate::extract::{extract_image, extract_link, extract_title, resolve_url, TitleFallback};
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::selectors::{PROJECT_CANDIDATES, SERVICE_CANDIDATES};
use database::DocumentRepositoryTrait;
use scraper::{ElementRef, Html, Selector};
use serde_json::{json, Value};
use shared_lib::{Project, Record, ScrapeResult, Service, PROJECT_PLACEHOLDER_TITLE};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// 可以从站点页面抓取的记录
pub trait ScrapeTarget: Record {
    /// 列表页路径
    const PATH: &'static str;

    /// 页面名称，用于错误信息
    const PAGE_NAME: &'static str;

    /// 候选节点选择器
    fn candidates() -> &'static Selector;

    /// 计算候选节点的唯一键，无法确定时返回 `None`（跳过该节点）
    fn natural_key(node: ElementRef<'_>, base_url: &str) -> Option<String>;

    /// 根据节点和已经计算出的唯一键构建记录
    fn build(node: ElementRef<'_>, base_url: &str, key: String) -> Self;

    /// 按唯一键查找已有记录的过滤条件
    fn key_filter(&self) -> Value;

    /// 已有记录需要更新的字段
    fn update_patch(&self) -> Value;
}

impl ScrapeTarget for Project {
    const PATH: &'static str = "/portfolio";
    const PAGE_NAME: &'static str = "portfolio";

    fn candidates() -> &'static Selector {
        &PROJECT_CANDIDATES
    }

    /// 项目以页面地址为唯一键，没有链接的卡片直接丢弃
    fn natural_key(node: ElementRef<'_>, base_url: &str) -> Option<String> {
        extract_link(node).map(|href| resolve_url(base_url, &href))
    }

    fn build(node: ElementRef<'_>, base_url: &str, key: String) -> Self {
        Project {
            title: extract_title(node, TitleFallback::None)
                .unwrap_or_else(|| PROJECT_PLACEHOLDER_TITLE.to_string()),
            city: None,
            image: extract_image(node, base_url),
            specs: Vec::new(),
            source_url: Some(key),
        }
    }

    fn key_filter(&self) -> Value {
        json!({ "source_url": self.source_url })
    }

    fn update_patch(&self) -> Value {
        json!({ "title": self.title, "image": self.image })
    }
}

impl ScrapeTarget for Service {
    const PATH: &'static str = "/services";
    const PAGE_NAME: &'static str = "services";

    fn candidates() -> &'static Selector {
        &SERVICE_CANDIDATES
    }

    /// 服务以标题为唯一键，取不到任何标题文本时丢弃
    fn natural_key(node: ElementRef<'_>, _base_url: &str) -> Option<String> {
        extract_title(node, TitleFallback::NodeText)
    }

    fn build(node: ElementRef<'_>, base_url: &str, key: String) -> Self {
        Service {
            title: key,
            description: None,
            source_url: extract_link(node).map(|href| resolve_url(base_url, &href)),
        }
    }

    fn key_filter(&self) -> Value {
        json!({ "title": self.title })
    }

    fn update_patch(&self) -> Value {
        json!({ "source_url": self.source_url })
    }
}

/// 单个候选的写入结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Upsert {
    Created,
    Updated,
}

/// 站点抓取器
///
/// 持有站点地址和下载器，存储通过参数显式传入。
#[derive(Debug, Clone)]
pub struct Scraper<F: PageFetcher = HttpFetcher> {
    base_url: String,
    fetcher: F,
}

impl<F: PageFetcher> Scraper<F> {
    pub fn new(base_url: impl Into<String>, fetcher: F) -> Self {
        Self {
            base_url: base_url.into(),
            fetcher,
        }
    }

    /// 抓取 `T` 对应的列表页，并写入存储
    ///
    /// # 返回值
    /// 新建和更新的记录数，见 [`ScrapeResult`]
    ///
    /// # 错误处理
    /// 只有页面下载失败会返回 [`ScrapeError::Fetch`]，此时存储不会被修改
    pub async fn scrape<T, R>(&self, repo: &R) -> Result<ScrapeResult, ScrapeError>
    where
        T: ScrapeTarget,
        R: DocumentRepositoryTrait + ?Sized,
    {
        let url = format!("{}{}", self.base_url, T::PATH);
        info!("🕷️ 开始抓取 {}", url);

        let html = self
            .fetcher
            .fetch(&url)
            .await
            .map_err(|source| ScrapeError::Fetch {
                page: T::PAGE_NAME,
                source,
            })?;

        // Html 不是 Send，必须在第一个 await 之前用完并释放
        let candidates = collect_candidates::<T>(&html, &self.base_url);
        debug!("📋 {} 找到 {} 个候选", url, candidates.len());

        let mut created = 0;
        let mut updated = 0;
        for (key, record) in candidates {
            match upsert(repo, &record).await {
                Ok(Upsert::Created) => created += 1,
                Ok(Upsert::Updated) => updated += 1,
                Err(e) => warn!("⚠️ 跳过候选 {}: {}", key, e),
            }
        }

        let result = ScrapeResult::new(created, updated);
        info!(
            "✅ 抓取完成 {} - 新建: {}, 更新: {}, 总计: {}",
            url, result.created, result.updated, result.total
        );
        Ok(result)
    }
}

/// 解析HTML，按文档顺序返回去重后的 (唯一键, 记录)
pub fn collect_candidates<T: ScrapeTarget>(html: &str, base_url: &str) -> Vec<(String, T)> {
    let document = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for node in document.select(T::candidates()) {
        let Some(key) = T::natural_key(node, base_url) else {
            continue;
        };
        if !seen.insert(key.clone()) {
            debug!("重复的候选 {}，已忽略", key);
            continue;
        }
        let record = T::build(node, base_url, key.clone());
        records.push((key, record));
    }

    records
}

/// 按唯一键写入：已存在则只更新可变字段，否则新建
async fn upsert<T, R>(repo: &R, record: &T) -> Result<Upsert, RecordError>
where
    T: ScrapeTarget,
    R: DocumentRepositoryTrait + ?Sized,
{
    record.validate()?;

    let filter = record.key_filter();
    if repo.find_one(T::COLLECTION, &filter).await?.is_some() {
        repo.update_one(T::COLLECTION, &filter, &record.update_patch()).await?;
        Ok(Upsert::Updated)
    } else {
        repo.insert(T::COLLECTION, serde_json::to_value(record)?).await?;
        Ok(Upsert::Created)
    }
}
