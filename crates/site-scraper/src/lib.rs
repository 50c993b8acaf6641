//! 站点抓取模块
//!
//! 从 kupi-bassein.ru 的作品集和服务页面中提取记录，写入文档存储，并提供读取接口：
//!
//! - [`extract`]：从单个HTML节点中提取标题、图片、链接
//! - [`fetch`]：页面下载（[`PageFetcher`] 特征及其 reqwest 实现）
//! - [`scrape`]：抓取并按唯一键写入（存在则更新，否则新建）
//! - [`listing`]：读取记录，跳过无法通过校验的文档

pub mod error;
pub mod extract;
pub mod fetch;
pub mod listing;
pub mod scrape;
pub mod selectors;

pub use error::{FetchError, RecordError, ScrapeError};
pub use fetch::{HttpFetcher, PageFetcher};
pub use listing::list_records;
pub use scrape::{ScrapeTarget, Scraper};
