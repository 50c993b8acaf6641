//! 选择器
//!
//! 候选节点的选择器是按顺序排列的一组模式，合并成一个选择器列表一次性匹配，
//! 结果按文档顺序返回，同一个节点只会出现一次。

use once_cell::sync::Lazy;
use scraper::Selector;

/// 作品集页面中项目卡片的模式
pub const PROJECT_CANDIDATE_PATTERNS: &[&str] =
    &["a[href*='/portfolio/']", ".portfolio-item", ".projects-item"];

/// 服务页面中服务条目的模式
pub const SERVICE_CANDIDATE_PATTERNS: &[&str] = &[".service", ".services-item", "a[href*='/services/']"];

pub static PROJECT_CANDIDATES: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(&PROJECT_CANDIDATE_PATTERNS.join(", ")).expect("valid project candidate selector")
});

pub static SERVICE_CANDIDATES: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(&SERVICE_CANDIDATE_PATTERNS.join(", ")).expect("valid service candidate selector")
});

/// 候选节点内部的标题元素
pub static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".title, h3, h2").expect("valid title selector"));

pub static IMAGE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("img").expect("valid image selector"));

pub static LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").expect("valid link selector"));
