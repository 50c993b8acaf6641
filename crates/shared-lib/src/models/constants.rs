//! 常量定义模块
//!
//! 统一管理集合名称、占位标题等常量，
//! 确保抓取、存储和查询使用的名称保持一致。

/// 项目记录所在的集合
pub const PROJECT_COLLECTION: &str = "project";

/// 服务记录所在的集合
pub const SERVICE_COLLECTION: &str = "service";

/// 项目标题缺失时使用的占位标题
pub const PROJECT_PLACEHOLDER_TITLE: &str = "Проект";

/// 服务标题缺失时使用的占位标题
pub const SERVICE_PLACEHOLDER_TITLE: &str = "Услуга";

/// 被抓取站点的地址
///
/// 可通过环境变量 `SCRAPE_BASE_URL` 覆盖
pub const DEFAULT_BASE_URL: &str = "https://kupi-bassein.ru";

/// 默认监听端口
pub const DEFAULT_PORT: u16 = 8000;
