//! 🔧 共享库模块
//!
//! 这个模块包含了在多个crate之间共享的通用代码，包括：
//! - 程序配置
//! - 记录模型（项目 / 服务）及其校验规则
//! - 集合名称、占位标题等常量

pub mod models;

// 重新导出常用类型
pub use models::{
    AppConfig, Project, Record, ScrapeResult, Service,
    // 常量
    DEFAULT_BASE_URL, DEFAULT_PORT, PROJECT_COLLECTION, PROJECT_PLACEHOLDER_TITLE, SERVICE_COLLECTION,
    SERVICE_PLACEHOLDER_TITLE,
};
