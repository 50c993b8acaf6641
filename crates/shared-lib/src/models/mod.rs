pub mod config;
pub mod constants;
pub mod records;

// 重新导出具体的类型
pub use config::AppConfig;
pub use constants::*;
pub use records::{Project, Record, ScrapeResult, Service};
