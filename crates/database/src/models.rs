//! 数据库模型模块
//!
//! 这里定义与数据库表对应的结构体和相关操作

pub mod document;

// 重新导出具体的模型
pub use document::{contains, Document};
