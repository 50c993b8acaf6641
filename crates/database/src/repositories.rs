//! 数据库仓库模块
//!
//! 这里定义文档存储的Repository层

pub mod document;
pub mod memory;
pub mod traits;

// 重新导出具体的类型
pub use document::DocumentRepository;
pub use memory::MemoryDocumentRepository;
pub use traits::DocumentRepositoryTrait;
