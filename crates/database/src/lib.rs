//! 文档存储模块
//!
//! 这个模块提供了数据库连接、迁移，以及按集合(collection)读写JSON文档的仓库

pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;

pub use connection::{initialize_database, DatabasePool};
pub use error::DatabaseError;
pub use models::document::Document;
pub use repositories::{
    document::DocumentRepository, memory::MemoryDocumentRepository, traits::DocumentRepositoryTrait,
};

/// 数据库操作结果类型
pub type DatabaseResult<T> = Result<T, DatabaseError>;
