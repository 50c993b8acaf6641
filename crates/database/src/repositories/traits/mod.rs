//! 数据库仓库 trait 定义
//!
//! 这里定义了文档仓库的抽象接口
//!
//! ## Trait 约束说明 📚
//!
//! 所有 Repository trait 都遵循统一的约束：
//!
//! ```rust,ignore
//! pub trait XxxRepositoryTrait: Send + Sync + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! - `Send`：异步方法返回的 `Future` 需要在不同线程间传递
//! - `Sync`：同一个仓库实例会被多个并发请求共享（放在 `Arc` 中）
//! - `'static`：仓库作为应用状态长期存活，不依赖短期引用
//!
//! 业务代码只依赖 trait，生产环境使用 [`crate::DocumentRepository`]（PostgreSQL），
//! 测试和本地调试使用 [`crate::MemoryDocumentRepository`]。

pub mod document;

// 重新导出
pub use document::DocumentRepositoryTrait;
