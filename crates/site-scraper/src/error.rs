use database::DatabaseError;
use thiserror::Error;
use validator::ValidationErrors;

/// 页面下载错误
#[derive(Error, Debug)]
pub enum FetchError {
    /// 远端返回了非2xx状态码
    #[error("请求 {url} 返回状态码 {status}")]
    Status { url: String, status: u16 },

    /// 网络错误、超时等
    #[error("请求 {url} 失败: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// 创建HTTP客户端失败
    #[error("无法创建HTTP客户端: {0}")]
    Client(#[source] reqwest::Error),
}

/// 抓取错误
///
/// 只有页面下载失败才会让整次抓取失败，单个候选节点的错误会被跳过。
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Failed to fetch {page} page")]
    Fetch {
        page: &'static str,
        #[source]
        source: FetchError,
    },
}

/// 单条记录的处理错误（写入时的候选节点、读取时的存储文档）
#[derive(Error, Debug)]
pub enum RecordError {
    /// 字段格式校验失败
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// 文档无法转换为记录
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// 存储读写失败
    #[error(transparent)]
    Store(#[from] DatabaseError),
}
