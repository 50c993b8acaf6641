//! 页面下载
//!
//! 每次抓取只发一次GET请求，不重试。

use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// 抓取时使用的 User-Agent
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; FlamesBot/1.0; +https://example.com/bot)";

/// 单次请求的超时时间
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// 页面下载器
///
/// 抓取流程只依赖这个特征，测试时可以替换为返回固定HTML的实现
#[async_trait]
pub trait PageFetcher: Send + Sync + 'static {
    /// 下载页面并返回HTML文本，非2xx状态码视为失败
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// 方便以 `Arc<dyn PageFetcher>` 的形式放进共享状态
#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for Arc<T> {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url).await
    }
}

/// 基于 reqwest 的下载器
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let transport = |source| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;
        let status = response.status();
        debug!("🌐 GET {} -> {}", url, status);

        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// 启动一个只响应一次的HTTP服务，返回地址和收到的请求头
    async fn serve_once(response: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).to_string()
        });

        (format!("http://{addr}"), handle)
    }

    #[tokio::test]
    async fn test_fetch_returns_body_and_sends_user_agent() {
        let (base, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: 13\r\nConnection: close\r\n\r\n<p>hello</p>\n",
        )
        .await;

        let fetcher = HttpFetcher::new().unwrap();
        let body = fetcher.fetch(&format!("{base}/portfolio")).await.unwrap();
        assert_eq!(body, "<p>hello</p>\n");

        let request = server.await.unwrap().to_lowercase();
        assert!(request.starts_with("get /portfolio "));
        assert!(request.contains(&format!("user-agent: {}", USER_AGENT.to_lowercase())));
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_is_error() {
        let (base, server) =
            serve_once("HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n").await;

        let fetcher = HttpFetcher::new().unwrap();
        let err = fetcher.fetch(&format!("{base}/services")).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 500, .. }));

        server.await.unwrap();
    }
}
