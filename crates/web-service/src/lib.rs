//! Web服务模块
//!
//! 提供 HTTP API 接口和文档服务

use color_eyre::Result;
use database::DocumentRepositoryTrait;
use shared_lib::AppConfig;
use site_scraper::{HttpFetcher, PageFetcher, Scraper};
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::info;

pub mod models;
pub mod routes;

pub use routes::create_app_router;

/// 站点抓取器，下载器以特征对象的形式保存，方便测试替换
pub type SiteScraper = Scraper<Arc<dyn PageFetcher>>;

/// 应用共享状态
///
/// 所有字段都是 `Arc`，clone 成本很低，axum 会为每个请求 clone 一份
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn DocumentRepositoryTrait>,
    pub scraper: Arc<SiteScraper>,
}

impl AppState {
    pub fn new(repository: Arc<dyn DocumentRepositoryTrait>, scraper: SiteScraper) -> Self {
        Self {
            repository,
            scraper: Arc::new(scraper),
        }
    }
}

/// 启动 Web 服务
pub async fn start_web_service(
    config: Arc<AppConfig>,
    repository: Arc<dyn DocumentRepositoryTrait>,
    mut shutdown_rx: Receiver<bool>,
) -> Result<()> {
    let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpFetcher::new()?);
    let scraper = Scraper::new(config.scrape_base_url.clone(), fetcher);
    let shared_state = AppState::new(repository, scraper);

    let router = create_app_router(shared_state);

    let bind_addr = config.bind_addr();
    info!("🚀 启动 Web Service 在 {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            // 发送端被丢弃时同样视为关闭信号
            let _ = shutdown_rx.changed().await;
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}
