use color_eyre::eyre::Context;
use color_eyre::Result;
use database::{DocumentRepository, DocumentRepositoryTrait};
use shared_lib::AppConfig;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // 默认info级别，可通过 RUST_LOG 调整，例如 RUST_LOG=site_scraper=debug
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load()?;
    info!("⚙️ 配置加载完成, 端口: {}, 抓取站点: {}", config.port, config.scrape_base_url);

    let pool = database::initialize_database(&config)
        .await
        .context("Initialize document store")?;
    let repository: Arc<dyn DocumentRepositoryTrait> = Arc::new(DocumentRepository::new(pool));

    // 用于通知 Web 服务优雅关闭
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            // 发送端必须保持存活，否则 Web 服务会把通道关闭当作关闭信号
            error!("❌ 监听关闭信号失败: {}", e);
            std::future::pending::<()>().await;
        }
        info!("🛑 收到关闭信号");
        let _ = shutdown_tx.send(true);
    });

    web_service::start_web_service(config, repository, shutdown_rx).await?;

    info!("👋 服务已退出");
    Ok(())
}
