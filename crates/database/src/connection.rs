use crate::{DatabaseError, DatabaseResult};
use shared_lib::AppConfig;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Pool, Postgres};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// 数据库连接池
pub type DatabasePool = Pool<Postgres>;

/// 创建数据库连接池并执行迁移（一站式函数）
///
/// 连接池是懒连接的：数据库暂时不可用时服务照常启动，迁移失败只记录警告，
/// 存储状态通过 `/test` 接口查看。只有连接串本身无法解析时才返回错误。
pub async fn initialize_database(config: &AppConfig) -> DatabaseResult<DatabasePool> {
    let options = PgConnectOptions::from_str(&config.postgresql_conn_str)
        .map_err(|e| DatabaseError::connection(format!("无效的PostgreSQL连接串: {e}")))?;

    // 抓取接口是手动触发的，连接数不需要太多
    // 注意：pool已经是一个智能指针了，所以可以使用.clone()安全跨线程使用
    let pool = PgPoolOptions::new()
        .max_connections(config.max_db_pool_size)
        .acquire_timeout(Duration::from_secs(3))
        // 1小时空闲则释放
        .idle_timeout(Duration::from_secs(3600))
        // 6小时强制释放，避免长时间链接导致数据库问题
        .max_lifetime(Duration::from_secs(3600 * 6))
        .test_before_acquire(true)
        .connect_lazy_with(options);

    info!("🗄️ 数据库连接池创建成功");

    if let Err(e) = run_migrations(&pool).await {
        warn!("⚠️ {}，服务继续启动", e);
    }

    Ok(pool)
}

/// 执行 `migrations` 目录下的数据库迁移
async fn run_migrations(pool: &DatabasePool) -> DatabaseResult<()> {
    info!("🔄 开始执行数据库迁移...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| DatabaseError::migration(format!("数据库迁移失败: {e}")))?;

    info!("✅ 数据库迁移完成");
    Ok(())
}
