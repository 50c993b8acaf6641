//! 服务相关接口
//!

use crate::models::common::LimitQuery;
use crate::models::err::AppError;
use crate::AppState;
use axum::extract::{Query, State};
use axum::Json;
use shared_lib::{ScrapeResult, Service};
use site_scraper::list_records;
use tracing::{debug, instrument};

/// 服务列表默认返回的数量
const DEFAULT_SERVICE_LIMIT: u32 = 20;

/// 抓取服务页面
///
/// 从站点的 `/services` 页面抓取服务，按标题更新已有服务的链接或新建服务。
///
/// 站点不可用时返回502，此时不会写入任何数据。
#[utoipa::path(post,
    path = "/api/scrape/services",
    tag = "services",
    responses(
        (status = 200, description = "Scrape summary", body = ScrapeResult),
        (status = 502, description = "Failed to fetch services page")
    ),
)]
#[instrument(skip(state))]
pub async fn scrape_services(State(state): State<AppState>) -> Result<Json<ScrapeResult>, AppError> {
    let result = state
        .scraper
        .scrape::<Service, _>(state.repository.as_ref())
        .await?;

    Ok(Json(result))
}

/// 查询服务列表
///
/// 按写入顺序返回最多 `limit` 个服务，无法通过校验的记录会被跳过。
#[utoipa::path(get,
    path = "/api/services",
    tag = "services",
    params(LimitQuery),
    responses(
        (status = 200, description = "Services", body = Vec<Service>)
    ),
)]
#[instrument(skip(state))]
pub async fn list_services(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<Service>>, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_SERVICE_LIMIT);
    debug!("🔍 查询服务列表, limit: {}", limit);

    let services = list_records::<Service, _>(state.repository.as_ref(), limit).await?;

    Ok(Json(services))
}
