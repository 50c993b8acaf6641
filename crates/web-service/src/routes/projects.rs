//! 泳池项目相关接口
//!

use crate::models::common::LimitQuery;
use crate::models::err::AppError;
use crate::AppState;
use axum::extract::{Query, State};
use axum::Json;
use shared_lib::{Project, ScrapeResult};
use site_scraper::list_records;
use tracing::{debug, instrument};

/// 项目列表默认返回的数量
const DEFAULT_PROJECT_LIMIT: u32 = 12;

/// 抓取作品集页面
///
/// 从站点的 `/portfolio` 页面抓取项目，按 `source_url` 更新已有项目或新建项目。
///
/// 站点不可用时返回502，此时不会写入任何数据。
#[utoipa::path(post,
    path = "/api/scrape/projects",
    tag = "projects",
    responses(
        (status = 200, description = "Scrape summary", body = ScrapeResult),
        (status = 502, description = "Failed to fetch portfolio page")
    ),
)]
#[instrument(skip(state))]
pub async fn scrape_projects(State(state): State<AppState>) -> Result<Json<ScrapeResult>, AppError> {
    let result = state
        .scraper
        .scrape::<Project, _>(state.repository.as_ref())
        .await?;

    Ok(Json(result))
}

/// 查询项目列表
///
/// 按写入顺序返回最多 `limit` 个项目，无法通过校验的记录会被跳过。
#[utoipa::path(get,
    path = "/api/projects",
    tag = "projects",
    params(LimitQuery),
    responses(
        (status = 200, description = "Projects", body = Vec<Project>)
    ),
)]
#[instrument(skip(state))]
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<Project>>, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_PROJECT_LIMIT);
    debug!("🔍 查询项目列表, limit: {}", limit);

    let projects = list_records::<Project, _>(state.repository.as_ref(), limit).await?;

    Ok(Json(projects))
}
