//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 用户可以在导出路由时传入共享数据 shared_state，这样所有路由函数都可以访问。

use crate::routes::health::__path_root;
use crate::routes::health::__path_test_database;
use crate::routes::health::{root, test_database};
use crate::routes::projects::__path_list_projects;
use crate::routes::projects::__path_scrape_projects;
use crate::routes::projects::{list_projects, scrape_projects};
use crate::routes::services::__path_list_services;
use crate::routes::services::__path_scrape_services;
use crate::routes::services::{list_services, scrape_services};
use crate::AppState;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod health;
pub mod projects;
pub mod services;

/// 导出当前App的所有路由
///
/// ## 参数定义
/// - state: 共享数据，参考 [`AppState`] 定义。存放文档仓库和抓取器。
///
/// ## **❗️注意事项：**
///
/// [`routes!`] 宏中的多个handler必须是同一个路径的不同http方法，
/// 这里每个路径只有一个方法，所以每个handler单独注册。
fn routers(state: AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(root))
        .routes(routes!(test_database))
        .routes(routes!(scrape_projects))
        .routes(routes!(list_projects))
        .routes(routes!(scrape_services))
        .routes(routes!(list_services))
        .with_state(state)
}

/// 允许任意来源、方法和请求头
///
/// 接口只提供公开的只读数据和手动触发的抓取
fn cors() -> CorsLayer {
    CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档
/// - 生成App路由
/// - 使用Scalar作为最终在线文档格式
/// - CORS
///
/// 由于使用了 `utoipa` 库来自动化生成`openapi`文档，因此我们没有使用原生的 [`Router`]，而是使用了
/// [`OpenApiRouter`] 。
pub fn create_app_router(shared_state: AppState) -> Router {
    // 当前项目的OpenAPI声明
    #[derive(OpenApi)]
    #[openapi(
        info(title = "kupi-bassein API"),
        tags(
            (name = "health", description = "服务与存储状态"),
            (name = "projects", description = "泳池项目：抓取与查询"),
            (name = "services", description = "服务：抓取与查询"),
        ),
    )]
    struct ApiDoc;

    // 最终拿到的变量：
    // - router: Axum的Router，实际的路由对象
    // - api: utoipa的OpenApi，生成的OpenAPI对象
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routers(shared_state))
        .split_for_parts();

    // 合并文档路由，用户可通过 /docs 访问文档网页地址
    router.merge(Scalar::with_url("/docs", api)).layer(cors())
}
