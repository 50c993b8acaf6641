use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use database::DatabaseError;
use serde_json::json;
use site_scraper::ScrapeError;
use thiserror::Error;

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
#[derive(Error, Debug)]
pub enum AppError {
    /// 抓取失败，通常是远端站点不可用，需要转换为502
    #[error(transparent)]
    ScrapeFailed(#[from] ScrapeError),

    /// 仓库层数据库错误
    #[error(transparent)]
    RepositoryError(#[from] DatabaseError),
}

impl AppError {
    fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            AppError::ScrapeFailed(err) => (StatusCode::BAD_GATEWAY, err.to_string()),
            AppError::RepositoryError(err) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Repository error: {err}")),
        }
    }
}

/// Tell axum how to convert `AppError` into a response.
///
/// 返回体格式为 `{"detail": "..."}`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_scraper::FetchError;

    #[test]
    fn test_scrape_failure_maps_to_bad_gateway() {
        let err = AppError::from(ScrapeError::Fetch {
            page: "portfolio",
            source: FetchError::Status {
                url: "https://kupi-bassein.ru/portfolio".to_string(),
                status: 500,
            },
        });

        let (status, detail) = err.status_and_detail();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(detail, "Failed to fetch portfolio page");
    }

    #[test]
    fn test_repository_error_maps_to_internal_error() {
        let response = AppError::from(DatabaseError::connection("down")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
