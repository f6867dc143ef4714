use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::remote::ApiError;
use crate::view::Page;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    InvalidId(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// Upstream fetch failed; carries the page's fixed message.
    #[error("{0}")]
    Upstream(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Converts an upstream failure into the page's user-facing error,
    /// logging the cause.
    pub fn from_api(page: Page, err: ApiError) -> Self {
        if err.is_not_found() {
            warn!(?page, error = %err, "upstream resource not found");
            return match page.not_found_message() {
                Some(msg) => AppError::NotFound(msg.into()),
                None => AppError::Upstream(page.failure_message().into()),
            };
        }
        error!(?page, error = %err, "upstream fetch failed");
        AppError::Upstream(page.failure_message().into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::InvalidId(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let AppError::Internal(e) = &self {
            error!(error = %e, "internal error");
        }

        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode as UpstreamStatus;

    fn status_error(status: UpstreamStatus) -> ApiError {
        ApiError::Status {
            url: "https://upstream/posts/5".into(),
            status,
        }
    }

    #[test]
    fn upstream_failures_use_the_page_message() {
        let err = AppError::from_api(Page::Posts, status_error(UpstreamStatus::INTERNAL_SERVER_ERROR));
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "Failed to load posts. Please try again later.");
    }

    #[test]
    fn upstream_404_on_detail_is_not_found() {
        let err = AppError::from_api(Page::PostDetail, status_error(UpstreamStatus::NOT_FOUND));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Post not found");
    }

    #[test]
    fn internal_errors_hide_their_cause() {
        let err = AppError::from(anyhow::anyhow!("secret detail"));
        assert_eq!(err.to_string(), "Internal server error");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
