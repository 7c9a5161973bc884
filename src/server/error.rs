use crate::server::models::ErrorBody;
use crate::utils::error::YtdropError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::{error, warn};

/// Error as the HTTP client sees it
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.into(),
        }
    }
}

impl From<YtdropError> for ApiError {
    fn from(err: YtdropError) -> Self {
        match err {
            YtdropError::InvalidInput(_) => ApiError::bad_request("Invalid YouTube URL"),
            YtdropError::NoSuitableFormat => {
                ApiError::unprocessable(YtdropError::NoSuitableFormat.to_string())
            }
            YtdropError::ResolutionFailed(_) => ApiError::internal("Download failed"),
            other => {
                error!("Unexpected error while handling request: {}", other);
                ApiError::internal("Download failed")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!("Rejected request body: {}", rejection.body_text());
        ApiError::bad_request("Invalid YouTube URL")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                YtdropError::InvalidInput("x".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                YtdropError::ResolutionFailed("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                YtdropError::NoSuitableFormat,
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (YtdropError::YtDlpNotFound, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[test]
    fn test_resolution_details_not_leaked() {
        let api = ApiError::from(YtdropError::ResolutionFailed(
            "ERROR: [youtube] secret stderr".to_string(),
        ));
        assert_eq!(api.message, "Download failed");
    }
}
