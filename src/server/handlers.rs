use crate::extractor::Resolver;
use crate::selector::{rank_all, select_best};
use crate::server::error::ApiError;
use crate::server::models::{
    BestFormatResponse, DownloadRequest, DownloadResponse, FormatListResponse,
};
use crate::server::AppState;
use crate::utils::config::ResponseMode;
use crate::utils::error::YtdropError;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::{Html, Json},
};
use tracing::{debug, info};

const INDEX_HTML: &str = include_str!("index.html");

/// Resolve `url` and shape the result for `mode`
pub async fn build_response(
    resolver: &Resolver,
    mode: ResponseMode,
    url: &str,
) -> Result<DownloadResponse, YtdropError> {
    let resolution = resolver.resolve(url).await?;

    match mode {
        ResponseMode::Best => {
            let stream = select_best(&resolution.streams)?;
            debug!("Best pick: {:?} {}", stream.quality_label, stream.container);
            Ok(DownloadResponse::Best(BestFormatResponse::new(
                resolution.metadata,
                stream,
            )))
        }
        ResponseMode::List => {
            let formats = rank_all(&resolution.streams);
            if formats.is_empty() {
                return Err(YtdropError::NoSuitableFormat);
            }
            debug!("Ranked {} formats", formats.len());
            Ok(DownloadResponse::List(FormatListResponse::new(
                resolution.metadata,
                formats,
            )))
        }
    }
}

/// POST /api/download
pub async fn download(
    State(state): State<AppState>,
    payload: Result<Json<DownloadRequest>, JsonRejection>,
) -> Result<Json<DownloadResponse>, ApiError> {
    let Json(request) = payload?;
    info!("Download request ({}) for {}", state.mode.as_str(), request.url);

    let response = build_response(&state.resolver, state.mode, &request.url).await?;
    Ok(Json(response))
}

/// GET /api/health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
