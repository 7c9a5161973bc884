use crate::extractor::models::{StreamDescriptor, VideoMetadata};
use crate::extractor::traits::Extractor;
use crate::extractor::youtube::video_id;
use crate::utils::error::YtdropError;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Everything one resolution yields
#[derive(Debug, Clone)]
pub struct Resolution {
    pub metadata: VideoMetadata,
    /// In provider order
    pub streams: Vec<StreamDescriptor>,
}

/// Front door to the extraction provider
///
/// Validates the URL shape before handing it to the configured extractor
/// and converts provider records into `VideoMetadata`/`StreamDescriptor`.
/// Holds no per-request state, so one instance serves every request.
pub struct Resolver {
    extractor: Arc<dyn Extractor>,
}

impl Resolver {
    pub fn new(extractor: Arc<dyn Extractor>) -> Self {
        Self { extractor }
    }

    /// Resolve a YouTube URL into metadata and its available streams
    pub async fn resolve(&self, url: &str) -> Result<Resolution, YtdropError> {
        let url = url.trim();
        let id = video_id(url).inspect_err(|_| warn!("Rejected non-YouTube URL: {:?}", url))?;

        if !self.extractor.supports(url) {
            warn!("Extractor {} does not support {}", self.extractor.id(), url);
            return Err(YtdropError::InvalidInput(url.to_string()));
        }

        debug!("Routing {} to extractor: {}", id, self.extractor.id());
        let info = self.extractor.extract_info(url).await.map_err(|e| {
            error!("Extractor {} failed for {}: {:#}", self.extractor.id(), id, e);
            YtdropError::ResolutionFailed(e.to_string())
        })?;

        let metadata = VideoMetadata::from(&info);
        let streams: Vec<StreamDescriptor> =
            info.formats.iter().map(StreamDescriptor::from).collect();

        info!(
            "Resolved {} ({:?}): {} streams",
            id,
            metadata.title,
            streams.len()
        );

        Ok(Resolution { metadata, streams })
    }
}
