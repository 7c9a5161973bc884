pub mod models;
pub mod resolver;
pub mod traits;
pub mod youtube;
pub mod ytdlp;

pub use models::{Format, StreamDescriptor, VideoInfo, VideoMetadata};
pub use resolver::{Resolution, Resolver};
pub use traits::Extractor;
pub use ytdlp::YtDlpExtractor;
