//! ytdrop library

pub mod extractor;
pub mod selector;
pub mod server;
pub mod utils;

// Re-export main types for easier use
pub use extractor::{Extractor, Resolver, StreamDescriptor, VideoMetadata, YtDlpExtractor};
pub use selector::{choose_best, rank_all, select_best};
pub use server::{AppState, DownloadResponse};
pub use utils::{AppSettings, ResponseMode, YtdropError};
