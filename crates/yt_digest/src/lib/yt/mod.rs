pub mod metadata;
pub mod transcript;

use std::future::Future;

use crate::{
    error::TranscriptError,
    types::{Transcript, VideoId, VideoMetadata},
};

/// Caption lookup for a single video.
pub trait TranscriptSource {
    fn fetch_transcript(
        &self,
        video_id: &VideoId,
    ) -> impl Future<Output = Result<Transcript, TranscriptError>>;
}

/// Title/duration lookup. Implementations never fail: lookup errors degrade to
/// [`VideoMetadata::unknown`].
pub trait MetadataSource {
    /// `None` means metadata is not collected at all.
    fn fetch_metadata(&self, url: &str) -> impl Future<Output = Option<VideoMetadata>>;
}

impl MetadataSource for () {
    async fn fetch_metadata(&self, _url: &str) -> Option<VideoMetadata> {
        None
    }
}
