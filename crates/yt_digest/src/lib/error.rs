//! Error types for the digest pipeline.
//!
//! Terminal failures are tagged by [`DigestError`]. The `Display` texts are the
//! messages a caller prints (or places under the `"error"` key of a report).

/// A terminal failure of a single digest run.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DigestError {
    #[error("❌ Invalid YouTube URL.")]
    InvalidUrl,
    #[error("Transcript is not available for this video.")]
    TranscriptUnavailable,
    #[error("Error fetching transcript: {0}")]
    FetchFailed(String),
    #[error("Error generating summary: {0}")]
    SummarizeFailed(String),
}

impl From<TranscriptError> for DigestError {
    fn from(err: TranscriptError) -> Self {
        if err.is_unavailable() {
            DigestError::TranscriptUnavailable
        } else {
            DigestError::FetchFailed(err.to_string())
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("Subtitles are disabled for this video")]
    Disabled,
    #[error("No transcript found for video {video_id} in languages {requested:?}")]
    NotFound {
        video_id: String,
        requested: Vec<String>,
    },
    #[error("Failed to create the caption client: {0}")]
    Client(String),
    #[error("{0}")]
    Fetch(String),
}

impl TranscriptError {
    /// Whether the video simply has no usable captions, as opposed to a failed fetch.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            TranscriptError::Disabled | TranscriptError::NotFound { .. }
        )
    }
}
