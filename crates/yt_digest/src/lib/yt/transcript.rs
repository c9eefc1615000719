use yt_transcript_rs::{
    api::YouTubeTranscriptApi,
    errors::{CouldNotRetrieveTranscript, CouldNotRetrieveTranscriptReason},
};

use crate::{
    error::TranscriptError,
    types::{Transcript, TranscriptLine, VideoId},
    yt::TranscriptSource,
};

/// Caption download through `yt-transcript-rs`.
pub struct TranscriptClient {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
}

impl TranscriptClient {
    pub fn new() -> Result<Self, TranscriptError> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| TranscriptError::Client(e.to_string()))?;

        Ok(Self {
            api,
            languages: vec!["en".into()],
        })
    }

    /// Preferred caption languages, most wanted first.
    pub fn with_languages<I, L>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    fn map_error(&self, video_id: &VideoId, err: CouldNotRetrieveTranscript) -> TranscriptError {
        classify_failure(
            err.reason.as_ref(),
            video_id,
            &self.languages,
            err.to_string(),
        )
    }
}

impl TranscriptSource for TranscriptClient {
    #[tracing::instrument(skip_all, fields(video_id = %video_id))]
    async fn fetch_transcript(&self, video_id: &VideoId) -> Result<Transcript, TranscriptError> {
        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();

        let fetched = self
            .api
            .fetch_transcript(video_id.as_str(), &languages, false)
            .await
            .map_err(|e| self.map_error(video_id, e))
            .inspect_err(|e| tracing::warn!(error = %e, "Failed to fetch captions"))?;

        let lines: Vec<TranscriptLine> = fetched
            .snippets
            .into_iter()
            .filter_map(|snippet| {
                TranscriptLine::from_caption(snippet.start, snippet.duration, &snippet.text)
            })
            .collect();
        tracing::info!(lines = lines.len(), "Fetched transcript");

        Ok(Transcript::new(lines))
    }
}

/// Sorts a caption library failure into "no captions to use" or a failed fetch.
fn classify_failure(
    reason: Option<&CouldNotRetrieveTranscriptReason>,
    video_id: &VideoId,
    languages: &[String],
    message: String,
) -> TranscriptError {
    match reason {
        Some(CouldNotRetrieveTranscriptReason::TranscriptsDisabled { .. }) => {
            TranscriptError::Disabled
        }
        Some(CouldNotRetrieveTranscriptReason::NoTranscriptFound { .. }) => {
            TranscriptError::NotFound {
                video_id: video_id.to_string(),
                requested: languages.to_vec(),
            }
        }
        _ => TranscriptError::Fetch(message),
    }
}
