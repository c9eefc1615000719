pub mod builder;

use crate::{
    cleaner::{clean, CleanedOutput, OutputFormat},
    error::DigestError,
    llm::prompt::build_prompt,
    parser::extract_video_id,
    types::{DigestReport, VideoDigest, VideoId},
    yt::{MetadataSource, TranscriptSource},
    Summarizer,
};

/// Turns a YouTube URL into a [`VideoDigest`]: transcript, optional metadata, model
/// summary and highlights. Stages run one after another and the first failing stage
/// ends the run.
#[derive(Debug)]
pub struct DigestProcessor<T, S, M = ()>
where
    T: TranscriptSource,
    S: Summarizer,
    M: MetadataSource,
{
    transcripts: T,
    summarizer: S,
    metadata: M,
    format: OutputFormat,
    timestamps: bool,
}

impl<T, S, M> DigestProcessor<T, S, M>
where
    T: TranscriptSource,
    S: Summarizer,
    M: MetadataSource,
{
    /// Fetches the transcript and renders it as plain or timestamped text
    #[tracing::instrument(skip_all, fields(video_id = %video_id))]
    async fn fetch_transcript(&self, video_id: &VideoId) -> Result<String, DigestError> {
        let transcript = self
            .transcripts
            .fetch_transcript(video_id)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to fetch transcript"))?;

        if transcript.is_empty() {
            tracing::warn!("Transcript has no caption lines");
            return Err(DigestError::TranscriptUnavailable);
        }

        let text = if self.timestamps {
            transcript.to_timestamped_text()
        } else {
            transcript.to_plain_text()
        };

        Ok(text)
    }

    #[tracing::instrument(skip_all, fields(format = ?self.format))]
    async fn summarize(&self, transcript: &str) -> Result<String, DigestError> {
        let prompt = build_prompt(self.format, transcript, self.timestamps);

        let response = self
            .summarizer
            .summarize(&prompt)
            .await
            .map_err(|e| DigestError::SummarizeFailed(e.to_string()))
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize transcript"))?;

        Ok(response.summary)
    }

    #[tracing::instrument(skip(self))]
    pub async fn run(&self, url: &str) -> Result<VideoDigest, DigestError> {
        let video_id = extract_video_id(url).ok_or(DigestError::InvalidUrl)?;
        tracing::info!(%video_id, "Processing video");

        let transcript = self.fetch_transcript(&video_id).await?;

        let metadata = self.metadata.fetch_metadata(url).await;

        let raw_summary = self.summarize(&transcript).await?;

        let CleanedOutput {
            summary,
            highlights,
        } = clean(self.format, &raw_summary);
        tracing::info!(highlights = highlights.len(), "Digest ready");

        Ok(VideoDigest::new(
            &video_id, metadata, transcript, summary, highlights,
        ))
    }

    /// Same as [`run`](Self::run), folded into the serializable report shape.
    pub async fn report(&self, url: &str) -> DigestReport {
        self.run(url).await.into()
    }
}
