use std::sync::{Arc, Mutex};
use yt_digest::{
    types::{Transcript, TranscriptLine, VideoId},
    yt::TranscriptSource,
    TranscriptError,
};

#[derive(Clone)]
enum Outcome {
    Lines(Vec<TranscriptLine>),
    Disabled,
    NotFound,
    Broken(&'static str),
}

#[derive(Clone)]
pub struct MockTranscriptSource {
    outcome: Outcome,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockTranscriptSource {
    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Caption lines given as `(start_seconds, text)` pairs.
    pub fn new(lines: &[(f64, &str)]) -> Self {
        let lines = lines
            .iter()
            .map(|(start, text)| TranscriptLine {
                start: *start,
                duration: 2.0,
                text: text.to_string(),
            })
            .collect();

        Self::with_outcome(Outcome::Lines(lines))
    }

    pub fn disabled() -> Self {
        Self::with_outcome(Outcome::Disabled)
    }

    pub fn not_found() -> Self {
        Self::with_outcome(Outcome::NotFound)
    }

    pub fn failing(reason: &'static str) -> Self {
        Self::with_outcome(Outcome::Broken(reason))
    }
}

impl TranscriptSource for MockTranscriptSource {
    async fn fetch_transcript(&self, video_id: &VideoId) -> Result<Transcript, TranscriptError> {
        self.calls.lock().unwrap().push(video_id.to_string());

        match &self.outcome {
            Outcome::Lines(lines) => Ok(Transcript::new(lines.clone())),
            Outcome::Disabled => Err(TranscriptError::Disabled),
            Outcome::NotFound => Err(TranscriptError::NotFound {
                video_id: video_id.to_string(),
                requested: vec!["en".into()],
            }),
            Outcome::Broken(reason) => Err(TranscriptError::Fetch(reason.to_string())),
        }
    }
}
