use std::{fmt, ops::Deref};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    error::DigestError,
    parser::{embed_url, format_offset},
};

/// YouTube's 11 character public video identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub const LEN: usize = 11;

    /// Accepts exactly 11 characters from `[0-9A-Za-z_-]`.
    pub fn parse(id: &str) -> Option<Self> {
        let valid = id.len() == Self::LEN
            && id
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');

        valid.then(|| VideoId(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for VideoId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptLine {
    /// Offset from the start of the video, in seconds
    pub start: f64,
    pub duration: f64,
    pub text: String,
}

impl TranscriptLine {
    /// Trims caption text; captions that are empty after trimming yield `None`.
    pub fn from_caption(start: f64, duration: f64, text: &str) -> Option<Self> {
        let text = text.split_whitespace().join(" ");

        (!text.is_empty()).then_some(TranscriptLine {
            start,
            duration,
            text,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub lines: Vec<TranscriptLine>,
}

impl Transcript {
    pub fn new(lines: Vec<TranscriptLine>) -> Self {
        Self { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All caption texts joined by a single space, timing discarded.
    pub fn to_plain_text(&self) -> String {
        self.lines.iter().map(|line| line.text.as_str()).join(" ")
    }

    /// One `HH:MM:SS - text` (or `MM:SS - text`) entry per line.
    pub fn to_timestamped_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| format!("{} - {}", format_offset(line.start), line.text))
            .join("\n")
    }
}

impl From<Vec<TranscriptLine>> for Transcript {
    fn from(lines: Vec<TranscriptLine>) -> Self {
        Transcript::new(lines)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoMetadata {
    pub title: String,
    pub duration: String,
}

impl VideoMetadata {
    pub const UNKNOWN_TITLE: &'static str = "Unknown Title";
    pub const UNKNOWN_DURATION: &'static str = "Unknown Duration";

    /// Placeholder used whenever the metadata lookup fails.
    pub fn unknown() -> Self {
        Self {
            title: Self::UNKNOWN_TITLE.into(),
            duration: Self::UNKNOWN_DURATION.into(),
        }
    }
}

/// Successful result of a digest run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDigest {
    /// Embeddable player link for the video
    pub video_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_duration: Option<String>,
    pub transcript: String,
    pub summary: String,
    pub highlights: Vec<String>,
}

impl VideoDigest {
    pub fn new(
        video_id: &VideoId,
        metadata: Option<VideoMetadata>,
        transcript: String,
        summary: String,
        highlights: Vec<String>,
    ) -> Self {
        let (video_title, video_duration) = match metadata {
            Some(VideoMetadata { title, duration }) => (Some(title), Some(duration)),
            None => (None, None),
        };

        Self {
            video_url: embed_url(video_id),
            video_title,
            video_duration,
            transcript,
            summary,
            highlights,
        }
    }

    /// Human readable rendering used by the command line output.
    pub fn render_text(&self) -> String {
        let mut output = String::new();

        if let Some(title) = &self.video_title {
            output.push_str(&format!("Title: {title}\n"));
        }
        if let Some(duration) = &self.video_duration {
            output.push_str(&format!("Duration: {duration}\n"));
        }
        if !output.is_empty() {
            output.push('\n');
        }

        output.push_str(&self.summary);
        output.push('\n');

        if !self.highlights.is_empty() {
            output.push_str("\nKey Highlights:\n");
            for highlight in &self.highlights {
                output.push_str(&format!("- {highlight}\n"));
            }
        }

        output
    }
}

/// Serialized shape of a run: the digest itself, or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DigestReport {
    Digest(VideoDigest),
    Error { error: String },
}

impl From<Result<VideoDigest, DigestError>> for DigestReport {
    fn from(result: Result<VideoDigest, DigestError>) -> Self {
        match result {
            Ok(digest) => DigestReport::Digest(digest),
            Err(e) => DigestReport::Error {
                error: e.to_string(),
            },
        }
    }
}
