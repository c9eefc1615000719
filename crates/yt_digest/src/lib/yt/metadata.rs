use std::path::PathBuf;

use serde::Deserialize;
use tokio::process::Command;

use crate::{parser::format_duration, types::VideoMetadata, yt::MetadataSource};

/// Title and duration lookup through the `yt-dlp` executable, without downloading media.
#[derive(Debug, Clone)]
pub struct YtDlpMetadata {
    binary: PathBuf,
}

impl Default for YtDlpMetadata {
    fn default() -> Self {
        Self::new("yt-dlp")
    }
}

#[derive(Debug, thiserror::Error)]
enum YtDlpError {
    #[error("Failed to run yt-dlp: {0}")]
    Io(#[from] std::io::Error),
    #[error("yt-dlp exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },
    #[error("Invalid yt-dlp output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct YtDlpInfo {
    title: Option<String>,
    duration: Option<f64>,
}

impl YtDlpMetadata {
    const NO_TITLE: &'static str = "No title found";

    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    async fn dump_info(&self, url: &str) -> Result<YtDlpInfo, YtDlpError> {
        let output = Command::new(&self.binary)
            .arg("--skip-download")
            .arg("--dump-single-json")
            .arg("--no-warnings")
            .arg(url)
            .output()
            .await?;

        if !output.status.success() {
            return Err(YtDlpError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(serde_json::from_slice(&output.stdout)?)
    }
}

impl YtDlpInfo {
    fn into_metadata(self) -> VideoMetadata {
        VideoMetadata {
            title: self.title.unwrap_or_else(|| YtDlpMetadata::NO_TITLE.into()),
            duration: format_duration(self.duration.unwrap_or(0.0).max(0.0) as u64),
        }
    }
}

impl MetadataSource for YtDlpMetadata {
    #[tracing::instrument(skip(self))]
    async fn fetch_metadata(&self, url: &str) -> Option<VideoMetadata> {
        let metadata = match self.dump_info(url).await {
            Ok(info) => info.into_metadata(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch video metadata");
                VideoMetadata::unknown()
            }
        };

        Some(metadata)
    }
}
