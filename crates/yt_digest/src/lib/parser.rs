//! # Yt Parser
//!
//! Pattern based helpers for YouTube inputs: video ids from URLs and the time
//! formats used in digests.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::VideoId;

static YT_VIDEO_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").unwrap());

/// Extracts the video id from anything that contains `v=<id>` or `/<id>`.
///
/// The scheme and host are never checked, so `youtu.be/<id>`, `/shorts/<id>` and
/// `watch?v=<id>` all work, and so does a bare path.
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    YT_VIDEO_ID_RE
        .captures(url)
        .and_then(|cap| cap.get(1))
        .and_then(|m| VideoId::parse(m.as_str()))
}

pub fn embed_url(video_id: &VideoId) -> String {
    format!("https://www.youtube.com/embed/{video_id}")
}

/// Caption offset as `HH:MM:SS`, or `MM:SS` when under one hour.
pub fn format_offset(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let (hours, minutes, secs) = (total / 3600, (total % 3600) / 60, total % 60);

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

/// Video length as `H:MM:SS`.
pub fn format_duration(seconds: u64) -> String {
    format!(
        "{}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_from_common_url_shapes() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://youtube.com/shorts/dQw4w9WgXcQ?feature=share",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://m.youtube.com/watch?feature=youtu.be&v=dQw4w9WgXcQ",
        ] {
            assert_eq!(
                extract_video_id(url).as_deref(),
                Some("dQw4w9WgXcQ"),
                "url: {url}"
            );
        }
    }

    #[test]
    fn ids_with_dash_and_underscore() {
        assert_eq!(
            extract_video_id("https://youtu.be/_-aB3-_cD9z").as_deref(),
            Some("_-aB3-_cD9z")
        );
    }

    #[test]
    fn rejects_urls_without_an_id() {
        assert!(extract_video_id("not a url").is_none());
        assert!(extract_video_id("https://www.youtube.com/watch?v=short").is_none());
        assert!(extract_video_id("").is_none());
    }

    #[test]
    fn embed_link() {
        let id = VideoId::parse("dQw4w9WgXcQ").unwrap();
        assert_eq!(embed_url(&id), "https://www.youtube.com/embed/dQw4w9WgXcQ");
    }

    #[test]
    fn offsets_switch_to_hours_after_one_hour() {
        assert_eq!(format_offset(0.0), "00:00");
        assert_eq!(format_offset(59.99), "00:59");
        assert_eq!(format_offset(3599.0), "59:59");
        assert_eq!(format_offset(3600.0), "01:00:00");
        assert_eq!(format_offset(45296.7), "12:34:56");
    }

    #[test]
    fn durations_always_carry_hours() {
        assert_eq!(format_duration(0), "0:00:00");
        assert_eq!(format_duration(213), "0:03:33");
        assert_eq!(format_duration(36_000 + 61), "10:01:01");
    }
}
