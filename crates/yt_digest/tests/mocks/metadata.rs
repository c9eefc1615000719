use std::sync::{Arc, Mutex};
use yt_digest::{types::VideoMetadata, yt::MetadataSource};

#[derive(Clone)]
pub struct MockMetadata {
    pub metadata: VideoMetadata,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockMetadata {
    pub fn new(title: &str, duration: &str) -> Self {
        Self {
            metadata: VideoMetadata {
                title: title.to_string(),
                duration: duration.to_string(),
            },
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MetadataSource for MockMetadata {
    async fn fetch_metadata(&self, url: &str) -> Option<VideoMetadata> {
        self.calls.lock().unwrap().push(url.to_string());
        Some(self.metadata.clone())
    }
}
