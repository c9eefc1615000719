use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};
use yt_digest::{Summarizer, SummaryResponse};

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct MockSummarizerError(String);

/// Replies with a fixed answer, or with a script consumed one reply per call.
#[derive(Clone)]
pub struct MockSummarizer {
    fallback: Option<Result<String, String>>,
    script: Arc<Mutex<VecDeque<Result<String, String>>>>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockSummarizer {
    fn with(fallback: Option<Result<String, String>>, script: Vec<Result<String, String>>) -> Self {
        Self {
            fallback,
            script: Arc::new(Mutex::new(script.into())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn new(summary: &str) -> Self {
        Self::with(Some(Ok(summary.to_string())), Vec::new())
    }

    pub fn failing(msg: &str) -> Self {
        Self::with(Some(Err(msg.to_string())), Vec::new())
    }

    /// `Ok` entries are answers, `Err` entries are failures. Calls past the end fail.
    pub fn scripted(replies: &[Result<&str, &str>]) -> Self {
        let script = replies
            .iter()
            .map(|reply| reply.map(String::from).map_err(String::from))
            .collect();

        Self::with(None, script)
    }
}

impl Summarizer for MockSummarizer {
    const SUMMARIZER_MODEL: &'static str = "mock-llm";
    type Error = MockSummarizerError;

    async fn summarize(&self, prompt: &str) -> Result<SummaryResponse, Self::Error> {
        self.calls.lock().unwrap().push(prompt.to_string());

        let reply = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .or_else(|| self.fallback.clone())
            .unwrap_or_else(|| Err("script exhausted".to_string()));

        reply
            .map(SummaryResponse::new)
            .map_err(MockSummarizerError)
    }
}
