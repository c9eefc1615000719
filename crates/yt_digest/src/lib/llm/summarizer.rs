use std::{fmt::Display, future::Future};

use serde::Deserialize;

pub trait Summarizer {
    const SUMMARIZER_MODEL: &'static str;

    type Error: Display;

    /// Sends a fully built prompt to the model and returns its raw text answer.
    fn summarize(&self, prompt: &str) -> impl Future<Output = Result<SummaryResponse, Self::Error>>;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SummaryResponse {
    /// Model output with surrounding whitespace trimmed
    pub summary: String,
}

impl SummaryResponse {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self {
            summary: raw.as_ref().trim().to_string(),
        }
    }
}
