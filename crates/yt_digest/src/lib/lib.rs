mod cleaner;
mod error;
mod llm;
pub mod parser;
mod processor;
pub mod tracing;
pub mod types;
pub mod yt;

pub use cleaner::{clean, clean_markdown, CleanedOutput, OutputFormat};
pub use error::{DigestError, TranscriptError};
pub use llm::{gemini, openai};
pub use llm::{
    prompt::build_prompt,
    summarizer::{Summarizer, SummaryResponse},
};
pub use processor::{builder::DigestProcessorBuilder, DigestProcessor};
