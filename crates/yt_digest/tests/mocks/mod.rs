pub mod metadata;
pub mod summarizer;
pub mod transcript_source;
