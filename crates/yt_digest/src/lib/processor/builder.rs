use crate::{
    cleaner::OutputFormat,
    yt::{MetadataSource, TranscriptSource},
    DigestProcessor, Summarizer,
};

pub struct DigestProcessorBuilder<T = (), S = (), M = ()> {
    transcripts: T,
    summarizer: S,
    metadata: M,
    format: OutputFormat,
    timestamps: Option<bool>,
}

impl DigestProcessorBuilder {
    pub fn new() -> Self {
        Self {
            transcripts: (),
            summarizer: (),
            metadata: (),
            format: OutputFormat::default(),
            timestamps: None,
        }
    }
}

impl Default for DigestProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S, M> DigestProcessorBuilder<T, S, M> {
    pub fn transcripts<T2: TranscriptSource>(
        self,
        transcripts: T2,
    ) -> DigestProcessorBuilder<T2, S, M> {
        DigestProcessorBuilder {
            transcripts,
            summarizer: self.summarizer,
            metadata: self.metadata,
            format: self.format,
            timestamps: self.timestamps,
        }
    }

    pub fn summarizer<S2: Summarizer>(self, summarizer: S2) -> DigestProcessorBuilder<T, S2, M> {
        DigestProcessorBuilder {
            transcripts: self.transcripts,
            summarizer,
            metadata: self.metadata,
            format: self.format,
            timestamps: self.timestamps,
        }
    }

    /// Title/duration lookup; without one the digest carries no metadata.
    pub fn metadata<M2: MetadataSource>(self, metadata: M2) -> DigestProcessorBuilder<T, S, M2> {
        DigestProcessorBuilder {
            transcripts: self.transcripts,
            summarizer: self.summarizer,
            metadata,
            format: self.format,
            timestamps: self.timestamps,
        }
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Overrides whether the transcript keeps caption timestamps. Defaults to the
    /// output format's preference.
    pub fn timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = Some(timestamps);
        self
    }
}

impl<T, S, M> DigestProcessorBuilder<T, S, M>
where
    T: TranscriptSource,
    S: Summarizer,
    M: MetadataSource,
{
    pub fn build(self) -> DigestProcessor<T, S, M> {
        DigestProcessor {
            transcripts: self.transcripts,
            summarizer: self.summarizer,
            metadata: self.metadata,
            timestamps: self
                .timestamps
                .unwrap_or_else(|| self.format.uses_timestamps()),
            format: self.format,
        }
    }
}
