use crate::cleaner::OutputFormat;

const MARKDOWN_PROMPT: &str = include_str!("./prompts/markdown.txt");
const BULLETS_PROMPT: &str = include_str!("./prompts/bullets.txt");
const PLAIN_PROMPT: &str = include_str!("./prompts/plain.txt");

const TRANSCRIPT_PLACEHOLDER: &str = "{transcript}";
const TIMING_PLACEHOLDER: &str = "{timing}";

const TIMING_NOTE: &str = "Each transcript line starts with the time it was spoken at.\n\n";

/// Fills the instruction template of `format` with the transcript text. `timestamped`
/// tells the model whether lines carry their caption offsets.
pub fn build_prompt(format: OutputFormat, transcript: &str, timestamped: bool) -> String {
    let template = match format {
        OutputFormat::Markdown => MARKDOWN_PROMPT,
        OutputFormat::Bullets => BULLETS_PROMPT,
        OutputFormat::Plain => PLAIN_PROMPT,
    };
    let timing = if timestamped { TIMING_NOTE } else { "" };

    template
        .replace(TIMING_PLACEHOLDER, timing)
        .replace(TRANSCRIPT_PLACEHOLDER, transcript)
}
