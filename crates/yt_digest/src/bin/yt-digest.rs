use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use yt_digest::{
    gemini::GeminiClient,
    openai::OpenAIClient,
    tracing::init_tracing_subscriber,
    types::{DigestReport, VideoDigest},
    yt::{metadata::YtDlpMetadata, transcript::TranscriptClient},
    DigestError, DigestProcessorBuilder, OutputFormat, Summarizer,
};

#[derive(Parser)]
#[command(
    name = "yt-digest",
    about = "Summarize YouTube videos from their transcripts"
)]
struct Cli {
    /// YouTube video URL, prompted for when omitted
    url: Option<String>,

    /// Model provider used for the summary
    #[arg(long, env = "DIGEST_PROVIDER", value_enum, default_value = "gemini")]
    provider: CliProvider,

    /// Summary style
    #[arg(long, env = "DIGEST_FORMAT", value_enum, default_value = "markdown")]
    format: CliFormat,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    gemini_key: Option<String>,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_key: Option<String>,

    /// OpenRouter API key
    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    openrouter_key: Option<String>,

    /// Model name, overriding the provider default
    #[arg(long)]
    model: Option<String>,

    /// Sampling temperature, overriding the provider default
    #[arg(long)]
    temperature: Option<f32>,

    /// Keep caption timestamps in the transcript [default: on for plain]
    #[arg(long)]
    timestamps: Option<bool>,

    /// Look up title and duration with yt-dlp [default: on for plain]
    #[arg(long)]
    metadata: Option<bool>,

    /// Path to the yt-dlp executable
    #[arg(long, env = "YTDLP_PATH", default_value = "yt-dlp")]
    ytdlp_path: PathBuf,

    /// Preferred caption language, repeatable
    #[arg(long = "lang", default_value = "en")]
    languages: Vec<String>,

    /// Print the digest as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliProvider {
    Gemini,
    Openai,
    Openrouter,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliFormat {
    Markdown,
    Bullets,
    Plain,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Markdown => OutputFormat::Markdown,
            CliFormat::Bullets => OutputFormat::Bullets,
            CliFormat::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Clone)]
struct Config {
    format: OutputFormat,
    timestamps: bool,
    metadata: bool,
    ytdlp_path: PathBuf,
    languages: Vec<String>,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        let format = OutputFormat::from(cli.format);

        Self {
            format,
            timestamps: cli.timestamps.unwrap_or_else(|| format.uses_timestamps()),
            metadata: cli.metadata.unwrap_or_else(|| format.fetches_metadata()),
            ytdlp_path: cli.ytdlp_path.clone(),
            languages: cli.languages.clone(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();

    init_tracing_subscriber()?;

    let url = match &cli.url {
        Some(url) => url.trim().to_string(),
        None => prompt_for_url()?,
    };

    let config = Config::from(&cli);

    let result = match cli.provider {
        CliProvider::Gemini => {
            let mut client = GeminiClient::new(cli.gemini_key.unwrap_or_default());
            if let Some(model) = cli.model {
                client = client.with_model(model);
            }
            if let Some(temperature) = cli.temperature {
                client = client.with_temperature(temperature);
            }
            digest(&config, client, &url).await
        }
        CliProvider::Openai | CliProvider::Openrouter => {
            let mut client = match cli.provider {
                CliProvider::Openrouter => {
                    OpenAIClient::openrouter(cli.openrouter_key.unwrap_or_default())
                }
                _ => OpenAIClient::new(cli.openai_key.unwrap_or_default()),
            };
            if let Some(model) = cli.model {
                client = client.with_model(model);
            }
            if let Some(temperature) = cli.temperature {
                client = client.with_temperature(temperature);
            }
            digest(&config, client, &url).await
        }
    };

    // returned rather than `process::exit`, so the sentry guard can flush on drop
    let code = exit_code(&result);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&DigestReport::from(result))?);
    } else {
        match result {
            Ok(digest) => print_digest(&digest),
            Err(e) => println!("{e}"),
        }
    }

    Ok(code)
}

async fn digest<S: Summarizer>(
    config: &Config,
    summarizer: S,
    url: &str,
) -> Result<VideoDigest, DigestError> {
    let transcripts = TranscriptClient::new()?.with_languages(config.languages.clone());

    let builder = DigestProcessorBuilder::new()
        .transcripts(transcripts)
        .summarizer(summarizer)
        .format(config.format)
        .timestamps(config.timestamps);

    if config.metadata {
        builder
            .metadata(YtDlpMetadata::new(&config.ytdlp_path))
            .build()
            .run(url)
            .await
    } else {
        builder.build().run(url).await
    }
}

fn exit_code(result: &Result<VideoDigest, DigestError>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn prompt_for_url() -> io::Result<String> {
    print!("Enter the YouTube URL: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(line.trim().to_string())
}

fn print_digest(digest: &VideoDigest) {
    println!("\n📄 Video Summary:\n");
    print!("{}", digest.render_text());
}
