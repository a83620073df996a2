use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use colored::*;

use llm_sentiment::backends::google::Google;
use llm_sentiment::config::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use llm_sentiment::{pipeline, PipelineConfig, SentimentError};

/// Command line arguments for the sentiment pipeline
#[derive(Parser)]
#[clap(
    name = "llm-sentiment",
    about = "Batch sentiment analysis of text lines through the Google Gemini API"
)]
struct CliArgs {
    /// Path to the input text file, one text per line
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Path the output JSON array is written to
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Model identifier (falls back to the MODEL_NAME environment variable)
    #[arg(long)]
    model: Option<String>,

    /// API key (falls back to the GOOGLE_API_KEY environment variable)
    #[arg(long)]
    api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

/// Resolves the run configuration from CLI arguments and the environment.
///
/// CLI values take precedence; anything unset falls back to `MODEL_NAME` /
/// `GOOGLE_API_KEY`. Both must resolve or the run aborts before any I/O.
fn resolve_config(args: &CliArgs) -> Result<PipelineConfig, SentimentError> {
    let mut config = PipelineConfig::resolve(args.model.clone(), args.api_key.clone())?
        .with_input(args.input.clone())
        .with_output(args.output.clone());
    if let Some(seconds) = args.timeout {
        config = config.with_timeout(seconds);
    }
    Ok(config)
}

#[tokio::main]
async fn main() {
    llm_sentiment::init_logging();

    let args = CliArgs::parse();

    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            exit(1);
        }
    };

    let provider = Google::new(
        config.api_key.clone(),
        Some(config.model.clone()),
        Some(0.0),
        config.timeout_seconds,
    );

    match pipeline::run(&config, &provider).await {
        Ok(summary) => {
            println!(
                "{} analyzed {} texts",
                "Success:".green().bold(),
                summary.texts_loaded
            );
        }
        Err(SentimentError::DecodeError {
            message,
            raw_output,
        }) => {
            eprintln!(
                "{} failed to parse JSON output: {}",
                "Error:".red().bold(),
                message
            );
            eprintln!("Raw Output:");
            eprintln!("{}", raw_output);
            exit(1);
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            exit(1);
        }
    }
}
