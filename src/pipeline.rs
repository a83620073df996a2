//! The linear pipeline driver.
//!
//! One run is strictly sequential: load input, build the prompt, invoke the
//! model once, sanitize, decode, write. Any stage failure terminates the run
//! and the output file is only touched on full success.

use log::{debug, info};

use crate::{
    completion::{CompletionProvider, CompletionRequest},
    config::PipelineConfig,
    decode, input, output, prompt, sanitize,
    error::SentimentError,
};

/// Counts reported by a successful pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of non-blank input texts loaded
    pub texts_loaded: usize,
    /// Number of records written to the output file
    pub records_written: usize,
}

/// Runs the whole pipeline once with the given configuration and provider.
///
/// Progress is printed to standard output; finer detail goes to the `log`
/// facade. The provider is a trait object so tests can inject a mock model.
///
/// # Arguments
///
/// * `config` - Resolved configuration for this run
/// * `provider` - Completion provider to invoke
///
/// # Returns
///
/// Counts of loaded texts and written records, or the first stage error
pub async fn run(
    config: &PipelineConfig,
    provider: &dyn CompletionProvider,
) -> Result<RunSummary, SentimentError> {
    let texts = input::read_lines(&config.input_path)?;
    println!("Loaded {} texts", texts.len());

    let prompt = prompt::build_prompt(&texts);
    debug!("prompt is {} bytes", prompt.len());

    // Temperature 0 keeps the classification as deterministic as the service
    // allows
    let request = CompletionRequest::builder(prompt).temperature(0.0).build();
    let response = provider.complete(&request).await?;
    let raw_output = response.text;
    debug!("model returned {} bytes", raw_output.len());

    let cleaned = sanitize::clean_json_output(&raw_output);
    let records = decode::decode_array(&cleaned, &raw_output)?;

    output::save_json(&records, &config.output_path)?;
    info!(
        "wrote {} records to {}",
        records.len(),
        config.output_path.display()
    );
    println!(
        "Done. {} records saved to {}",
        records.len(),
        config.output_path.display()
    );

    Ok(RunSummary {
        texts_loaded: texts.len(),
        records_written: records.len(),
    })
}
