use clap::Parser;
use llmcat::config::{CatConfig, OutputFormat, DEFAULT_LARGE_FILE_THRESHOLD, DEFAULT_MODEL};
use llmcat::concatenate_files;
use llmcat::logger::initialize_logger;
use llmcat::prompt::LinePrompt;
use llmcat::sink::SystemClipboard;
use std::process::ExitCode;
use tracing::debug;

/// Concatenate text files matched by glob patterns into one LLM-ready blob.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Wrapper used around each file
    #[arg(short = 'f', long, value_enum)]
    format: OutputFormat,

    /// Files with more tokens than this are flagged before confirming
    #[arg(short = 't', long, default_value_t = DEFAULT_LARGE_FILE_THRESHOLD, value_parser = parse_threshold)]
    large_file_threshold: usize,

    /// Model whose tokenizer is used for counting
    #[arg(short = 'M', long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Glob patterns or directories to include
    #[arg(required = true)]
    patterns: Vec<String>,
}

fn parse_threshold(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be a positive integer".to_owned()),
        Ok(threshold) => Ok(threshold),
        Err(e) => Err(format!("must be a positive integer ({})", e)),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    initialize_logger();
    debug!("Arguments: {:?}", args);

    let config = CatConfig {
        format: args.format,
        large_file_threshold: args.large_file_threshold,
        model: args.model,
    };

    let mut prompt = LinePrompt::stdio();
    let mut clipboard = SystemClipboard::new();

    match concatenate_files(config, &args.patterns, &mut prompt, &mut clipboard).await {
        Ok(outcome) => {
            debug!("Finished: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
