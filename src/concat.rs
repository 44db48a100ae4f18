use crate::config::CatConfig;
use crate::errors::CatError;
use crate::formatter::format_records;
use crate::ignore::IgnoreRules;
use crate::prompt::{confirm_scan, Prompt};
use crate::scanner::scan_files;
use crate::sink::{choose_output, deliver, ClipboardWriter, OutputChoice};
use crate::tokenizer::Tokenizer;
use crate::utils::expand_patterns;
use tracing::{debug, trace};

/// How a run ended when nothing went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConcatOutcome {
    NoFiles,
    Cancelled,
    Delivered(OutputChoice),
}

/// Runs match, scan, confirm, format and output, in that order.
pub struct FileConcatenator {
    config: CatConfig,
    tokenizer: Tokenizer,
    ignore: IgnoreRules,
}

impl FileConcatenator {
    pub fn new(config: CatConfig, tokenizer: Tokenizer, ignore: IgnoreRules) -> Self {
        FileConcatenator {
            config,
            tokenizer,
            ignore,
        }
    }

    pub async fn concatenate<P, C>(
        &self,
        patterns: &[String],
        prompt: &mut P,
        clipboard: &mut C,
    ) -> Result<ConcatOutcome, CatError>
    where
        P: Prompt + ?Sized,
        C: ClipboardWriter + ?Sized,
    {
        let config = &self.config;

        debug!(
            "Expanding {} patterns, counting with the {} tokenizer",
            patterns.len(),
            self.tokenizer.model()
        );
        let file_list = expand_patterns(patterns, &self.ignore)?;

        let report = scan_files(&file_list, &self.tokenizer).await;
        for failure in &report.skipped {
            eprintln!("Warning: skipping file. {}", failure);
        }

        let records = report.records;
        if records.is_empty() {
            debug!("No text files among {} matched paths", file_list.len());
            eprintln!("Warning: No text files matched the given patterns");
            return Ok(ConcatOutcome::NoFiles);
        }

        if !confirm_scan(prompt, &records, config.large_file_threshold)? {
            prompt.tell("Operation cancelled.")?;
            return Ok(ConcatOutcome::Cancelled);
        }

        debug!("Formatting {} files as {}", records.len(), config.format);
        let content = format_records(&records, config.format);
        trace!("Final content length: {}", content.len());

        let choice = choose_output(prompt)?;
        let message = deliver(&choice, content, clipboard).await?;
        prompt.tell(&message)?;

        Ok(ConcatOutcome::Delivered(choice))
    }
}

pub async fn concatenate_files<P, C>(
    config: CatConfig,
    patterns: &[String],
    prompt: &mut P,
    clipboard: &mut C,
) -> Result<ConcatOutcome, CatError>
where
    P: Prompt + ?Sized,
    C: ClipboardWriter + ?Sized,
{
    let tokenizer = Tokenizer::for_model(&config.model)?;
    let ignore = IgnoreRules::from_root(std::env::current_dir()?);
    let concatenator = FileConcatenator::new(config, tokenizer, ignore);
    concatenator.concatenate(patterns, prompt, clipboard).await
}
