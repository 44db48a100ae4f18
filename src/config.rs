use clap::ValueEnum;
use std::fmt;

pub const DEFAULT_LARGE_FILE_THRESHOLD: usize = 5000;
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Wrapper applied to every file in the output blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Xml,
    Markdown,
    Bracket,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Xml => "xml",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Bracket => "bracket",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone)]
pub struct CatConfig {
    pub format: OutputFormat,
    /// Files with strictly more tokens than this are flagged in the summary.
    pub large_file_threshold: usize,
    pub model: String,
}

impl CatConfig {
    pub fn new(format: OutputFormat) -> Self {
        CatConfig {
            format,
            large_file_threshold: DEFAULT_LARGE_FILE_THRESHOLD,
            model: DEFAULT_MODEL.to_owned(),
        }
    }
}
