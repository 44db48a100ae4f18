pub mod classifier;
pub mod concat;
pub mod config;
pub mod errors;
pub mod formatter;
pub mod ignore;
pub mod logger;
pub mod prompt;
pub mod reporting;
pub mod scanner;
pub mod sink;
pub mod tokenizer;
pub mod trie;
pub mod utils;

pub use crate::concat::{concatenate_files, ConcatOutcome, FileConcatenator};
pub use crate::config::{CatConfig, OutputFormat};
pub use crate::errors::CatError;
pub use crate::ignore::IgnoreRules;
