use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatError {
    #[error("Invalid pattern: {0}")]
    Pattern(String),

    #[error("Tokenizer Error: {0}")]
    TokenizerError(String),

    #[error("Failed to read {path}: {reason}")]
    FileReadError { path: String, reason: String },

    #[error("Failed to write {path}: {reason}")]
    FileWriteError { path: String, reason: String },

    #[error("Clipboard initialization failed: {0}")]
    ClipboardInitError(String),

    #[error("Clipboard write failed: {0}")]
    ClipboardWriteError(String),

    #[error("Prompt failed: {0}")]
    PromptError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO Error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for CatError {
    fn from(err: std::io::Error) -> Self {
        CatError::IoError(err.to_string())
    }
}
