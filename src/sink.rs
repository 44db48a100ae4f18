use crate::errors::CatError;
use crate::prompt::Prompt;
use arboard::Clipboard;
use std::path::PathBuf;
use tokio::fs as async_fs;
use tracing::{debug, info};

/// Where the formatted blob ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputChoice {
    Clipboard,
    File(PathBuf),
}

pub trait ClipboardWriter {
    fn set_text(&mut self, text: String) -> Result<(), CatError>;
}

/// The desktop clipboard, opened on first write.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        SystemClipboard::default()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn set_text(&mut self, text: String) -> Result<(), CatError> {
        if self.clipboard.is_none() {
            debug!("Initializing clipboard");
            let clipboard =
                Clipboard::new().map_err(|e| CatError::ClipboardInitError(e.to_string()))?;
            self.clipboard = Some(clipboard);
        }
        let clipboard = self
            .clipboard
            .as_mut()
            .ok_or_else(|| CatError::ClipboardInitError("clipboard unavailable".to_owned()))?;
        clipboard
            .set_text(text)
            .map_err(|e| CatError::ClipboardWriteError(e.to_string()))
    }
}

/// Asks for the destination. `f`/`file`/`2` pick a file and trigger a
/// second question for its name; anything else means the clipboard.
pub fn choose_output<P: Prompt + ?Sized>(prompt: &mut P) -> Result<OutputChoice, CatError> {
    let answer = prompt.ask("Output to [c]lipboard or [f]ile? (default: clipboard): ")?;
    let answer = answer.trim().to_lowercase();

    if answer.starts_with('f') || answer == "2" {
        let filename = prompt.ask("File name: ")?;
        let filename = filename.trim();
        if filename.is_empty() {
            return Err(CatError::ConfigError("no output file name given".to_owned()));
        }
        Ok(OutputChoice::File(PathBuf::from(filename)))
    } else {
        Ok(OutputChoice::Clipboard)
    }
}

/// Performs the chosen action and returns the message to show the user.
pub async fn deliver<C: ClipboardWriter + ?Sized>(
    choice: &OutputChoice,
    content: String,
    clipboard: &mut C,
) -> Result<String, CatError> {
    match choice {
        OutputChoice::Clipboard => {
            clipboard.set_text(content)?;
            info!("Content copied to clipboard");
            Ok("Content copied to clipboard.".to_owned())
        }
        OutputChoice::File(path) => {
            async_fs::write(path, content)
                .await
                .map_err(|e| CatError::FileWriteError {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?;
            info!("Content written to {}", path.display());
            Ok(format!("Content written to {}.", path.display()))
        }
    }
}
