use crate::errors::CatError;
use tiktoken_rs::{get_bpe_from_model, CoreBPE};
use tracing::debug;

/// BPE token counter. Build one at startup and pass it to whatever needs it.
pub struct Tokenizer {
    model: String,
    bpe: CoreBPE,
}

impl Tokenizer {
    pub fn for_model(model: &str) -> Result<Self, CatError> {
        debug!("Loading tokenizer for model {}", model);
        let bpe = get_bpe_from_model(model)
            .map_err(|e| CatError::TokenizerError(format!("unknown model '{}': {}", model, e)))?;
        Ok(Tokenizer {
            model: model.to_owned(),
            bpe,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn count(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        self.bpe.encode_ordinary(text).len()
    }
}
