use crate::errors::CatError;
use crate::reporting::render_summary;
use crate::scanner::FileRecord;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Line-oriented question/answer exchange with the user.
pub trait Prompt {
    /// Shows `question` and blocks for one line. A closed input stream
    /// yields an empty answer.
    fn ask(&mut self, question: &str) -> Result<String, CatError>;

    /// Shows a message on its own line.
    fn tell(&mut self, message: &str) -> Result<(), CatError>;
}

pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LinePrompt { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl LinePrompt<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        LinePrompt::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, question: &str) -> Result<String, CatError> {
        write!(self.output, "{}", question).map_err(prompt_error)?;
        self.output.flush().map_err(prompt_error)?;

        let mut answer = String::new();
        self.input.read_line(&mut answer).map_err(prompt_error)?;
        Ok(answer.trim_end_matches(['\r', '\n']).to_owned())
    }

    fn tell(&mut self, message: &str) -> Result<(), CatError> {
        writeln!(self.output, "{}", message).map_err(prompt_error)
    }
}

fn prompt_error(err: io::Error) -> CatError {
    CatError::PromptError(err.to_string())
}

/// True when the trimmed answer starts with `y`, in any case.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().to_lowercase().starts_with('y')
}

/// Prints the scan summary and asks whether to continue.
pub fn confirm_scan<P: Prompt + ?Sized>(
    prompt: &mut P,
    records: &[FileRecord],
    threshold: usize,
) -> Result<bool, CatError> {
    let summary = render_summary(records, threshold);
    prompt.tell(summary.trim_end())?;
    let answer = prompt.ask("Proceed? (y/N): ")?;
    Ok(is_affirmative(&answer))
}
