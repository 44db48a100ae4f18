use llmcat::errors::CatError;
use llmcat::prompt::LinePrompt;
use llmcat::sink::{choose_output, deliver, ClipboardWriter, OutputChoice};
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::tempdir;
use tokio::fs;

#[derive(Default)]
struct RecordingClipboard {
    texts: Vec<String>,
}

impl ClipboardWriter for RecordingClipboard {
    fn set_text(&mut self, text: String) -> Result<(), CatError> {
        self.texts.push(text);
        Ok(())
    }
}

struct BrokenClipboard;

impl ClipboardWriter for BrokenClipboard {
    fn set_text(&mut self, _text: String) -> Result<(), CatError> {
        Err(CatError::ClipboardWriteError("no display".to_string()))
    }
}

fn scripted(input: &str) -> LinePrompt<Cursor<Vec<u8>>, Vec<u8>> {
    LinePrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn test_choose_output_file() {
    for answer in ["f", "file", "F", "2"] {
        let mut prompt = scripted(&format!("{}\nout.txt\n", answer));
        let choice = choose_output(&mut prompt).unwrap();
        assert_eq!(choice, OutputChoice::File(PathBuf::from("out.txt")));
    }
}

#[test]
fn test_choose_output_defaults_to_clipboard() {
    for input in ["c\n", "\n", "", "clipboard\n", "1\n"] {
        let mut prompt = scripted(input);
        assert_eq!(choose_output(&mut prompt).unwrap(), OutputChoice::Clipboard);
    }
}

#[test]
fn test_choose_output_requires_file_name() {
    let mut prompt = scripted("f\n   \n");
    match choose_output(&mut prompt) {
        Err(CatError::ConfigError(_)) => {}
        other => panic!("Expected a configuration error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_deliver_to_file_writes_exact_bytes() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("out.txt");
    fs::write(&target, "stale content that is longer than the new one")
        .await
        .unwrap();

    let blob = "<file>\n<name>a.txt</name>\n<content>hello</content>\n</file>".to_string();
    let mut clipboard = RecordingClipboard::default();
    let message = deliver(&OutputChoice::File(target.clone()), blob.clone(), &mut clipboard)
        .await
        .unwrap_or_else(|e| panic!("Failed to deliver: {:?}", e));

    assert!(message.contains("out.txt"));
    assert_eq!(fs::read(&target).await.unwrap(), blob.into_bytes());
    assert!(clipboard.texts.is_empty());
}

#[tokio::test]
async fn test_deliver_to_clipboard() {
    let mut clipboard = RecordingClipboard::default();
    deliver(&OutputChoice::Clipboard, "blob".to_string(), &mut clipboard)
        .await
        .unwrap();
    assert_eq!(clipboard.texts, vec!["blob".to_string()]);
}

#[tokio::test]
async fn test_deliver_reports_clipboard_failure() {
    let result = deliver(&OutputChoice::Clipboard, "blob".to_string(), &mut BrokenClipboard).await;
    assert!(matches!(result, Err(CatError::ClipboardWriteError(_))));
}

#[tokio::test]
async fn test_deliver_reports_file_write_failure() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("missing-dir").join("out.txt");
    let result = deliver(
        &OutputChoice::File(target),
        "blob".to_string(),
        &mut RecordingClipboard::default(),
    )
    .await;
    assert!(matches!(result, Err(CatError::FileWriteError { .. })));
}
