use crate::classifier::is_text_file;
use crate::errors::CatError;
use crate::tokenizer::Tokenizer;
use crate::utils::read_file_content;
use tracing::{debug, trace};

/// One scanned text file. Never modified after the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: String,
    pub content: String,
    pub token_count: usize,
}

impl FileRecord {
    pub fn new(path: impl Into<String>, content: impl Into<String>, tokenizer: &Tokenizer) -> Self {
        let content = content.into();
        let token_count = tokenizer.count(&content);
        FileRecord {
            path: path.into(),
            content,
            token_count,
        }
    }
}

/// Result of a scan: the records in input order and the files that could
/// not be read.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub records: Vec<FileRecord>,
    pub skipped: Vec<CatError>,
}

/// Reads every text file in `paths`, keeping the input order. Files that
/// are not text are skipped silently; unreadable ones end up in
/// `ScanReport::skipped` and the scan carries on.
pub async fn scan_files(paths: &[String], tokenizer: &Tokenizer) -> ScanReport {
    let mut report = ScanReport::default();

    for path in paths {
        if !is_text_file(path) {
            trace!("Skipping non-text file: {}", path);
            continue;
        }

        debug!("Processing file: {}", path);
        match read_file_content(path).await {
            Ok(content) => {
                let record = FileRecord::new(path.as_str(), content, tokenizer);
                trace!("File {} has {} tokens", record.path, record.token_count);
                report.records.push(record);
            }
            Err(e) => {
                debug!("Skipping file: {}", e);
                report.skipped.push(e);
            }
        }
    }

    report
}

pub fn total_tokens(records: &[FileRecord]) -> usize {
    records.iter().map(|r| r.token_count).sum()
}
