use crate::config::OutputFormat;
use crate::scanner::FileRecord;

/// Wraps one file. Path and content are inserted verbatim.
pub fn format_record(record: &FileRecord, format: OutputFormat) -> String {
    let path = &record.path;
    let content = &record.content;
    match format {
        OutputFormat::Xml => {
            format!("<file>\n<name>{path}</name>\n<content>{content}</content>\n</file>")
        }
        OutputFormat::Markdown => format!("# File: {path}\n```\n{content}\n```"),
        OutputFormat::Bracket => format!(
            "[file name]: {path}\n[file content begin]\n{content}\n[file content end]"
        ),
    }
}

/// Formats every record and separates them with a blank line.
pub fn format_records(records: &[FileRecord], format: OutputFormat) -> String {
    records
        .iter()
        .map(|record| format_record(record, format))
        .collect::<Vec<_>>()
        .join("\n\n")
}
