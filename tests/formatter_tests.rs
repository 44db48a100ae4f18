use llmcat::config::OutputFormat;
use llmcat::formatter::{format_record, format_records};
use llmcat::scanner::FileRecord;

fn record(path: &str, content: &str, token_count: usize) -> FileRecord {
    FileRecord {
        path: path.to_string(),
        content: content.to_string(),
        token_count,
    }
}

#[test]
fn test_format_record_bracket() {
    let formatted = format_record(&record("a.txt", "hello", 1), OutputFormat::Bracket);
    assert_eq!(
        formatted,
        "[file name]: a.txt\n[file content begin]\nhello\n[file content end]"
    );
}

#[test]
fn test_format_record_xml() {
    let formatted = format_record(&record("a.txt", "hello", 1), OutputFormat::Xml);
    assert_eq!(
        formatted,
        "<file>\n<name>a.txt</name>\n<content>hello</content>\n</file>"
    );
}

#[test]
fn test_format_record_markdown() {
    let formatted = format_record(&record("a.txt", "hello", 1), OutputFormat::Markdown);
    assert!(formatted.starts_with("# File: a.txt\n"));
    assert_eq!(formatted, "# File: a.txt\n```\nhello\n```");
}

#[test]
fn test_format_record_does_not_escape_content() {
    let formatted = format_record(
        &record("x.xml", "<tag attr=\"1\">&amp;</tag>", 5),
        OutputFormat::Xml,
    );
    assert!(formatted.contains("<content><tag attr=\"1\">&amp;</tag></content>"));
}

#[test]
fn test_format_records_joins_with_blank_line() {
    let records = vec![record("a.rs", "fn a() {}", 4), record("b.rs", "fn b() {}", 4)];
    let blob = format_records(&records, OutputFormat::Bracket);
    assert_eq!(
        blob,
        "[file name]: a.rs\n[file content begin]\nfn a() {}\n[file content end]\n\n\
         [file name]: b.rs\n[file content begin]\nfn b() {}\n[file content end]"
    );
}

#[test]
fn test_format_records_empty() {
    assert_eq!(format_records(&[], OutputFormat::Markdown), "");
}
