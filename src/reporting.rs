use crate::scanner::{total_tokens, FileRecord};
use crate::trie::{Trie, TrieNode};
use std::path::Path;

/// Aggregate figures shown before asking for confirmation.
#[derive(Debug)]
pub struct ScanSummary<'a> {
    pub file_count: usize,
    pub total_tokens: usize,
    pub large_files: Vec<&'a FileRecord>,
}

impl<'a> ScanSummary<'a> {
    pub fn new(records: &'a [FileRecord], threshold: usize) -> Self {
        ScanSummary {
            file_count: records.len(),
            total_tokens: total_tokens(records),
            large_files: large_files(records, threshold),
        }
    }
}

/// Files whose token count is strictly above `threshold`.
pub fn large_files(records: &[FileRecord], threshold: usize) -> Vec<&FileRecord> {
    records
        .iter()
        .filter(|r| r.token_count > threshold)
        .collect()
}

/// `12345` becomes `12.3k`.
pub fn approx_thousands(tokens: usize) -> String {
    format!("{:.1}k", tokens as f64 / 1000.0)
}

/// Full text printed ahead of the confirmation question.
pub fn render_summary(records: &[FileRecord], threshold: usize) -> String {
    let summary = ScanSummary::new(records, threshold);
    let mut out = String::new();

    out.push_str(&format!(
        "Found {} files with {} tokens in total (~{} tokens)\n",
        summary.file_count,
        summary.total_tokens,
        approx_thousands(summary.total_tokens)
    ));
    out.push_str(&render_token_tree(records));

    if !summary.large_files.is_empty() {
        out.push_str(&format!("Files exceeding {} tokens:\n", threshold));
        for record in &summary.large_files {
            out.push_str(&format!("  {} ({} tokens)\n", record.path, record.token_count));
        }
    }

    out
}

/// Per-directory breakdown of token counts, one line per node.
pub fn render_token_tree(records: &[FileRecord]) -> String {
    let mut trie = Trie::new();
    for record in records {
        trie.insert(Path::new(&record.path), record.token_count);
    }

    let mut out = String::new();
    write_tree(&mut out, trie.get_root(), "");
    out
}

fn write_tree(out: &mut String, node: &TrieNode, prefix: &str) {
    let children = node.sorted_children();

    for (i, (name, child)) in children.iter().enumerate() {
        let is_last_child = i == children.len() - 1;
        let connector = if is_last_child { "┗━━" } else { "┣━━" };

        match child.token_count {
            Some(tokens) if child.children.is_empty() => {
                out.push_str(&format!("{}{} {} ({} tokens)\n", prefix, connector, name, tokens));
            }
            _ => {
                out.push_str(&format!(
                    "{}{} {}/ ({} tokens)\n",
                    prefix,
                    connector,
                    name,
                    child.calculate_total_tokens()
                ));
                let new_prefix = format!("{}{}   ", prefix, if is_last_child { " " } else { "┃" });
                write_tree(out, child, &new_prefix);
            }
        }
    }
}
