use std::path::Path;

/// Language label for a known text extension, `None` for anything else.
/// The lookup is case-insensitive.
pub fn language_for(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        // Programming languages
        "rs" => Some("rust"),
        "py" | "pyi" | "pyw" => Some("python"),
        "js" | "mjs" | "cjs" => Some("javascript"),
        "jsx" => Some("javascript"),
        "ts" | "tsx" | "mts" | "cts" => Some("typescript"),
        "java" => Some("java"),
        "c" => Some("c"),
        "cpp" | "cc" | "cxx" | "hpp" | "hh" => Some("cpp"),
        "h" => Some("header"),
        "cs" => Some("csharp"),
        "fs" | "fsx" => Some("fsharp"),
        "go" => Some("go"),
        "rb" | "erb" => Some("ruby"),
        "php" => Some("php"),
        "swift" => Some("swift"),
        "kt" | "kts" => Some("kotlin"),
        "r" => Some("r"),
        "scala" => Some("scala"),
        "lua" => Some("lua"),
        "dart" => Some("dart"),
        "ex" | "exs" => Some("elixir"),
        "hs" => Some("haskell"),
        "clj" | "cljs" => Some("clojure"),
        "zig" => Some("zig"),
        "vue" => Some("vue"),
        "svelte" => Some("svelte"),

        // Web-related languages
        "html" | "htm" => Some("html"),
        "xml" => Some("xml"),
        "xhtml" => Some("xhtml"),
        "svg" => Some("svg"),
        "css" => Some("css"),
        "scss" => Some("scss"),
        "sass" => Some("sass"),
        "less" => Some("less"),

        // Scripting and configuration files
        "sh" => Some("shell"),
        "bash" => Some("bash"),
        "zsh" => Some("zsh"),
        "fish" => Some("fish"),
        "ps1" => Some("powershell"),
        "bat" | "cmd" => Some("batch"),
        "toml" => Some("toml"),
        "yaml" | "yml" => Some("yaml"),
        "json" | "jsonc" => Some("json"),
        "ini" | "cfg" => Some("ini"),
        "conf" => Some("conf"),
        "env" => Some("dotenv"),
        "properties" => Some("properties"),
        "gradle" => Some("gradle"),
        "cmake" => Some("cmake"),
        "graphql" | "gql" => Some("graphql"),
        "proto" => Some("protobuf"),
        "sql" => Some("sql"),

        // Data formats
        "csv" => Some("csv"),
        "tsv" => Some("tsv"),

        // Documentation and markup
        "md" | "markdown" => Some("markdown"),
        "rst" => Some("reStructuredText"),
        "txt" | "text" | "log" => Some("text"),
        "tex" => Some("latex"),
        "bib" => Some("bibtex"),
        "adoc" => Some("asciidoc"),

        _ => None,
    }
}

/// Decides by extension alone whether a path is a text file worth
/// including. Files without an extension are never text.
pub fn is_text_file<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map_or(false, |ext| language_for(ext).is_some())
}
